//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`CatalogSystem`] - opens the store, starts the character writer and owns the clients
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::*;
pub use tracing::*;
