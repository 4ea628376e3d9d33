//! Generic single-writer framework for the collections of the backing document.
//!
//! # Main Components
//!
//! - [`Record`] / [`Entity`] - read-side and write-side contracts a record type implements
//! - [`ResourceActor`] - the task that applies writes one at a time
//! - [`ResourceClient`] - cloneable handle that sends writes to the actor
//! - [`FrameworkError`] - common error type
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor.

mod actor;
mod client;
mod entity;
mod error;
mod message;
pub mod mock;

pub use actor::*;
pub use client::*;
pub use entity::*;
pub use error::*;
pub use message::*;
