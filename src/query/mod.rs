//! # Query Engine
//!
//! Deterministic filtering, pagination and link generation over the collections of a
//! [`Document`](crate::model::Document).
//!
//! Validation is deliberately asymmetric. `season` is the only parameter that rejects a
//! request ([`QueryError::InvalidParameter`]); every other malformed value degrades to its
//! default. See [`QueryParams`] for the per-field rules and [`paginate`] for the
//! clamp-down behavior of out-of-range pages.

mod engine;
mod error;
mod page;
mod params;

pub use engine::*;
pub use error::*;
pub use page::*;
pub use params::*;
