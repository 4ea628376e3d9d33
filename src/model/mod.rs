//! Pure data structures persisted in the backing document.
//!
//! [`Character`] and [`Episode`] implement [`Record`](crate::framework::Record) so the
//! query engine and clients can treat both collections uniformly.

pub mod character;
pub mod document;
pub mod episode;

pub use character::*;
pub use document::*;
pub use episode::*;

/// Free-form JSON fields, as received from callers or carried through unchanged.
pub type Fields = serde_json::Map<String, serde_json::Value>;
