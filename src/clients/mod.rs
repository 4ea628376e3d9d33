//! Type-safe collection clients.
//!
//! Reads come from the store snapshot ([`RecordClient`]); character writes are sent to
//! the character actor through a [`ResourceClient`](crate::framework::ResourceClient).

pub mod character_client;
pub mod episode_client;
pub mod record_client;

pub use character_client::*;
pub use episode_client::*;
pub use record_client::*;
