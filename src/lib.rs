//! # TWD API
//!
//! A read/write JSON service over The Walking Dead dataset: one JSON document holding a
//! `characters` and an `episodes` collection.
//!
//! ## Design
//!
//! ### Reads: a file-backed snapshot
//! Every read goes through the [`Store`](store::Store). It keeps the last parsed document
//! and reuses it while the file's modification time is unchanged, so repeated reads cost a
//! `stat` instead of a parse. A write made by another process is picked up on the next
//! read.
//!
//! ### Writes: one actor per writable collection
//! Creates, updates and deletes are sent to a [`ResourceActor`](framework::ResourceActor),
//! which applies them one at a time as read-modify-write cycles of the whole document.
//! The file is replaced atomically, so readers never see a partial write, and no update
//! is lost to a concurrent one.
//!
//! ### Queries: pure functions
//! Filtering and pagination ([`query`]) are pure functions of a collection and the raw
//! query parameters. Malformed values fall back to defaults; only an out-of-range
//! `season` and a bad id reject the request.
//!
//! ## Module Tour
//!
//! - [`model`] - the document and its records; unknown fields are kept verbatim
//! - [`store`] - snapshot cache and atomic persistence
//! - [`query`] - filters, pagination, navigation links and id validation
//! - [`framework`] - the generic single-writer actor and its client
//! - [`characters`], [`episodes`] - per-collection wiring
//! - [`clients`] - typed clients used by the HTTP layer
//! - [`lifecycle`] - startup, shutdown and tracing setup
//! - [`http`] - routes and JSON responses
//! - [`config`] - command-line and environment settings
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --data data.json
//! ```

pub mod characters;
pub mod clients;
pub mod config;
pub mod episodes;
pub mod error;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod query;
pub mod store;
