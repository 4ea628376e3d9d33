//! # Record & Entity Traits
//!
//! [`Record`] is the read-side contract: how to find a collection in the
//! [`Document`] and how to identify its items. The query engine and every client rely on it.
//!
//! [`Entity`] adds the write-side contract used by [`ResourceActor`](super::ResourceActor):
//! how to build a new item from a payload and how to apply an update to an existing one.
//! Only collections with a write path implement it.

use std::fmt::Debug;

use crate::model::Document;

/// A record stored in one collection of the [`Document`].
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Human-readable kind, used in logs and error messages (e.g. `"Character"`).
    const KIND: &'static str;

    /// Positive identifier, unique within the collection.
    fn id(&self) -> u64;

    /// The collection this record type lives in.
    fn collection(doc: &Document) -> &[Self];
}

/// A record the writer actor can create, update and delete.
pub trait Entity: Record {
    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug + 'static;

    fn collection_mut(doc: &mut Document) -> &mut Vec<Self>;

    /// Construct the full entity from a freshly assigned id and the payload.
    fn from_create_params(id: u64, params: Self::Create) -> Result<Self, String>;

    /// Apply an update in place. On error the entity must be left untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), String>;
}
