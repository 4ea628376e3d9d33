//! Episode collection (read-only).

pub mod entity;

use std::sync::Arc;

use crate::clients::EpisodeClient;
use crate::store::Store;

/// Creates the episode client. No actor: episodes are never written.
pub fn new(store: Arc<Store>) -> EpisodeClient {
    EpisodeClient::new(store)
}
