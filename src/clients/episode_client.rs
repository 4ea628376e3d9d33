use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::clients::RecordClient;
use crate::error::ApiError;
use crate::model::Episode;
use crate::query::{list_episodes, QueryParams};
use crate::store::Store;

/// Read-only client for the episode collection.
#[derive(Clone)]
pub struct EpisodeClient {
    store: Arc<Store>,
}

impl EpisodeClient {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All episodes, or only those of the requested `season`.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &QueryParams) -> Result<Vec<Episode>, ApiError> {
        // Validate before touching the store.
        params.season()?;
        let doc = self.document().await?;
        Ok(list_episodes(&doc.episodes, params)?)
    }
}

#[async_trait]
impl RecordClient<Episode> for EpisodeClient {
    fn store(&self) -> &Arc<Store> {
        &self.store
    }
}
