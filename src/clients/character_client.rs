use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::RecordClient;
use crate::error::ApiError;
use crate::framework::ResourceClient;
use crate::model::{Character, Fields};
use crate::query::{list_characters, parse_id, Page, QueryParams};
use crate::store::Store;

/// Client for the character collection: snapshot reads plus writes through the actor.
#[derive(Clone)]
pub struct CharacterClient {
    inner: ResourceClient<Character>,
    store: Arc<Store>,
}

impl CharacterClient {
    pub fn new(inner: ResourceClient<Character>, store: Arc<Store>) -> Self {
        Self { inner, store }
    }

    /// Filtered, paginated listing.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &QueryParams) -> Result<Page<Character>, ApiError> {
        let doc = self.document().await?;
        Ok(list_characters(&doc.characters, params))
    }

    /// Adds a character with a freshly assigned id. Any `id` in `fields` is ignored.
    #[instrument(skip(self, fields))]
    pub async fn create(&self, fields: Fields) -> Result<Character, ApiError> {
        debug!(?fields, "create called");
        Ok(self.inner.create(fields).await?)
    }

    /// Merges `fields` into the character identified by `raw_id`.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, raw_id: &str, fields: Fields) -> Result<Character, ApiError> {
        let id = parse_id(raw_id, "Character")?;
        debug!(id, ?fields, "update called");
        Ok(self.inner.update(id, fields).await?)
    }

    /// Removes the character identified by `raw_id` and returns it.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<Character, ApiError> {
        let id = parse_id(raw_id, "Character")?;
        Ok(self.inner.delete(id).await?)
    }
}

#[async_trait]
impl RecordClient<Character> for CharacterClient {
    fn store(&self) -> &Arc<Store> {
        &self.store
    }
}
