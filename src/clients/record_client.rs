use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::framework::Record;
use crate::model::Document;
use crate::query::{find_by_id, parse_id};
use crate::store::Store;

/// Read operations shared by every collection client.
///
/// Reads never go through an actor. They are answered from the [`Store`] snapshot,
/// which is reloaded from disk only when the file changed.
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// Access the backing store.
    fn store(&self) -> &Arc<Store>;

    /// Current document. File I/O runs on the blocking pool.
    async fn document(&self) -> Result<Arc<Document>, ApiError> {
        let store = Arc::clone(self.store());
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .map_err(ApiError::from)
    }

    /// The whole collection, in stored order.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn all(&self) -> Result<Vec<T>, ApiError> {
        tracing::debug!("Loading collection");
        Ok(T::collection(&*self.document().await?).to_vec())
    }

    /// Fetch one record by its raw (unvalidated) identifier.
    ///
    /// The identifier is validated before the store is touched.
    #[tracing::instrument(skip(self), fields(entity_type = T::KIND))]
    async fn get(&self, raw_id: &str) -> Result<T, ApiError> {
        let id = parse_id(raw_id, T::KIND)?;
        tracing::debug!(id, "Get");
        let doc = self.document().await?;
        Ok(find_by_id(T::collection(&doc), id)?.clone())
    }
}
