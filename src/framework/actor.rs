//! # Single-Writer Actor
//!
//! `ResourceActor` serialises every write to one collection of the backing document.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::store::Store;

/// The generic actor that owns the write path of one collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. Reads are served straight from the
/// [`Store`] snapshot by the clients; only creates, updates and deletes arrive here.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially*, so two writes never interleave.
/// Each write is a full read-modify-write of the document through [`Store::update`],
/// which also holds the store's writer lock; a second actor over the same store would
/// still not lose updates.
///
/// File I/O runs on the blocking pool (`spawn_blocking`) so the reactor never stalls.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Arc<Store>,
    next_id_fn: Box<dyn FnMut() -> u64 + Send>,
}

impl<T: Entity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel (at least 1).
    /// * `next_id_fn` - source of fresh identifiers, see [`wall_clock_ids`].
    pub fn new(
        store: Arc<Store>,
        buffer_size: usize,
        next_id_fn: impl FnMut() -> u64 + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store,
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        let entity_type = T::KIND;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let candidate = (self.next_id_fn)();
                    let result = Self::write(Arc::clone(&self.store), move |store| {
                        store.update(|doc| {
                            let items = T::collection_mut(doc);
                            let mut id = candidate;
                            while items.iter().any(|item| item.id() == id) {
                                id += 1;
                            }
                            let item = T::from_create_params(id, params)
                                .map_err(FrameworkError::Entity)?;
                            items.push(item.clone());
                            Ok::<_, FrameworkError>((item, items.len()))
                        })
                    })
                    .await;
                    let _ = respond_to.send(match result {
                        Ok((item, size)) => {
                            info!(entity_type, id = item.id(), size, "Created");
                            Ok(item)
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(e)
                        }
                    });
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, id, ?update, "Update");
                    let result = Self::write(Arc::clone(&self.store), move |store| {
                        store.update(|doc| {
                            let item = T::collection_mut(doc)
                                .iter_mut()
                                .find(|item| item.id() == id)
                                .ok_or(FrameworkError::NotFound { kind: T::KIND, id })?;
                            item.on_update(update).map_err(FrameworkError::Entity)?;
                            Ok::<_, FrameworkError>(item.clone())
                        })
                    })
                    .await;
                    match &result {
                        Ok(_) => info!(entity_type, id, "Updated"),
                        Err(e) => warn!(entity_type, id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, id, "Delete");
                    let result = Self::write(Arc::clone(&self.store), move |store| {
                        store.update(|doc| {
                            let items = T::collection_mut(doc);
                            let index = items
                                .iter()
                                .position(|item| item.id() == id)
                                .ok_or(FrameworkError::NotFound { kind: T::KIND, id })?;
                            let removed = items.remove(index);
                            Ok::<_, FrameworkError>((removed, items.len()))
                        })
                    })
                    .await;
                    let _ = respond_to.send(match result {
                        Ok((removed, size)) => {
                            info!(entity_type, id, size, "Deleted");
                            Ok(removed)
                        }
                        Err(e) => {
                            warn!(entity_type, id, error = %e, "Delete failed");
                            Err(e)
                        }
                    });
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    async fn write<R, F>(store: Arc<Store>, op: F) -> Result<R, FrameworkError>
    where
        R: Send + 'static,
        F: FnOnce(&Store) -> Result<R, FrameworkError> + Send + 'static,
    {
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| FrameworkError::Join(e.to_string()))?
    }
}

/// Monotonic wall-clock identifiers: milliseconds since the epoch, bumped past the last
/// value handed out when the clock has not moved (or moved backwards).
pub fn wall_clock_ids() -> impl FnMut() -> u64 + Send + 'static {
    let mut last = 0u64;
    move || {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        last = now.max(last + 1);
        last
    }
}
