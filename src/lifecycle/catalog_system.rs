use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{CharacterClient, EpisodeClient};
use crate::config::Config;
use crate::store::{Store, StoreError};

/// The runtime orchestrator for the dataset service.
///
/// `CatalogSystem` is responsible for:
/// - **Startup**: opening the [`Store`] (fails fast on a missing or corrupt file)
/// - **Wiring**: spawning the character writer actor and handing out clients
/// - **Shutdown**: closing the writer's channel and waiting for it to drain
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::open(&config)?;
/// let page = system.characters.list(&QueryParams::default()).await?;
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Client for the character collection (reads and writes)
    pub characters: CharacterClient,

    /// Client for the episode collection (reads only)
    pub episodes: EpisodeClient,

    store: Arc<Store>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CatalogSystem {
    /// Opens the configured data file and starts the system.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let store = Store::open(&config.data_path)?;
        Ok(Self::with_store(Arc::new(store), config.writer_buffer))
    }

    /// Starts the system over an existing store.
    pub fn with_store(store: Arc<Store>, writer_buffer: usize) -> Self {
        let (character_actor, characters) =
            crate::characters::new(Arc::clone(&store), writer_buffer);
        let episodes = crate::episodes::new(Arc::clone(&store));

        let character_handle = tokio::spawn(character_actor.run());

        Self {
            characters,
            episodes,
            store,
            handles: vec![character_handle],
        }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the writer channel once every other clone is gone
    /// too; the actor then finishes the queued writes and exits. Callers holding clones
    /// (e.g. open connections) delay completion until they drop them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.characters);
        drop(self.episodes);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        let stats = self.store.stats();
        info!(
            reads = stats.reads,
            hits = stats.hits,
            misses = stats.misses,
            "System shutdown complete."
        );
        Ok(())
    }
}
