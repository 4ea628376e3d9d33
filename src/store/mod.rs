//! # Read-through Document Store
//!
//! The [`Store`] owns the backing JSON file and an in-memory [`Snapshot`] of it.
//!
//! ## Freshness
//!
//! Every [`Store::load`] stats the file first. When the file's modification time equals the
//! time recorded in the cached snapshot, the cached document is returned without touching the
//! file contents (cache hit). Otherwise the whole file is read and parsed, and the snapshot is
//! replaced as a unit (cache miss).
//!
//! The stat happens *before* the read, so a snapshot's contents are never older than its
//! timestamp claims. A write racing with a reload can only cause one extra reload later.
//!
//! ## Known staleness window
//!
//! Freshness is decided by timestamp equality alone. Two external writes landing within the
//! same timestamp granule of the filesystem are indistinguishable, and the second one is
//! not observed until the file's timestamp moves again. Writes made through
//! [`Store::persist`] are not affected: the persisted document is adopted as the snapshot
//! directly, tagged with the timestamp of the temporary file it was written to. That
//! timestamp is read before the rename, so an external write landing right after it is
//! still seen as a change.
//!
//! ## Writes
//!
//! [`Store::persist`] writes to a temporary sibling file and renames it over the backing
//! file, so readers see either the old or the new document, never a partial one.
//! [`Store::update`] holds the writer lock across load, mutation and persist.

mod error;

pub use error::*;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::SystemTime;

use tempfile::NamedTempFile;
use tracing::{debug, info, trace, warn};

use crate::model::Document;

/// An immutable document paired with the file timestamp it was read at.
#[derive(Debug)]
pub struct Snapshot {
    pub document: Arc<Document>,
    pub modified: SystemTime,
}

/// Counters describing how the cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of times the file contents were read and parsed.
    pub reads: u64,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Default)]
struct Counters {
    reads: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Owner of the backing file and its cached snapshot.
///
/// One instance is created at process start and shared (`Arc<Store>`) by every request
/// handler. Independent instances over different files do not interact.
pub struct Store {
    path: PathBuf,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    /// Bumped by every successful persist; a reload that started earlier must not
    /// install its result over the persisted snapshot.
    generation: AtomicU64,
    writer: Mutex<()>,
    counters: Counters,
}

impl Store {
    /// Creates a store over `path` without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: RwLock::new(None),
            generation: AtomicU64::new(0),
            writer: Mutex::new(()),
            counters: Counters::default(),
        }
    }

    /// Creates a store and performs the initial load, failing fast on a missing or
    /// corrupt file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(path);
        let document = store.load()?;
        info!(
            path = %store.path.display(),
            characters = document.characters.len(),
            episodes = document.episodes.len(),
            "Store opened"
        );
        Ok(store)
    }

    /// Returns the current document, re-reading the file only when it changed.
    ///
    /// # Errors
    /// - [`StoreError::StorageUnavailable`] if the file cannot be stat'ed or read.
    /// - [`StoreError::CorruptData`] if the contents are not a well-formed document.
    pub fn load(&self) -> Result<Arc<Document>, StoreError> {
        let generation = self.generation.load(Ordering::Acquire);
        let modified = self.modified()?;

        if let Some(snapshot) = self.snapshot() {
            if snapshot.modified == modified {
                self.counters.hits.fetch_add(1, Ordering::Relaxed);
                trace!("Cache hit");
                return Ok(Arc::clone(&snapshot.document));
            }
        }

        self.counters.misses.fetch_add(1, Ordering::Relaxed);
        let document = Arc::new(self.read_document()?);
        let reads = self.counters.reads.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(path = %self.path.display(), reads, ?modified, "Reloaded document");

        let snapshot = Snapshot {
            document: Arc::clone(&document),
            modified,
        };
        if let Ok(mut slot) = self.snapshot.write() {
            if self.generation.load(Ordering::Acquire) == generation {
                *slot = Some(Arc::new(snapshot));
            }
        }
        Ok(document)
    }

    /// Serializes `document` over the backing file and adopts it as the new snapshot.
    ///
    /// On failure the file and the cached snapshot are left as they were.
    pub fn persist(&self, document: Document) -> Result<Arc<Document>, StoreError> {
        let _guard = self.lock_writer();
        self.persist_locked(document)
    }

    /// Read-modify-write under the writer lock.
    ///
    /// `apply` mutates a private copy of the current document. When it returns `Ok`, the
    /// copy is persisted; when it returns `Err`, nothing is written.
    pub fn update<R, E>(&self, apply: impl FnOnce(&mut Document) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let _guard = self.lock_writer();
        let current = self.load()?;
        let mut next = Document::clone(&current);
        let result = apply(&mut next)?;
        self.persist_locked(next)?;
        Ok(result)
    }

    /// The cached snapshot, if any, without checking freshness.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().ok().and_then(|slot| slot.clone())
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            reads: self.counters.reads.load(Ordering::Relaxed),
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }

    fn persist_locked(&self, document: Document) -> Result<Arc<Document>, StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| StoreError::unavailable(dir, e))?;
        if let Ok(meta) = fs::metadata(&self.path) {
            if let Err(e) = tmp.as_file().set_permissions(meta.permissions()) {
                warn!(path = %self.path.display(), error = %e, "Could not copy permissions");
            }
        }
        serde_json::to_writer_pretty(&mut tmp, &document)
            .map_err(|e| StoreError::unavailable(tmp.path(), e.into()))?;
        tmp.write_all(b"\n")
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::unavailable(tmp.path(), e))?;
        // Rename keeps the inode, so this is the timestamp the backing file will carry.
        let written = tmp.as_file().metadata().and_then(|meta| meta.modified());
        tmp.persist(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e.error, "Persist failed");
            StoreError::unavailable(&self.path, e.error)
        })?;

        let document = Arc::new(document);
        self.generation.fetch_add(1, Ordering::AcqRel);
        match written {
            Ok(modified) => {
                let snapshot = Snapshot {
                    document: Arc::clone(&document),
                    modified,
                };
                if let Ok(mut slot) = self.snapshot.write() {
                    *slot = Some(Arc::new(snapshot));
                }
            }
            Err(e) => {
                warn!(error = %e, "Stat of new file failed, dropping snapshot");
                if let Ok(mut slot) = self.snapshot.write() {
                    *slot = None;
                }
            }
        }
        info!(
            path = %self.path.display(),
            characters = document.characters.len(),
            episodes = document.episodes.len(),
            "Persisted"
        );
        Ok(document)
    }

    fn modified(&self) -> Result<SystemTime, StoreError> {
        fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .map_err(|e| StoreError::unavailable(&self.path, e))
    }

    fn read_document(&self) -> Result<Document, StoreError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::unavailable(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Corrupt document");
            StoreError::corrupt(&self.path, e)
        })
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, a poisoned lock carries no broken state.
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
