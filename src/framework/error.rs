//! # Framework Errors
//!
//! Errors shared by every [`ResourceActor`](super::ResourceActor) and
//! [`ResourceClient`](super::ResourceClient).

use crate::store::StoreError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u64 },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Entity error: {0}")]
    Entity(String),
    #[error("Blocking task failed: {0}")]
    Join(String),
}
