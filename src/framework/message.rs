//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](super::ResourceClient) to its
//! [`ResourceActor`](super::ResourceActor).

use tokio::sync::oneshot;

use super::{Entity, FrameworkError};

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// The write operations an actor serves. Reads never go through the actor: they hit the
/// store's snapshot directly.
///
/// Every variant answers with the affected entity: the created one, the updated one, or
/// the one that was removed.
#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: u64,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: u64,
        respond_to: Response<T>,
    },
}
