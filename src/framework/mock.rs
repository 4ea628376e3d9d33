//! # Mock Framework
//!
//! Utilities for testing clients without spawning a real [`ResourceActor`](super::ResourceActor).
//!
//! [`create_mock_client`] returns a client wired to a receiver you control. Helpers such as
//! [`expect_create`] pull the next request off that receiver so a test can assert on the
//! payload and answer it with any result, including failures the real actor rarely produces.

use tokio::sync::mpsc;

use super::{Entity, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and the receiver its requests arrive on.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Update.
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(u64, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Delete.
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(u64, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
