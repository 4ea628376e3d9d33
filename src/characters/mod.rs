//! Character collection: entity implementation and writer wiring.

pub mod entity;

use std::sync::Arc;

use crate::clients::CharacterClient;
use crate::framework::{wall_clock_ids, ResourceActor};
use crate::model::Character;
use crate::store::Store;

/// Creates the character writer actor and its client.
pub fn new(store: Arc<Store>, buffer_size: usize) -> (ResourceActor<Character>, CharacterClient) {
    let (actor, writer) = ResourceActor::new(Arc::clone(&store), buffer_size, wall_clock_ids());
    (actor, CharacterClient::new(writer, store))
}
