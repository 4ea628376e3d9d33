use serde::{Deserialize, Serialize};

use super::{Character, Episode, Fields};

/// The whole dataset: the unit of persistence and of cache invalidation.
///
/// Both collections are required when parsing. Unknown top-level keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub characters: Vec<Character>,
    pub episodes: Vec<Episode>,
    #[serde(flatten)]
    pub extra: Fields,
}
