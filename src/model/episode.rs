use serde::{Deserialize, Serialize};

use super::Fields;

/// An episode of the dataset. `season` drives the season filter; the rest is opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i64>,
    #[serde(flatten)]
    pub extra: Fields,
}

impl Episode {
    pub fn new(id: u64, season: i64) -> Self {
        Self {
            id,
            season: Some(season),
            extra: Fields::new(),
        }
    }
}
