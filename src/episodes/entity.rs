//! Record implementation for [`Episode`]. Episodes have no write path.

use crate::framework::Record;
use crate::model::{Document, Episode};

impl Record for Episode {
    const KIND: &'static str = "Episode";

    fn id(&self) -> u64 {
        self.id
    }

    fn collection(doc: &Document) -> &[Self] {
        &doc.episodes
    }
}
