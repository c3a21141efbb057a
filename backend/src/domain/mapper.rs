//! Translation from validated request shapes to record shapes.
//!
//! Pure and infallible: anything malformed was rejected before a request
//! value could be constructed.

use super::anime::{Anime, AnimeInsert, AnimeUpdate, NewAnime};

impl From<AnimeInsert> for NewAnime {
    fn from(value: AnimeInsert) -> Self {
        Self::new(value.name)
    }
}

impl From<AnimeUpdate> for Anime {
    fn from(value: AnimeUpdate) -> Self {
        Self::new(value.id, value.name)
    }
}
