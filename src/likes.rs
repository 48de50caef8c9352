//! Like status of tracks, keyed by id. Kept in memory for the session only.

use std::collections::HashSet;

use tracing::debug;

use crate::library::TrackId;

pub trait LikeStore {
    fn is_liked(&self, id: TrackId) -> bool;
    /// Flip the like status and return the new value.
    fn toggle(&mut self, id: TrackId) -> bool;
}

#[derive(Debug, Default)]
pub struct LikedSongs {
    liked: HashSet<TrackId>,
}

impl LikeStore for LikedSongs {
    fn is_liked(&self, id: TrackId) -> bool {
        self.liked.contains(&id)
    }

    fn toggle(&mut self, id: TrackId) -> bool {
        let liked = if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id)
        };
        debug!(%id, liked, "like toggled");
        liked
    }
}
