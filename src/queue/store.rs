use tracing::debug;

use crate::library::TrackId;

/// Read access to the ordered ids plus the single mutation the transport bar
/// is allowed to make: activating a track.
pub trait QueueStore {
    fn ids(&self) -> &[TrackId];
    fn active_id(&self) -> Option<TrackId>;
    fn set_active(&mut self, id: TrackId);
}

/// The application's playback queue.
///
/// `revision` bumps on every activation so observers can tell a fresh
/// request apart from the state they already applied.
#[derive(Debug, Clone, Default)]
pub struct PlayerQueue {
    ids: Vec<TrackId>,
    active: Option<TrackId>,
    revision: u64,
}

impl PlayerQueue {
    pub fn new(ids: Vec<TrackId>) -> Self {
        Self {
            ids,
            active: None,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position_of(&self, id: TrackId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }
}

impl QueueStore for PlayerQueue {
    fn ids(&self) -> &[TrackId] {
        &self.ids
    }

    fn active_id(&self) -> Option<TrackId> {
        self.active
    }

    fn set_active(&mut self, id: TrackId) {
        debug!(%id, "queue: set active");
        self.active = Some(id);
        self.revision = self.revision.wrapping_add(1);
    }
}
