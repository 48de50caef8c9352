use crate::library::{Track, TrackId};
use crate::likes::{LikeStore, LikedSongs};
use crate::overflow::{Marquee, MeasurementProvider, OverflowDetector};
use crate::queue::{PlayerQueue, QueueStore};

pub struct App {
    pub tracks: Vec<Track>,
    pub queue: PlayerQueue,
    /// Cursor row in the queue list.
    pub selected: usize,
    pub likes: LikedSongs,
    pub overflow: OverflowDetector,
    pub marquee: Marquee,
    pub current_dir: Option<String>,
    applied_revision: u64,
}

impl App {
    /// Build the model with every track queued in library order.
    pub fn new(tracks: Vec<Track>) -> Self {
        let queue = PlayerQueue::new(tracks.iter().map(|t| t.id).collect());
        let applied_revision = queue.revision();
        Self {
            tracks,
            queue,
            selected: 0,
            likes: LikedSongs::default(),
            overflow: OverflowDetector::default(),
            marquee: Marquee::default(),
            current_dir: None,
            applied_revision,
        }
    }

    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0).filter(|t| t.id == id)
    }

    pub fn active_track(&self) -> Option<&Track> {
        self.queue.active_id().and_then(|id| self.track(id))
    }

    pub fn now_playing_text(&self) -> String {
        self.active_track()
            .map(Track::now_playing_text)
            .unwrap_or_default()
    }

    pub fn selected_id(&self) -> Option<TrackId> {
        self.queue.ids().get(self.selected).copied()
    }

    /// Move the cursor down, wrapping to the top.
    pub fn select_next(&mut self) {
        let len = self.queue.ids().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    /// Move the cursor up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        let len = self.queue.ids().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Ask the queue to activate the track under the cursor.
    pub fn activate_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.queue.set_active(id);
        }
    }

    /// Activate the first queued track, if nothing is active yet.
    pub fn activate_first(&mut self) {
        if self.queue.active_id().is_none() {
            if let Some(&first) = self.queue.ids().first() {
                self.queue.set_active(first);
            }
        }
    }

    /// Return the track the queue activated since the last call, if any.
    ///
    /// Also moves the cursor onto it and resets the marquee.
    pub fn take_activation(&mut self) -> Option<&Track> {
        if self.queue.revision() == self.applied_revision {
            return None;
        }
        self.applied_revision = self.queue.revision();
        let id = self.queue.active_id()?;
        if let Some(pos) = self.queue.position_of(id) {
            self.selected = pos;
        }
        self.marquee.reset();
        self.track(id)
    }

    /// Re-run overflow detection; scrolling restarts when it stops overflowing.
    pub fn check_overflow<M: MeasurementProvider + ?Sized>(&mut self, m: &M) -> bool {
        let overflowing = self.overflow.check(m);
        if !overflowing {
            self.marquee.reset();
        }
        overflowing
    }

    /// Advance the marquee by one column when the text overflows.
    pub fn tick_marquee(&mut self, gap: usize) {
        if self.overflow.is_overflowing() {
            let text = self.now_playing_text();
            self.marquee.step(&text, gap);
        }
    }

    pub fn is_active_liked(&self) -> bool {
        self.queue
            .active_id()
            .is_some_and(|id| self.likes.is_liked(id))
    }

    /// Toggle the like on the active track. `None` when nothing is active.
    pub fn toggle_like_active(&mut self) -> Option<bool> {
        let id = self.queue.active_id()?;
        Some(self.likes.toggle(id))
    }

    pub fn has_tracks(&self) -> bool {
        !self.queue.is_empty()
    }
}
