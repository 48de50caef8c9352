//! Next/previous resolution over a [`QueueStore`].
//!
//! Both directions wrap at the ends. An active id that is missing from the
//! queue (or no active id at all) resolves to the first element going
//! forward and to the last element going backward.

use super::QueueStore;
use crate::library::TrackId;

/// The id after `active`, wrapping to the first. `None` only for an empty queue.
pub fn next_id(ids: &[TrackId], active: Option<TrackId>) -> Option<TrackId> {
    let first = *ids.first()?;
    let pos = active.and_then(|a| ids.iter().position(|&i| i == a));
    match pos {
        Some(p) => Some(ids.get(p + 1).copied().unwrap_or(first)),
        None => Some(first),
    }
}

/// The id before `active`, wrapping to the last. `None` only for an empty queue.
pub fn prev_id(ids: &[TrackId], active: Option<TrackId>) -> Option<TrackId> {
    let last = *ids.last()?;
    let pos = active.and_then(|a| ids.iter().position(|&i| i == a));
    match pos {
        Some(0) | None => Some(last),
        Some(p) => Some(ids[p - 1]),
    }
}

/// Activate the next track. No-op on an empty queue.
pub fn advance<Q: QueueStore + ?Sized>(queue: &mut Q) {
    if let Some(id) = next_id(queue.ids(), queue.active_id()) {
        queue.set_active(id);
    }
}

/// Activate the previous track. No-op on an empty queue.
pub fn retreat<Q: QueueStore + ?Sized>(queue: &mut Q) {
    if let Some(id) = prev_id(queue.ids(), queue.active_id()) {
        queue.set_active(id);
    }
}
