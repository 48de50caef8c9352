//! Playback queue: the shared store of track ids and the navigator that
//! walks it with wraparound.

pub mod navigator;
mod store;

pub use store::{PlayerQueue, QueueStore};
