//! Audio engine seam and its rodio backend.
//!
//! The transport bar talks to an [`AudioEngine`] through [`SoundHandle`]s and
//! learns about playback transitions only through [`EngineEvent`]s.

mod engine;
#[cfg(test)]
pub mod fake;
mod player;
mod sink;
mod thread;
mod types;

pub use engine::{AudioEngine, SoundHandle};
pub use player::RodioEngine;
pub use types::{EngineEvent, EngineEventKind, HandleId, SoundOptions, clamp_volume};
