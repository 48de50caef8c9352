//! Small types shared by the engine seam and the rodio backend.

use std::path::PathBuf;

/// Identifies one loaded sound for the lifetime of an engine.
pub type HandleId = u64;

/// Per-load configuration handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundOptions {
    pub volume: f32,
    pub looping: bool,
    /// Preferred formats (extensions). Other files are still probed.
    pub formats: Vec<String>,
}

/// Transition acknowledged by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEventKind {
    Play,
    Pause,
    End,
    LoadError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub handle: HandleId,
    pub kind: EngineEventKind,
}

/// Clamp to `[0, 1]`; NaN becomes silence.
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[derive(Debug)]
pub(super) enum AudioCmd {
    /// Decode `path` into a paused sound registered under `handle`.
    Load {
        handle: HandleId,
        path: PathBuf,
        options: SoundOptions,
    },
    Play(HandleId),
    Pause(HandleId),
    SetLoop(HandleId, bool),
    SetVolume(HandleId, f32),
    Unload(HandleId),
    /// Fade out every playing sound over `fade_out_ms`, then stop the thread.
    Quit { fade_out_ms: u64 },
}

/// Where a loaded sound is in its lifecycle, as seen by the audio thread.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum SoundState {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Transition {
    Play,
    Pause,
    /// The sink ran out of samples.
    Finish,
}

impl SoundState {
    /// Next state and the event to report, if the transition happens at all.
    pub(super) fn after(self, t: Transition) -> (SoundState, Option<EngineEventKind>) {
        match (self, t) {
            (SoundState::Stopped | SoundState::Paused, Transition::Play) => {
                (SoundState::Playing, Some(EngineEventKind::Play))
            }
            (SoundState::Playing, Transition::Pause) => {
                (SoundState::Paused, Some(EngineEventKind::Pause))
            }
            (SoundState::Playing, Transition::Finish) => {
                (SoundState::Stopped, Some(EngineEventKind::End))
            }
            (state, _) => (state, None),
        }
    }
}
