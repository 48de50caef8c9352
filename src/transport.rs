//! Transport controller: play/pause, volume, mute and loop over one live
//! engine handle.
//!
//! Playback state is never set optimistically. Commands go to the handle and
//! `state` only moves when the engine reports the transition back through
//! [`Transport::handle_event`].

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::audio::{AudioEngine, EngineEvent, EngineEventKind, SoundHandle, SoundOptions, clamp_volume};
use crate::queue::{QueueStore, navigator};

/// Playback state as acknowledged by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

pub struct Transport<E: AudioEngine> {
    engine: E,
    handle: Option<E::Handle>,
    current_path: Option<PathBuf>,
    state: PlaybackState,
    volume: f32,
    looping: bool,
    formats: Vec<String>,
}

impl<E: AudioEngine> Transport<E> {
    pub fn new(engine: E, volume: f32, looping: bool, formats: Vec<String>) -> Self {
        Self {
            engine,
            handle: None,
            current_path: None,
            state: PlaybackState::Idle,
            volume: clamp_volume(volume),
            looping,
            formats,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Bind the controller to `path` and start it.
    ///
    /// The previous handle is released before the new one is acquired.
    /// Loading the path that is already bound does nothing.
    pub fn load(&mut self, path: &Path) {
        if self.current_path.as_deref() == Some(path) {
            return;
        }
        self.release();

        let options = SoundOptions {
            volume: self.volume,
            looping: self.looping,
            formats: self.formats.clone(),
        };
        let handle = self.engine.load(path, &options);
        info!(handle = handle.id(), path = %path.display(), "track loaded");
        handle.play();

        self.handle = Some(handle);
        self.current_path = Some(path.to_path_buf());
    }

    /// Unload the live handle, if any, and return to `Idle`.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = handle.id(), "releasing handle");
            handle.unload();
        }
        self.current_path = None;
        self.state = PlaybackState::Idle;
    }

    /// Pause when playing, otherwise ask the engine to play.
    pub fn toggle_playback(&self) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };
        if self.is_playing() {
            handle.pause();
        } else {
            handle.play();
        }
    }

    /// Silence, or restore full volume when already silent.
    pub fn toggle_mute(&mut self) {
        let target = if self.is_muted() { 1.0 } else { 0.0 };
        self.set_volume(target);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(handle) = self.handle.as_ref() {
            handle.set_volume(self.volume);
        }
    }

    pub fn nudge_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    /// Flip repeat-one; a live handle adopts the new flag immediately.
    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        if let Some(handle) = self.handle.as_ref() {
            handle.set_loop(self.looping);
        }
    }

    /// Apply an engine event. Events for handles other than the live one are
    /// stale and ignored.
    pub fn handle_event<Q: QueueStore + ?Sized>(&mut self, event: EngineEvent, queue: &mut Q) {
        let live = self.handle.as_ref().map(|h| h.id());
        if live != Some(event.handle) {
            debug!(handle = event.handle, ?live, "stale engine event ignored");
            return;
        }

        match event.kind {
            EngineEventKind::Play => self.state = PlaybackState::Playing,
            EngineEventKind::Pause => self.state = PlaybackState::Paused,
            EngineEventKind::End => {
                self.state = PlaybackState::Idle;
                if self.looping {
                    if let Some(handle) = self.handle.as_ref() {
                        handle.play();
                    }
                } else {
                    navigator::advance(queue);
                }
            }
            EngineEventKind::LoadError(message) => {
                warn!(handle = event.handle, %message, "track could not be played");
                self.state = PlaybackState::Idle;
            }
        }
    }
}

impl<E: AudioEngine> Drop for Transport<E> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests;
