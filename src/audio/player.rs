use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::engine::{AudioEngine, SoundHandle};
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, EngineEvent, HandleId, SoundOptions};

fn send(tx: &Sender<AudioCmd>, cmd: AudioCmd) {
    if let Err(mpsc::SendError(cmd)) = tx.send(cmd) {
        debug!(?cmd, "audio thread gone, command dropped");
    }
}

/// Engine backed by a dedicated thread that owns the `rodio` output stream.
pub struct RodioEngine {
    tx: Sender<AudioCmd>,
    next_handle: HandleId,
    join: Option<JoinHandle<()>>,
}

impl RodioEngine {
    /// Open the default output device and start the audio thread.
    ///
    /// Returns the engine and the receiving end of its lifecycle events.
    pub fn start() -> Result<(Self, Receiver<EngineEvent>)> {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        let (ready_tx, ready_rx) = mpsc::sync_channel::<std::result::Result<(), String>>(1);

        let join = spawn_audio_thread(rx, event_tx, ready_tx);

        match ready_rx.recv() {
            Ok(Ok(())) => Ok((
                Self {
                    tx,
                    next_handle: 0,
                    join: Some(join),
                },
                event_rx,
            )),
            Ok(Err(msg)) => {
                let _ = join.join();
                Err(Error::Output(msg))
            }
            Err(_) => {
                let _ = join.join();
                Err(Error::EngineGone)
            }
        }
    }

    /// Fade out whatever is playing and join the audio thread.
    pub fn shutdown(&mut self, fade_out: Duration) {
        let Some(join) = self.join.take() else {
            return;
        };
        send(
            &self.tx,
            AudioCmd::Quit {
                fade_out_ms: fade_out.as_millis() as u64,
            },
        );
        if join.join().is_err() {
            warn!("audio thread panicked");
        }
    }
}

impl Drop for RodioEngine {
    fn drop(&mut self) {
        self.shutdown(Duration::ZERO);
    }
}

impl AudioEngine for RodioEngine {
    type Handle = RodioSound;

    fn load(&mut self, path: &Path, options: &SoundOptions) -> RodioSound {
        self.next_handle += 1;
        let id = self.next_handle;
        debug!(handle = id, path = %path.display(), "load");
        send(
            &self.tx,
            AudioCmd::Load {
                handle: id,
                path: path.to_path_buf(),
                options: options.clone(),
            },
        );
        RodioSound {
            id,
            tx: self.tx.clone(),
        }
    }
}

/// Handle to a sound living on the audio thread.
#[derive(Debug)]
pub struct RodioSound {
    id: HandleId,
    tx: Sender<AudioCmd>,
}

impl SoundHandle for RodioSound {
    fn id(&self) -> HandleId {
        self.id
    }

    fn play(&self) {
        send(&self.tx, AudioCmd::Play(self.id));
    }

    fn pause(&self) {
        send(&self.tx, AudioCmd::Pause(self.id));
    }

    fn set_loop(&self, looping: bool) {
        send(&self.tx, AudioCmd::SetLoop(self.id, looping));
    }

    fn set_volume(&self, volume: f32) {
        send(&self.tx, AudioCmd::SetVolume(self.id, volume));
    }

    fn unload(self) {
        send(&self.tx, AudioCmd::Unload(self.id));
    }
}
