use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, SyncSender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use super::sink::{create_sink, fade_out, is_preferred_format, refill};
use super::types::{
    AudioCmd, EngineEvent, EngineEventKind, HandleId, SoundState, Transition, clamp_volume,
};

/// How often finished sinks are detected.
const END_POLL: Duration = Duration::from_millis(100);

/// One loaded sound owned by the audio thread.
pub(super) struct Voice {
    pub(super) path: PathBuf,
    pub(super) sink: Sink,
    pub(super) looping: bool,
    pub(super) state: SoundState,
}

impl Voice {
    pub(super) fn play(&mut self) -> Option<EngineEventKind> {
        let (next, event) = self.state.after(Transition::Play);
        event.as_ref()?;

        // A sound that ran out (or was never looped back) needs its samples again.
        if self.sink.empty() {
            if let Err(e) = refill(&self.sink, &self.path) {
                self.state = SoundState::Stopped;
                return Some(EngineEventKind::LoadError(e.to_string()));
            }
        }
        self.sink.play();
        self.state = next;
        event
    }

    pub(super) fn pause(&mut self) -> Option<EngineEventKind> {
        let (next, event) = self.state.after(Transition::Pause);
        if event.is_some() {
            self.sink.pause();
        }
        self.state = next;
        event
    }

    /// Events produced by reaching the end of the samples, if that happened.
    pub(super) fn poll_finished(&mut self) -> Vec<EngineEventKind> {
        if self.state != SoundState::Playing || !self.sink.empty() {
            return Vec::new();
        }
        let (next, event) = self.state.after(Transition::Finish);
        self.state = next;
        let mut out: Vec<EngineEventKind> = event.into_iter().collect();
        if self.looping {
            out.extend(self.play());
        }
        out
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<EngineEvent>,
    ready: SyncSender<Result<(), String>>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(s) => s,
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        // rodio logs to stderr when the stream is dropped, which would land on the TUI.
        stream.log_on_drop(false);
        let _ = ready.send(Ok(()));
        info!("audio output opened");

        let emit = |handle: HandleId, kind: EngineEventKind| {
            debug!(handle, ?kind, "engine event");
            let _ = events.send(EngineEvent { handle, kind });
        };

        let mut voices: HashMap<HandleId, Voice> = HashMap::new();

        loop {
            match rx.recv_timeout(END_POLL) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load {
                        handle,
                        path,
                        options,
                    } => {
                        if !is_preferred_format(&path, &options.formats) {
                            debug!(path = %path.display(), formats = ?options.formats, "outside preferred formats, probing anyway");
                        }
                        match create_sink(&stream, &path, clamp_volume(options.volume)) {
                            Ok(sink) => {
                                voices.insert(
                                    handle,
                                    Voice {
                                        path,
                                        sink,
                                        looping: options.looping,
                                        state: SoundState::Stopped,
                                    },
                                );
                            }
                            Err(e) => {
                                warn!(handle, error = %e, "load failed");
                                emit(handle, EngineEventKind::LoadError(e.to_string()));
                            }
                        }
                    }
                    AudioCmd::Play(handle) => {
                        if let Some(ev) = voices.get_mut(&handle).and_then(Voice::play) {
                            emit(handle, ev);
                        }
                    }
                    AudioCmd::Pause(handle) => {
                        if let Some(ev) = voices.get_mut(&handle).and_then(Voice::pause) {
                            emit(handle, ev);
                        }
                    }
                    AudioCmd::SetLoop(handle, looping) => {
                        if let Some(v) = voices.get_mut(&handle) {
                            v.looping = looping;
                        }
                    }
                    AudioCmd::SetVolume(handle, volume) => {
                        if let Some(v) = voices.get(&handle) {
                            v.sink.set_volume(clamp_volume(volume));
                        }
                    }
                    AudioCmd::Unload(handle) => {
                        if let Some(v) = voices.remove(&handle) {
                            v.sink.stop();
                            debug!(handle, "unloaded");
                        }
                    }
                    AudioCmd::Quit { fade_out_ms } => {
                        for v in voices.values().filter(|v| v.state == SoundState::Playing) {
                            fade_out(&v.sink, fade_out_ms);
                        }
                        for (_, v) in voices.drain() {
                            v.sink.stop();
                        }
                        info!("audio thread stopped");
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    for (&handle, voice) in voices.iter_mut() {
                        for ev in voice.poll_finished() {
                            emit(handle, ev);
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
