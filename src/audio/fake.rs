//! In-memory engine that records every call, for tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::engine::{AudioEngine, SoundHandle};
use super::types::{HandleId, SoundOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(HandleId, PathBuf, SoundOptions),
    Play(HandleId),
    Pause(HandleId),
    SetLoop(HandleId, bool),
    SetVolume(HandleId, f32),
    Unload(HandleId),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Default)]
pub struct FakeEngine {
    pub log: CallLog,
    next: HandleId,
}

pub struct FakeSound {
    id: HandleId,
    log: CallLog,
}

impl FakeSound {
    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl AudioEngine for FakeEngine {
    type Handle = FakeSound;

    fn load(&mut self, path: &Path, options: &SoundOptions) -> FakeSound {
        self.next += 1;
        self.log
            .borrow_mut()
            .push(Call::Load(self.next, path.to_path_buf(), options.clone()));
        FakeSound {
            id: self.next,
            log: self.log.clone(),
        }
    }
}

impl SoundHandle for FakeSound {
    fn id(&self) -> HandleId {
        self.id
    }

    fn play(&self) {
        self.record(Call::Play(self.id));
    }

    fn pause(&self) {
        self.record(Call::Pause(self.id));
    }

    fn set_loop(&self, looping: bool) {
        self.record(Call::SetLoop(self.id, looping));
    }

    fn set_volume(&self, volume: f32) {
        self.record(Call::SetVolume(self.id, volume));
    }

    fn unload(self) {
        self.record(Call::Unload(self.id));
    }
}
