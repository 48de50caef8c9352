use std::path::Path;

use super::types::{HandleId, SoundOptions};

/// Something that can turn a playable path into a [`SoundHandle`].
///
/// Loading never fails synchronously: an unplayable file is reported later as
/// an [`EngineEventKind::LoadError`](super::EngineEventKind::LoadError) for
/// the returned handle.
pub trait AudioEngine {
    type Handle: SoundHandle;

    fn load(&mut self, path: &Path, options: &SoundOptions) -> Self::Handle;
}

/// Control surface of one loaded sound.
///
/// Commands are requests. The resulting transitions arrive as engine events
/// tagged with [`SoundHandle::id`].
pub trait SoundHandle {
    fn id(&self) -> HandleId;
    fn play(&self);
    fn pause(&self);
    fn set_loop(&self, looping: bool);
    fn set_volume(&self, volume: f32);
    /// Free every resource held for this sound. Valid in any state.
    fn unload(self);
}
