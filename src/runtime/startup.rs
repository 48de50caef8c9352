use std::path::Path;

use tracing::info;

use crate::app::App;
use crate::audio::AudioEngine;
use crate::transport::Transport;

/// Activate the first queued track and load whatever the queue activated.
pub fn start_playback<E: AudioEngine>(app: &mut App, transport: &mut Transport<E>) {
    app.activate_first();
    apply_activation(app, transport);
}

/// Bind the transport to a newly activated track, if the queue has one.
///
/// Returns `true` when the active track changed since the last call.
pub fn apply_activation<E: AudioEngine>(app: &mut App, transport: &mut Transport<E>) -> bool {
    let Some(track) = app.take_activation() else {
        return false;
    };
    info!(id = %track.id, title = %track.title, "now playing");
    let path: &Path = &track.path;
    transport.load(path);
    true
}
