//! Helpers around `rodio` sinks: opening sources, building paused sinks and
//! fading out.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::thread;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::{Error, Result};

fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Decoder::new(BufReader::new(file)).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build a paused sink at `volume` with `path` queued.
pub(super) fn create_sink(stream: &OutputStream, path: &Path, volume: f32) -> Result<Sink> {
    let source = open_source(path)?;
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}

/// Queue `path` again on a sink that played to the end.
pub(super) fn refill(sink: &Sink, path: &Path) -> Result<()> {
    sink.append(open_source(path)?);
    Ok(())
}

/// Whether `path` has one of the preferred `formats`. An empty list prefers everything.
pub(super) fn is_preferred_format(path: &Path, formats: &[String]) -> bool {
    if formats.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| formats.iter().any(|f| f.trim_start_matches('.').eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Ramp the sink from its current volume down to silence over `fade_out_ms`.
pub(super) fn fade_out(sink: &Sink, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    let start = sink.volume();
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(start * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
