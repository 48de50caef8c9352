use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Stable identifier of a scanned track, used by the playback queue and the
/// like store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playable track and the metadata the bar displays for it.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    /// Playable location handed to the audio engine.
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    /// Cover image found next to the file, if any.
    pub artwork: Option<PathBuf>,
    pub display: String,
}

impl Track {
    /// Text shown in the now-playing slot: `title · artist`.
    pub fn now_playing_text(&self) -> String {
        match self.artist.as_deref().map(str::trim).filter(|a| !a.is_empty()) {
            Some(artist) => format!("{} · {}", self.title, artist),
            None => self.title.clone(),
        }
    }
}
