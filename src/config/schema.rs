use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// Looked up at `$NOWBAR_CONFIG_PATH`, then `$XDG_CONFIG_HOME/nowbar/config.toml`,
/// then `~/.config/nowbar/config.toml`. A missing file is fine.
///
/// `NOWBAR__<SECTION>__<KEY>` environment variables override the file, which
/// overrides the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub library: LibrarySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume the bar starts at, in `[0, 1]`.
    pub initial_volume: f32,
    /// Preferred formats handed to the engine with every load.
    pub formats: Vec<String>,
    /// Fade-out duration when quitting (milliseconds). 0 stops immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            formats: vec!["mp3".to_string()],
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether repeat-one starts enabled.
    pub looping: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Text in the top header box.
    pub header_text: String,
    /// Terminals narrower than this hide previous/next/loop and the volume column.
    pub narrow_breakpoint: u16,
    /// Interval between marquee steps (milliseconds).
    pub marquee_tick_ms: u64,
    /// Blank columns between two repeats of scrolling text.
    pub marquee_gap: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " now playing ".to_string(),
            narrow_breakpoint: 80,
            marquee_tick_ms: 200,
            marquee_gap: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change applied by `+` / `-`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { volume_step: 0.05 }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
    Album,
    Filename,
    Path,
}

/// How the queue is built from the directory given on the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions, without the dot; matched case-insensitively.
    pub extensions: Vec<String>,
    pub follow_links: bool,
    /// Dotfiles and dot-directories are skipped unless set.
    pub include_hidden: bool,
    pub recursive: bool,
    /// Depth limit when `recursive` is set. Ignored otherwise.
    pub max_depth: Option<usize>,
    /// Queue row label, built from these fields in order.
    pub display_fields: Vec<TrackDisplayField>,
    pub display_separator: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp3", "flac", "wav", "ogg", "m4a"].map(String::from).to_vec(),
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
            display_fields: vec![TrackDisplayField::Artist, TrackDisplayField::Title],
            display_separator: " - ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file; `None` picks the XDG state directory.
    pub file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "nowbar=info".to_string(),
        }
    }
}
