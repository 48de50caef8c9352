//! Crate-wide error type.
//!
//! Navigation and transport commands never fail; errors only come from the
//! outer edges: the terminal, the audio output device, decoding a file and
//! loading configuration.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal or filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered configuration could not be built or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Settings were readable but out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No usable audio output device.
    #[error("Audio output error: {0}")]
    Output(String),

    /// A track could not be opened or decoded.
    #[error("Cannot decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The audio thread is gone.
    #[error("Audio engine disconnected")]
    EngineGone,
}
