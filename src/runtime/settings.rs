use crate::config;
use crate::error::Error;

/// Load settings. An unreadable or invalid config falls back to defaults; the
/// reason is handed back so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<Error>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => (config::Settings::default(), Some(e)),
        },
        Err(e) => (config::Settings::default(), Some(e)),
    }
}
