use std::{env, path::PathBuf};

use crate::error::{Error, Result};

use super::schema::Settings;

impl Settings {
    /// Load settings from the optional config file, then `NOWBAR__*`
    /// environment overrides, on top of struct defaults.
    pub fn load() -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("NOWBAR")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("audio.formats")
                .with_list_parse_key("library.extensions")
                .try_parsing(true),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the transport bar cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err(Error::InvalidConfig(
                "audio.initial_volume must be within [0, 1]".to_string(),
            ));
        }
        if !(self.controls.volume_step > 0.0 && self.controls.volume_step <= 1.0) {
            return Err(Error::InvalidConfig(
                "controls.volume_step must be within (0, 1]".to_string(),
            ));
        }
        if self.ui.marquee_tick_ms == 0 {
            return Err(Error::InvalidConfig(
                "ui.marquee_tick_ms must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn xdg_dir(var: &str, home_fallback: &[&str]) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        return Some(PathBuf::from(dir));
    }
    env::var_os("HOME").map(|home| {
        home_fallback
            .iter()
            .fold(PathBuf::from(home), |p, part| p.join(part))
    })
}

/// Resolve the config path from `NOWBAR_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("NOWBAR_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/nowbar/config.toml`, or `~/.config/nowbar/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"]).map(|d| d.join("nowbar").join("config.toml"))
}

/// `$XDG_STATE_HOME/nowbar/nowbar.log`, or `~/.local/state/nowbar/nowbar.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", &[".local", "state"]).map(|d| d.join("nowbar").join("nowbar.log"))
}
