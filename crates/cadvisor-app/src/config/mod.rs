//! Configuration loading and types
//!
//! Settings come from `~/.config/cadvisor/config.toml` (or an explicit
//! `--config` path) with CLI flags layered on top by the binary. Loading
//! is lenient: a missing file is normal, an unreadable or malformed file
//! logs a warning and falls back to defaults. Every section and key is
//! optional.

mod types;

pub use types::{ApiSettings, ChatSettings, Settings, UiSettings};

use std::path::{Path, PathBuf};

use cadvisor_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "cadvisor";

/// Default location: `~/.config/cadvisor/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the given path, or the default location when `None`.
///
/// Never fails: every problem short of a well-formed file is logged and
/// answered with defaults, so a broken config cannot keep the TUI from
/// starting.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                warn!("no config directory available; using default settings");
                return Settings::default();
            }
        },
    };

    if !path.exists() {
        debug!("no config file at {}; using defaults", path.display());
        return Settings::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("invalid config at {}: {e}; using defaults", path.display());
                Settings::default()
            }
        },
        Err(e) => {
            warn!("could not read {}: {e}; using defaults", path.display());
            Settings::default()
        }
    }
}
