//! User configuration
//!
//! Read from `~/.config/curdle/config.json` (or the platform equivalent).
//! A missing or malformed file yields defaults; command-line flags override
//! whatever the file says.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::daily::GeneratorKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Secret generator; anything but `legacy` changes the daily answers
    pub generator: GeneratorKind,
    /// Where sessions and statistics are kept
    pub data_dir: Option<PathBuf>,
}

impl UserConfig {
    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, generator: Option<GeneratorKind>, data_dir: Option<PathBuf>) -> Self {
        if let Some(generator) = generator {
            self.generator = generator;
        }
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }
}

#[must_use]
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("curdle").join("config.json"))
}

/// Load the config from the default location
#[must_use]
pub fn load_config() -> UserConfig {
    get_config_path().map_or_else(UserConfig::default, |path| load_config_from(&path))
}

/// Load the config from `path`, falling back to defaults
#[must_use]
pub fn load_config_from(path: &Path) -> UserConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!("could not read {}: {e}", path.display());
            }
            return UserConfig::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed {}: {e}", path.display());
        UserConfig::default()
    })
}

/// Write the config to `path`, creating parent directories
///
/// # Errors
/// Returns an I/O error if the directory or file cannot be written.
pub fn save_config_to(path: &Path, config: &UserConfig) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)
}
