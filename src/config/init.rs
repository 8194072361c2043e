//! Config-path helpers and default config initialization.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use super::ConfigInitResult;

/// Platform config root (`$XDG_CONFIG_HOME` or `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Return the default per-user config path (`~/.config/themeshift/themeshift.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Write the bundled template to the per-user config path.
///
/// Never overwrites an existing file.
pub fn initialize_default_config() -> Result<ConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve default config path".to_string())
    })?;
    initialize_config_at_path(&path)
}

pub(super) fn initialize_config_at_path(path: &Path) -> Result<ConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // create_new keeps two concurrent inits from clobbering each other.
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            return Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(ConfigError::Io(err)),
    };
    file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
    Ok(ConfigInitResult::Created {
        path: path.to_path_buf(),
    })
}
