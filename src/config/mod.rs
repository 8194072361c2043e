//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THEMESHIFT_API_KEY`, `THEMESHIFT_BASE_URL`,
//!    `THEMESHIFT_MODEL`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./themeshift.toml in the current directory
//! 4. $XDG_CONFIG_HOME/themeshift/themeshift.toml (or
//!    ~/.config/themeshift/themeshift.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::theme::ThemeRecord;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

mod defaults;
mod env;
mod init;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use init::{config_root_dir, default_global_config_path, initialize_default_config};
pub use types::{AiConfig, Config, ConfigInitResult, DisplayConfig, StoreConfig};
use types::FileConfig;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Where the effective config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local,
    Global(PathBuf),
    BuiltInDefaults,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
    .map(|(config, _)| config)
}

pub(crate) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<(Config, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) = read_config_text(path_override, &read_file, &config_root)?;
    debug!(?source, "resolved config source");
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = resolve_file_config(parsed)?;
    env::apply_env_overrides(&mut config, &env_lookup);
    Ok((config, source))
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

fn resolve_file_config(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(theme) = file.store.default_theme {
        config.store.default_theme = non_empty("store.default_theme", theme)?;
    }
    if let Some(ms) = file.store.list_latency_ms {
        config.store.latency.list = Duration::from_millis(ms);
    }
    if let Some(ms) = file.store.get_latency_ms {
        config.store.latency.get = Duration::from_millis(ms);
    }
    if let Some(ms) = file.store.random_latency_ms {
        config.store.latency.random = Duration::from_millis(ms);
    }
    if let Some(ms) = file.store.transition_ms {
        config.store.transition = Duration::from_millis(ms);
    }

    if let Some(url) = file.ai.base_url {
        config.ai.base_url = non_empty("ai.base_url", url)?;
    }
    if let Some(model) = file.ai.model {
        config.ai.model = non_empty("ai.model", model)?;
    }
    if let Some(secs) = file.ai.timeout_secs {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        config.ai.timeout = Duration::from_secs(secs.max(1));
    }

    if let Some(color) = file.display.color {
        config.display.color = color;
    }

    for (id, theme) in file.themes {
        let id = non_empty("themes.<id>", id)?;
        if theme.properties.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "themes.{id} must define at least one property"
            )));
        }
        let name = theme.name.unwrap_or_else(|| id.clone());
        config
            .themes
            .push(ThemeRecord::from_short_keys(id, name, theme.properties));
    }

    Ok(config)
}

fn non_empty(field: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
