//! Configuration data model.
//!
//! `File*` structs mirror the TOML layout; the resolved structs are what the
//! rest of the crate consumes.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::defaults::{
    DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_AI_TIMEOUT_SECS, DEFAULT_GET_LATENCY_MS,
    DEFAULT_LIST_LATENCY_MS, DEFAULT_RANDOM_LATENCY_MS, DEFAULT_TRANSITION_MS,
};
use crate::theme::{RegistryLatency, ThemeRecord, DEFAULT_THEME_ID};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub store: StoreConfig,
    pub ai: AiConfig,
    pub display: DisplayConfig,
    /// User-defined themes from `[themes.<id>]`, in id order.
    pub themes: Vec<ThemeRecord>,
}

/// Theme store behavior.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub default_theme: String,
    pub latency: RegistryLatency,
    /// How long the root carries the `theme-changing` class after a switch.
    pub transition: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_theme: DEFAULT_THEME_ID.to_string(),
            latency: RegistryLatency {
                list: Duration::from_millis(DEFAULT_LIST_LATENCY_MS),
                get: Duration::from_millis(DEFAULT_GET_LATENCY_MS),
                random: Duration::from_millis(DEFAULT_RANDOM_LATENCY_MS),
            },
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
        }
    }
}

/// Generative API connection settings.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Key from `THEMESHIFT_API_KEY`; wins over the stored key.
    pub api_key: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AI_BASE_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Result of `themeshift init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created { path: std::path::PathBuf },
    AlreadyInitialized { path: std::path::PathBuf },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct FileConfig {
    pub store: FileStoreConfig,
    pub ai: FileAiConfig,
    pub display: FileDisplayConfig,
    pub themes: BTreeMap<String, FileThemeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileStoreConfig {
    pub default_theme: Option<String>,
    pub list_latency_ms: Option<u64>,
    pub get_latency_ms: Option<u64>,
    pub random_latency_ms: Option<u64>,
    pub transition_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileAiConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileDisplayConfig {
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileThemeConfig {
    pub name: Option<String>,
    pub properties: BTreeMap<String, String>,
}
