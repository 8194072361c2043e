//! Default configuration constants.

/// Embedded default `themeshift.toml` template written by `themeshift init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/themeshift.toml");
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "themeshift.toml";
/// Directory under the platform config root.
pub(super) const CONFIG_DIR_NAME: &str = "themeshift";
/// Default Gemini REST base URL.
pub(super) const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default Gemini model id.
pub(super) const DEFAULT_AI_MODEL: &str = "gemini-pro";
/// Default timeout for generation requests.
pub(super) const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;
pub(super) const DEFAULT_LIST_LATENCY_MS: u64 = 300;
pub(super) const DEFAULT_GET_LATENCY_MS: u64 = 200;
pub(super) const DEFAULT_RANDOM_LATENCY_MS: u64 = 150;
pub(super) const DEFAULT_TRANSITION_MS: u64 = 50;
