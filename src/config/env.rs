//! Environment variable overrides.

use super::Config;

pub(super) const ENV_API_KEY: &str = "THEMESHIFT_API_KEY";
pub(super) const ENV_BASE_URL: &str = "THEMESHIFT_BASE_URL";
pub(super) const ENV_MODEL: &str = "THEMESHIFT_MODEL";

pub(super) fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(key) = non_blank(env_lookup, ENV_API_KEY) {
        config.ai.api_key = Some(key);
    }
    if let Some(url) = non_blank(env_lookup, ENV_BASE_URL) {
        config.ai.base_url = url;
    }
    if let Some(model) = non_blank(env_lookup, ENV_MODEL) {
        config.ai.model = model;
    }
}

/// Trimmed env value; blank counts as unset.
fn non_blank<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
