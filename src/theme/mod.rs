//! Theme records and the preset registry.
//!
//! A theme is a flat set of CSS custom properties (`--primary`, `--radius`,
//! ...) with an id and display name. Nothing here touches a style scope;
//! see [`crate::scope`] for application.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod presets;
pub mod registry;

pub use presets::{preset_themes, DEFAULT_THEME_ID};
pub use registry::{RegistryLatency, ThemeRegistry};

/// One named theme: custom property name to value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub id: String,
    pub name: String,
    #[serde(alias = "variables", default)]
    pub properties: BTreeMap<String, String>,
}

impl ThemeRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        properties: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            properties,
        }
    }

    /// Build a record from un-prefixed keys (`primary` becomes `--primary`).
    ///
    /// Keys that already carry the `--` prefix are kept as-is.
    pub fn from_short_keys<I, K, V>(id: impl Into<String>, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let properties = entries
            .into_iter()
            .map(|(key, value)| (custom_property_name(key.as_ref()), value.into()))
            .collect();
        Self::new(id, name, properties)
    }

    /// Value of one custom property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Property names in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

/// Normalize a property key into `--name` form.
pub fn custom_property_name(key: &str) -> String {
    let trimmed = key.trim();
    if trimmed.starts_with("--") {
        trimmed.to_string()
    } else {
        format!("--{trimmed}")
    }
}
