//! Model response parsing: JSON extraction and field translation.

use crate::error::SynthError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Radius used when the model leaves it out.
pub const DEFAULT_RADIUS: &str = "0.75rem";

/// Colour palette returned by the model. Every colour is an HSL triple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPalette {
    pub primary: String,
    pub primary_glow: String,
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub border: String,
    #[serde(default)]
    pub radius: Option<String>,
}

impl GeneratedPalette {
    /// Translate model field names onto custom properties.
    ///
    /// `--primary-foreground` has no field of its own and reuses
    /// `accentForeground`.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        let radius = self
            .radius
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_RADIUS);
        [
            ("--primary", self.primary.as_str()),
            ("--primary-foreground", self.accent_foreground.as_str()),
            ("--primary-glow", self.primary_glow.as_str()),
            ("--background", self.background.as_str()),
            ("--foreground", self.foreground.as_str()),
            ("--card", self.card.as_str()),
            ("--card-foreground", self.card_foreground.as_str()),
            ("--secondary", self.secondary.as_str()),
            ("--secondary-foreground", self.secondary_foreground.as_str()),
            ("--accent", self.accent.as_str()),
            ("--accent-foreground", self.accent_foreground.as_str()),
            ("--border", self.border.as_str()),
            ("--radius", radius),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }
}

/// Slice from the first `{` to the last `}` of `text`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Extract and decode the palette from raw model output.
pub fn parse_palette(text: &str) -> Result<GeneratedPalette, SynthError> {
    let json = extract_json_object(text).ok_or_else(|| {
        SynthError::MalformedResponse("no JSON object in model response".to_string())
    })?;
    serde_json::from_str(json).map_err(|err| SynthError::MalformedResponse(err.to_string()))
}
