//! AI theme synthesis.
//!
//! Turns a free-text description into a [`ThemeRecord`] by asking a
//! [`TextGenerator`] for a JSON palette. One attempt per call; the caller
//! decides what to do with the record (the theme store applies it).

use crate::api::TextGenerator;
use crate::error::SynthError;
use crate::theme::ThemeRecord;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

mod parse;
mod prompt;

pub use parse::{extract_json_object, parse_palette, GeneratedPalette, DEFAULT_RADIUS};
pub use prompt::{build_theme_prompt, RESPONSE_FIELDS};

/// Prefix for synthesized theme ids.
pub const GENERATED_ID_PREFIX: &str = "gemini-";
const NAME_PROMPT_CHARS: usize = 20;

/// Generate a theme from `prompt` using `generator`.
///
/// Missing credential or prompt fails before the generator is called.
pub async fn synthesize(
    generator: &dyn TextGenerator,
    api_key: &str,
    prompt: &str,
) -> Result<ThemeRecord, SynthError> {
    validate_request(api_key, prompt)?;
    let api_key = api_key.trim();
    let prompt = prompt.trim();

    let instruction = build_theme_prompt(prompt);
    let text = generator.generate(api_key, &instruction).await.map_err(|err| {
        warn!(error = %err, "theme generation request failed");
        SynthError::from(err)
    })?;
    let palette = parse_palette(&text).map_err(|err| {
        warn!(error = %err, "theme generation returned unusable output");
        err
    })?;

    let record = ThemeRecord::new(
        generated_theme_id(),
        generated_theme_name(prompt),
        palette.to_properties(),
    );
    debug!(theme = %record.id, "synthesized theme");
    Ok(record)
}

/// Check credential and prompt without touching the network.
pub fn validate_request(api_key: &str, prompt: &str) -> Result<(), SynthError> {
    if api_key.trim().is_empty() {
        return Err(SynthError::MissingApiKey);
    }
    if prompt.trim().is_empty() {
        return Err(SynthError::MissingPrompt);
    }
    Ok(())
}

fn generated_theme_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{GENERATED_ID_PREFIX}{millis}")
}

/// Display name: `AI: ` plus the first characters of the prompt.
pub fn generated_theme_name(prompt: &str) -> String {
    let head: String = prompt.chars().take(NAME_PROMPT_CHARS).collect();
    format!("AI: {head}...")
}
