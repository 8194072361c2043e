//! Stored Gemini API key management (`key set|show|clear`, `/key`).

use std::io::{self, BufRead, Write};
use themeshift::storage::{clear_api_key, load_api_key, mask_secret, save_api_key, KeyValueStore};
use themeshift::ui::{Notice, RenderSink};

const KEY_PROMPT: &str = "Gemini API key: ";

/// Read a key from the terminal. Hidden unless `reveal` is set.
pub(crate) fn read_key_input(reveal: bool) -> io::Result<String> {
    if !reveal {
        return rpassword::prompt_password(KEY_PROMPT);
    }
    let mut stderr = io::stderr();
    stderr.write_all(KEY_PROMPT.as_bytes())?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Save a key given inline or read through `read_input`.
pub(crate) fn handle_key_set(
    renderer: &dyn RenderSink,
    keys: &dyn KeyValueStore,
    value: Option<String>,
    reveal: bool,
    read_input: impl FnOnce(bool) -> io::Result<String>,
) -> Result<(), String> {
    let value = match value {
        Some(value) => value,
        None => read_input(reveal).map_err(|e| format!("failed to read api key: {e}"))?,
    };
    let saved = save_api_key(keys, value.trim()).map_err(|e| format!("failed to save api key: {e}"))?;
    if !saved {
        renderer.warn("empty key ignored; nothing was saved");
        return Ok(());
    }
    renderer.notice(&Notice::info(
        "API Key Saved",
        "Your Gemini API key has been stored.",
    ));
    Ok(())
}

/// Show the stored key, masked unless `reveal` is set.
pub(crate) fn handle_key_show(
    renderer: &dyn RenderSink,
    keys: &dyn KeyValueStore,
    reveal: bool,
) -> Result<(), String> {
    let stored = load_api_key(keys).map_err(|e| format!("failed to read api key: {e}"))?;
    renderer.section("api key");
    match stored {
        Some(key) if reveal => renderer.field("stored", &key),
        Some(key) => renderer.field("stored", &mask_secret(&key)),
        None => renderer.field("stored", "(none)"),
    }
    Ok(())
}

pub(crate) fn handle_key_clear(renderer: &dyn RenderSink, keys: &dyn KeyValueStore) -> Result<(), String> {
    let removed = clear_api_key(keys).map_err(|e| format!("failed to clear api key: {e}"))?;
    if removed {
        renderer.section("api key removed");
    } else {
        renderer.detail("no api key was stored");
    }
    Ok(())
}
