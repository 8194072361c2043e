//! Gemini theme generation command.

use crate::app::commands::theme::{ensure_loaded, report_applied};
use crate::app::entry::AppContext;
use themeshift::error::StoreError;
use themeshift::storage::load_api_key;
use themeshift::store::SelectOutcome;
use themeshift::ui::Notice;
use tracing::warn;

/// Pick the API key for one call: `--api-key` first, then
/// `THEMESHIFT_API_KEY`, then the stored key. Blank values are skipped.
pub(crate) fn resolve_api_key(
    flag: Option<&str>,
    env_key: Option<&str>,
    stored: Option<String>,
) -> Option<String> {
    flag.or(env_key)
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| stored.filter(|key| !key.trim().is_empty()))
}

/// Handle `generate <prompt>` and `/generate <prompt>`.
///
/// A missing key or prompt is rejected by the store before any network call
/// and shown as its own notice.
pub(crate) async fn handle_generate(
    ctx: &AppContext<'_>,
    flag_key: Option<&str>,
    prompt: &str,
) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    let stored = match load_api_key(ctx.keys) {
        Ok(stored) => stored,
        Err(err) => {
            warn!(error = %err, "failed to read stored api key");
            None
        }
    };
    let api_key = resolve_api_key(flag_key, ctx.config.ai.api_key.as_deref(), stored)
        .unwrap_or_default();

    if !prompt.trim().is_empty() && !api_key.is_empty() {
        ctx.renderer
            .detail(&format!("generating theme with {}...", ctx.config.ai.model));
    }

    match ctx.store.generate(&api_key, prompt).await {
        Ok(SelectOutcome::Applied(theme)) => {
            ctx.renderer.notice(&Notice::info(
                "AI Theme Generated",
                format!("Created \"{}\" theme based on your prompt.", theme.name),
            ));
            report_applied(ctx.renderer, &theme);
            Ok(())
        }
        Ok(SelectOutcome::Superseded) => {
            // The theme is still kept in the generated list.
            ctx.renderer
                .warn("a newer theme request finished first; the generated theme was saved but not applied");
            Ok(())
        }
        Ok(SelectOutcome::NotFound) => Err("generated theme was not found".to_string()),
        Err(StoreError::Synth(err)) => {
            ctx.renderer.notice(&Notice::from(&err));
            if err.is_validation() {
                return Err(err.to_string());
            }
            warn!(error = %err, "theme generation failed");
            Err(format!("theme generation failed: {err}"))
        }
        Err(err) => Err(format!("theme generation failed: {err}")),
    }
}
