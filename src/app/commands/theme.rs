//! Theme listing, selection, CSS output, and local preview.

use crate::app::entry::AppContext;
use themeshift::scope::ScopeId;
use themeshift::store::{SelectOutcome, ThemeStoreHandle};
use themeshift::theme::ThemeRecord;
use themeshift::ui::RenderSink;

/// Container name used by `preview`.
const PREVIEW_CONTAINER: &str = "preview";
/// Properties compared between root and preview container.
const PREVIEW_PROPERTIES: &[&str] = &["--primary", "--background", "--foreground", "--accent", "--radius"];

/// Load the registry list once; later calls reuse the published snapshot.
pub(crate) async fn ensure_loaded(store: &ThemeStoreHandle) -> Result<(), String> {
    if store.snapshot().available.is_empty() {
        store.load().await.map_err(|e| format!("failed to load themes: {e}"))?;
    }
    Ok(())
}

/// Handle `themes`: list every selectable theme with the current marker.
pub(crate) async fn handle_list(ctx: &AppContext<'_>) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    let snapshot = ctx.store.snapshot();
    let themes: Vec<ThemeRecord> = snapshot.selectable().cloned().collect();
    ctx.renderer.section("themes");
    for line in theme_picker_options(&themes, snapshot.current_id()) {
        ctx.renderer.detail(&line);
    }
    Ok(())
}

/// Handle `apply <id|index>`.
pub(crate) async fn handle_apply(
    ctx: &AppContext<'_>,
    selector: &str,
    print_css: bool,
) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    let themes: Vec<ThemeRecord> = ctx.store.snapshot().selectable().cloned().collect();
    let id = resolve_theme_selector(&themes, selector)?;
    let outcome = ctx
        .store
        .select(&id)
        .await
        .map_err(|e| format!("failed to select theme: {e}"))?;
    report_outcome(ctx, &id, outcome, print_css).await
}

/// Handle `random`.
pub(crate) async fn handle_random(ctx: &AppContext<'_>, print_css: bool) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    let outcome = ctx
        .store
        .select_random()
        .await
        .map_err(|e| format!("failed to pick a random theme: {e}"))?;
    report_outcome(ctx, "random", outcome, print_css).await
}

/// Handle `css`: print the current root (and mounted container) CSS.
pub(crate) async fn handle_css(ctx: &AppContext<'_>) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    print_css(ctx).await
}

/// Handle `preview <id|index>`: mount the theme in an isolated container of
/// a copy of the document and show how properties resolve in each scope.
/// The store's root scope is not touched.
pub(crate) async fn handle_preview(ctx: &AppContext<'_>, selector: &str) -> Result<(), String> {
    ensure_loaded(&ctx.store).await?;
    let snapshot = ctx.store.snapshot();
    let themes: Vec<ThemeRecord> = snapshot.selectable().cloned().collect();
    let id = resolve_theme_selector(&themes, selector)?;
    let Some(theme) = themes.into_iter().find(|theme| theme.id == id) else {
        return Err(format!("unknown theme `{id}`"));
    };

    let mut document = ctx
        .store
        .document()
        .await
        .map_err(|e| format!("failed to read style document: {e}"))?;
    document.set_local_theme(PREVIEW_CONTAINER, Some(theme.clone()));

    ctx.renderer.section(&format!("preview: {}", theme.name));
    ctx.renderer
        .field("root", snapshot.current_id().unwrap_or("(none)"));
    ctx.renderer.field("local", &theme.id);
    let local = ScopeId::Local(PREVIEW_CONTAINER.to_string());
    for property in PREVIEW_PROPERTIES {
        let root_value = document.resolve(&ScopeId::Root, property).unwrap_or("-");
        let local_value = document.resolve(&local, property).unwrap_or("-");
        ctx.renderer
            .detail(&format!("{property}: root={root_value} local={local_value}"));
    }
    ctx.renderer.swatches(&theme);
    ctx.renderer.css(&document.render_css());
    Ok(())
}

/// Handle `/status`.
pub(crate) fn handle_status(ctx: &AppContext<'_>) {
    let snapshot = ctx.store.snapshot();
    ctx.renderer.section("status");
    let current = snapshot
        .current
        .as_ref()
        .map(|theme| format!("{} ({})", theme.name, theme.id))
        .unwrap_or_else(|| "(none)".to_string());
    ctx.renderer.field("current", &current);
    ctx.renderer
        .field("available", &snapshot.available.len().to_string());
    ctx.renderer.field("generated", &snapshot.custom.len().to_string());
    ctx.renderer
        .field("busy", if snapshot.busy { "yes" } else { "no" });
    ctx.renderer.field("model", &ctx.config.ai.model);
    ctx.renderer.field("endpoint", &ctx.config.ai.base_url);
}

async fn report_outcome(
    ctx: &AppContext<'_>,
    requested: &str,
    outcome: SelectOutcome,
    with_css: bool,
) -> Result<(), String> {
    match outcome {
        SelectOutcome::Applied(theme) => {
            report_applied(ctx.renderer, &theme);
            if with_css {
                print_css(ctx).await?;
            }
            Ok(())
        }
        SelectOutcome::NotFound => Err(format!("unknown theme `{requested}`")),
        SelectOutcome::Superseded => {
            ctx.renderer
                .warn("a newer theme request finished first; this one was discarded");
            Ok(())
        }
    }
}

/// Show a freshly applied theme and re-tint the UI chrome with it.
pub(crate) fn report_applied(renderer: &dyn RenderSink, theme: &ThemeRecord) {
    renderer.set_theme(theme);
    renderer.section(&format!("applied theme: {}", theme.name));
    renderer.field("id", &theme.id);
    renderer.swatches(theme);
}

async fn print_css(ctx: &AppContext<'_>) -> Result<(), String> {
    let css = ctx
        .store
        .render_css()
        .await
        .map_err(|e| format!("failed to render css: {e}"))?;
    ctx.renderer.css(&css);
    Ok(())
}

/// Build picker labels with the current-theme marker.
pub(crate) fn theme_picker_options(themes: &[ThemeRecord], current: Option<&str>) -> Vec<String> {
    themes
        .iter()
        .enumerate()
        .map(|(idx, theme)| {
            let marker = if Some(theme.id.as_str()) == current {
                "*"
            } else {
                " "
            };
            format!("{}.{} {} ({})", idx + 1, marker, theme.id, theme.name)
        })
        .collect()
}

/// Resolve a selector as a 1-based index, an id, or a display name.
pub(crate) fn resolve_theme_selector(themes: &[ThemeRecord], selector: &str) -> Result<String, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Usage: /use <id|index>".to_string());
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        if index == 0 || index > themes.len() {
            return Err(format!(
                "Theme index out of range: {index}. Choose 1-{}.",
                themes.len()
            ));
        }
        return Ok(themes[index - 1].id.clone());
    }

    let normalized = trimmed.to_ascii_lowercase();
    let matched = themes
        .iter()
        .find(|theme| theme.id.to_ascii_lowercase() == normalized)
        .or_else(|| {
            themes
                .iter()
                .find(|theme| theme.name.to_ascii_lowercase() == normalized)
        });
    // Unknown ids still go to the store so the miss is reported the same
    // way for every caller.
    Ok(matched
        .map(|theme| theme.id.clone())
        .unwrap_or_else(|| trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_context::TestApp;
    use themeshift::theme::preset_themes;

    #[test]
    fn picker_marks_current_theme() {
        let options = theme_picker_options(&preset_themes(), Some("ocean-blue"));
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], "1.  default (Default Theme)");
        assert_eq!(options[2], "3.* ocean-blue (Ocean Blue)");
    }

    #[test]
    fn selector_accepts_index_id_and_name() {
        let themes = preset_themes();
        assert_eq!(resolve_theme_selector(&themes, "2").as_deref(), Ok("dark-neon"));
        assert_eq!(
            resolve_theme_selector(&themes, " Ocean-Blue ").as_deref(),
            Ok("ocean-blue")
        );
        assert_eq!(
            resolve_theme_selector(&themes, "corporate blue").as_deref(),
            Ok("corporate")
        );
    }

    #[test]
    fn selector_rejects_out_of_range_index_and_blank() {
        let themes = preset_themes();
        let err = resolve_theme_selector(&themes, "9").expect_err("out of range");
        assert!(err.contains("1-5"), "got: {err}");
        assert!(resolve_theme_selector(&themes, "   ").is_err());
    }

    #[test]
    fn unknown_selector_passes_through() {
        assert_eq!(
            resolve_theme_selector(&preset_themes(), "mystery").as_deref(),
            Ok("mystery")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn list_marks_loaded_default() {
        let app = TestApp::new();
        handle_list(&app.context()).await.expect("list");
        assert!(app.renderer.saw("detail", "1.* default"));
        assert_eq!(app.renderer.count("detail"), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn apply_without_css_reports_and_retints() {
        let app = TestApp::new();
        handle_apply(&app.context(), "4", false).await.expect("apply");
        assert!(app.renderer.saw("theme", "sunset-orange"));
        assert!(app.renderer.saw("section", "applied theme: Sunset Orange"));
        assert_eq!(app.renderer.count("css"), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn random_applies_some_preset() {
        let app = TestApp::new();
        handle_random(&app.context(), true).await.expect("random");
        assert_eq!(app.renderer.count("swatches"), 1);
        assert!(app.renderer.saw("css", ":root {"));
    }

    #[tokio::test(start_paused = true)]
    async fn preview_shows_local_override_and_leaves_root() {
        let app = TestApp::new();
        let ctx = app.context();
        handle_preview(&ctx, "dark-neon").await.expect("preview");
        assert!(app.renderer.saw("css", "#preview.dynamic-theme-container[data-theme=\"dark-neon\"]"));
        assert!(app.renderer.saw("detail", "--primary: root="));
        assert_eq!(ctx.store.snapshot().current_id(), Some("default"));
        let document = ctx.store.document().await.expect("document");
        assert!(document.container(PREVIEW_CONTAINER).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn status_reports_counts() {
        let app = TestApp::new();
        let ctx = app.context();
        ensure_loaded(&ctx.store).await.expect("load");
        handle_status(&ctx);
        assert!(app.renderer.saw("field", "available:5"));
        assert!(app.renderer.saw("field", "generated:0"));
        assert!(app.renderer.saw("field", "current:Default Theme (default)"));
    }
}
