//! Application entry orchestration for the themeshift CLI.

use crate::app::commands::{generate, key, theme};
use crate::cli::{self, Command, KeyCommand};
use std::sync::Arc;
use themeshift::api::GeminiClient;
use themeshift::config::{initialize_default_config, load_config, Config, ConfigInitResult};
use themeshift::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use themeshift::store::{spawn_theme_store, ThemeStoreHandle, ThemeStoreOptions};
use themeshift::theme::ThemeRegistry;
use themeshift::ui::{RenderSink, Renderer};
use tracing::{debug, warn};

/// Everything a command handler needs once startup has finished.
pub(crate) struct AppContext<'a> {
    pub renderer: &'a dyn RenderSink,
    pub config: &'a Config,
    pub store: ThemeStoreHandle,
    pub keys: &'a dyn KeyValueStore,
}

pub(crate) async fn run(args: cli::Args) -> i32 {
    // 1) `init` returns before any config is read,
    // 2) load config and apply CLI overrides,
    // 3) dispatch to a one-shot command or the interactive shell.
    let bootstrap_renderer = Renderer::new(!args.no_color);
    if let Some(Command::Init) = args.command.as_ref() {
        return exit_code(&bootstrap_renderer, run_init_flow(&bootstrap_renderer));
    }

    let config = match load_effective_config(&args) {
        Ok(config) => config,
        Err(msg) => {
            bootstrap_renderer.error(&msg);
            return 1;
        }
    };
    let renderer = Renderer::new(config.display.color);
    let keys = open_key_store(&renderer);

    if let Some(Command::Key { action }) = args.command.as_ref() {
        let result = match action {
            KeyCommand::Set { value, reveal } => {
                key::handle_key_set(&renderer, keys.as_ref(), value.clone(), *reveal, key::read_key_input)
            }
            KeyCommand::Show { reveal } => key::handle_key_show(&renderer, keys.as_ref(), *reveal),
            KeyCommand::Clear => key::handle_key_clear(&renderer, keys.as_ref()),
        };
        return exit_code(&renderer, result);
    }

    let store = build_store(&config);
    let ctx = AppContext {
        renderer: &renderer,
        config: &config,
        store: store.clone(),
        keys: keys.as_ref(),
    };

    let code = match args.command {
        None => crate::app::shell::run_shell(&ctx).await,
        Some(command) => exit_code(&renderer, dispatch_command(&ctx, command).await),
    };
    store.shutdown().await;
    code
}

/// Run one non-interactive subcommand.
pub(crate) async fn dispatch_command(ctx: &AppContext<'_>, command: Command) -> Result<(), String> {
    match command {
        Command::Themes => theme::handle_list(ctx).await,
        Command::Apply { selector } => theme::handle_apply(ctx, &selector, true).await,
        Command::Random => theme::handle_random(ctx, true).await,
        Command::Css => theme::handle_css(ctx).await,
        Command::Preview { selector } => theme::handle_preview(ctx, &selector).await,
        Command::Generate { prompt, api_key } => {
            generate::handle_generate(ctx, api_key.as_deref(), &prompt.join(" ")).await
        }
        Command::Init | Command::Key { .. } => Err("command is not available here".to_string()),
    }
}

fn exit_code(renderer: &dyn RenderSink, result: Result<(), String>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(msg) => {
            renderer.error(&msg);
            1
        }
    }
}

/// Load config and apply `--model`, `--base-url`, and `--no-color`.
fn load_effective_config(args: &cli::Args) -> Result<Config, String> {
    let mut config = load_config(args.config.as_deref()).map_err(|e| format!("{e}"))?;
    apply_cli_overrides(&mut config, args);
    Ok(config)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(model) = args.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        config.ai.model = model.to_string();
    }
    if let Some(url) = args.base_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        config.ai.base_url = url.to_string();
    }
    if args.no_color {
        config.display.color = false;
    }
}

/// Open the on-disk key store, or fall back to an in-memory one for this run.
fn open_key_store(renderer: &dyn RenderSink) -> Box<dyn KeyValueStore> {
    match FileKeyValueStore::open_default() {
        Ok(store) => {
            debug!(path = %store.path().display(), "using file key storage");
            Box::new(store)
        }
        Err(err) => {
            warn!(error = %err, "falling back to in-memory key storage");
            renderer.warn(&format!("key storage unavailable ({err}); keys will not persist"));
            Box::new(MemoryKeyValueStore::new())
        }
    }
}

fn build_store(config: &Config) -> ThemeStoreHandle {
    let registry =
        ThemeRegistry::with_presets(config.store.latency).with_extra_themes(config.themes.clone());
    let generator = Arc::new(GeminiClient::new(&config.ai));
    spawn_theme_store(registry, generator, ThemeStoreOptions::from(&config.store))
}

fn run_init_flow(renderer: &dyn RenderSink) -> Result<(), String> {
    match initialize_default_config()
        .map_err(|e| format!("failed to initialize ~/.config/themeshift: {e}"))?
    {
        ConfigInitResult::Created { path } => {
            renderer.section("initialized themeshift config");
            renderer.field("path", &path.display().to_string());
            Ok(())
        }
        ConfigInitResult::AlreadyInitialized { path } => Err(format!(
            "themeshift is already initialized at {}",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_context::TestApp;
    use clap::Parser;

    #[test]
    fn cli_overrides_replace_model_url_and_color() {
        let args = cli::Args::parse_from([
            "themeshift",
            "--model",
            "gemini-1.5-flash",
            "--base-url",
            "http://127.0.0.1:9",
            "--no-color",
        ]);
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.ai.model, "gemini-1.5-flash");
        assert_eq!(config.ai.base_url, "http://127.0.0.1:9");
        assert!(!config.display.color);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let args = cli::Args::parse_from(["themeshift", "--model", "  "]);
        let mut config = Config::default();
        let before = config.ai.model.clone();
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.ai.model, before);
        assert!(config.display.color);
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_apply_prints_css_for_selected_theme() {
        let app = TestApp::new();
        let ctx = app.context();
        dispatch_command(
            &ctx,
            Command::Apply {
                selector: "dark-neon".into(),
            },
        )
        .await
        .expect("apply");
        assert!(app.renderer.saw("css", ":root {"));
        assert!(app.renderer.saw("section", "Dark Neon"));
        assert_eq!(ctx.store.snapshot().current_id(), Some("dark-neon"));
    }

    #[tokio::test(start_paused = true)]
    async fn dispatch_unknown_theme_fails() {
        let app = TestApp::new();
        let ctx = app.context();
        let err = dispatch_command(
            &ctx,
            Command::Apply {
                selector: "no-such-theme".into(),
            },
        )
        .await
        .expect_err("unknown theme");
        assert!(err.contains("no-such-theme"), "got: {err}");
        assert_eq!(ctx.store.snapshot().current_id(), Some("default"));
    }
}
