//! Interactive slash-command shell.

use crate::app::commands::{generate, key, theme};
use crate::app::entry::AppContext;
use crate::app::slash::{parse_slash_command, SlashCommandAction, SLASH_COMMANDS};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

const SHELL_PROMPT: &str = "themeshift> ";

/// Whether the shell loop keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellFlow {
    Continue,
    Quit,
}

/// Run the shell on stdin until `/quit` or EOF. Returns the exit code.
pub(crate) async fn run_shell(ctx: &AppContext<'_>) -> i32 {
    if let Err(msg) = theme::ensure_loaded(&ctx.store).await {
        ctx.renderer.error(&msg);
        return 1;
    }
    if let Some(current) = ctx.store.snapshot().current {
        theme::report_applied(ctx.renderer, &current);
    }
    ctx.renderer.detail("Type /help for commands, /quit to exit.");

    let reader = BufReader::new(tokio::io::stdin());
    run_shell_with_input(ctx, reader, true).await
}

pub(crate) async fn run_shell_with_input<R>(ctx: &AppContext<'_>, reader: R, show_prompt: bool) -> i32
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        if show_prompt {
            eprint!("{SHELL_PROMPT}");
            let _ = std::io::stderr().flush();
        }
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                ctx.renderer.error(&format!("failed to read input: {err}"));
                return 1;
            }
        };
        if handle_shell_line(ctx, &line).await == ShellFlow::Quit {
            break;
        }
    }
    0
}

/// Dispatch one input line. Command failures are shown and the shell keeps
/// running.
pub(crate) async fn handle_shell_line(ctx: &AppContext<'_>, line: &str) -> ShellFlow {
    if line.trim().is_empty() {
        return ShellFlow::Continue;
    }
    let Some(action) = parse_slash_command(line) else {
        ctx.renderer
            .warn("Commands start with `/`. Try /generate <description> or /help.");
        return ShellFlow::Continue;
    };

    let result = match action {
        SlashCommandAction::Quit => return ShellFlow::Quit,
        SlashCommandAction::Help => {
            render_help(ctx);
            Ok(())
        }
        SlashCommandAction::Status => {
            theme::handle_status(ctx);
            Ok(())
        }
        SlashCommandAction::Themes => theme::handle_list(ctx).await,
        SlashCommandAction::Use(Some(selector)) => theme::handle_apply(ctx, &selector, false).await,
        SlashCommandAction::Use(None) => theme::handle_list(ctx).await,
        SlashCommandAction::Random => theme::handle_random(ctx, false).await,
        SlashCommandAction::Generate(prompt) => generate::handle_generate(ctx, None, &prompt).await,
        SlashCommandAction::Css => theme::handle_css(ctx).await,
        SlashCommandAction::Preview(Some(selector)) => theme::handle_preview(ctx, &selector).await,
        SlashCommandAction::Preview(None) => Err("Usage: /preview <id|index>".to_string()),
        SlashCommandAction::Key { verb, arg } => handle_key_action(ctx, verb.as_deref(), arg),
        SlashCommandAction::Unknown(name) => Err(format!("Unknown command: {name}. Try /help.")),
    };
    if let Err(msg) = result {
        ctx.renderer.error(&msg);
    }
    ShellFlow::Continue
}

fn handle_key_action(ctx: &AppContext<'_>, verb: Option<&str>, arg: Option<String>) -> Result<(), String> {
    match verb {
        Some("set") => key::handle_key_set(ctx.renderer, ctx.keys, arg, false, key::read_key_input),
        None | Some("show") => {
            let reveal = arg.as_deref() == Some("reveal");
            key::handle_key_show(ctx.renderer, ctx.keys, reveal)
        }
        Some("clear") => key::handle_key_clear(ctx.renderer, ctx.keys),
        Some(other) => Err(format!("Unknown /key action: {other}. Use set, show, or clear.")),
    }
}

fn render_help(ctx: &AppContext<'_>) {
    ctx.renderer.section("commands");
    for command in SLASH_COMMANDS {
        ctx.renderer
            .field(command.name, command.description);
    }
}
