//! Slash-command metadata and parsing for the interactive shell.

/// Static slash command metadata used by parsing and `/help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in slash commands for interactive mode.
pub(crate) const SLASH_COMMANDS: [SlashCommand; 10] = [
    SlashCommand {
        name: "/themes",
        description: "List available and generated themes.",
    },
    SlashCommand {
        name: "/use",
        description: "Apply a theme: /use <id|index>.",
    },
    SlashCommand {
        name: "/random",
        description: "Apply a random preset theme.",
    },
    SlashCommand {
        name: "/generate",
        description: "Generate a theme with Gemini: /generate <description>.",
    },
    SlashCommand {
        name: "/key",
        description: "API key: /key set [value] | show [reveal] | clear.",
    },
    SlashCommand {
        name: "/css",
        description: "Print the current root CSS.",
    },
    SlashCommand {
        name: "/preview",
        description: "Preview a theme in an isolated container: /preview <id|index>.",
    },
    SlashCommand {
        name: "/status",
        description: "Show the current theme and store state.",
    },
    SlashCommand {
        name: "/help",
        description: "List available slash commands.",
    },
    SlashCommand {
        name: "/quit",
        description: "Exit interactive mode.",
    },
];

/// Parsed slash command actions consumed by the shell loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlashCommandAction {
    Quit,
    Help,
    Status,
    Themes,
    Use(Option<String>),
    Random,
    /// Everything after the command word, verbatim.
    Generate(String),
    Key {
        verb: Option<String>,
        arg: Option<String>,
    },
    Css,
    Preview(Option<String>),
    Unknown(String),
}

/// Parse a slash command from user input.
///
/// Returns `None` if the input is not a slash command.
pub(crate) fn parse_slash_command(input: &str) -> Option<SlashCommandAction> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    let mut args = rest.split_whitespace();
    let first = args.next().map(str::to_string);

    let action = match head.to_ascii_lowercase().as_str() {
        "/" | "/help" => SlashCommandAction::Help,
        "/quit" | "/exit" | "/q" => SlashCommandAction::Quit,
        "/status" => SlashCommandAction::Status,
        "/themes" => SlashCommandAction::Themes,
        "/use" | "/theme" => SlashCommandAction::Use(first),
        "/random" => SlashCommandAction::Random,
        "/generate" | "/gen" => SlashCommandAction::Generate(rest.to_string()),
        "/key" => SlashCommandAction::Key {
            verb: first.map(|verb| verb.to_ascii_lowercase()),
            arg: args.next().map(str::to_string),
        },
        "/css" => SlashCommandAction::Css,
        "/preview" => SlashCommandAction::Preview(first),
        other => SlashCommandAction::Unknown(other.to_string()),
    };

    Some(action)
}
