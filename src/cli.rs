//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Runtime theme switching with AI-generated palettes.
#[derive(Debug, Parser)]
#[command(name = "themeshift", version)]
pub struct Args {
    /// Path to config file (default: ./themeshift.toml or ~/.config/themeshift/themeshift.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Override the generative model name.
    #[arg(long = "model", global = true)]
    pub model: Option<String>,

    /// Override the generative API base URL.
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Without a subcommand, starts the interactive shell.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Write the default config to ~/.config/themeshift/themeshift.toml.
    Init,
    /// List available themes, marking the current one.
    Themes,
    /// Apply a theme by id or 1-based index and print the root CSS.
    Apply {
        /// Theme id or index from `themeshift themes`.
        selector: String,
    },
    /// Apply a random theme and print the root CSS.
    Random,
    /// Print the root CSS for the default theme.
    Css,
    /// Mount a theme in an isolated container and compare it with the root.
    Preview {
        /// Theme id or index to mount locally.
        selector: String,
    },
    /// Generate a theme from a description and apply it.
    Generate {
        /// Free-text description of the theme.
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// API key for this call only (not stored).
        #[arg(long = "api-key")]
        api_key: Option<String>,
    },
    /// Manage the stored Gemini API key.
    Key {
        #[command(subcommand)]
        action: KeyCommand,
    },
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum KeyCommand {
    /// Store an API key. Prompts when VALUE is omitted.
    Set {
        value: Option<String>,
        /// Echo the key while typing instead of hiding it.
        #[arg(long = "reveal")]
        reveal: bool,
    },
    /// Show the stored key, masked unless --reveal is given.
    Show {
        #[arg(long = "reveal")]
        reveal: bool,
    },
    /// Remove the stored key.
    Clear,
}
