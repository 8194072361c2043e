//! Rendering contract and the default terminal renderer.
//!
//! `RenderSink` is the UI contract consumed by the CLI layer. Status lines go
//! to stderr; CSS output goes to stdout so it can be piped.

use super::color::property_color;
use super::notice::{Notice, NoticeKind};
use crate::theme::ThemeRecord;
use crossterm::style::{Color, Stylize};
use std::sync::RwLock;

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const BULLET: &str = "•";
const INDENT: &str = "  ";
const SWATCH: &str = "  ";

/// Properties shown as colour swatches, in display order.
const SWATCH_PROPERTIES: &[&str] = &[
    "--primary",
    "--primary-glow",
    "--accent",
    "--secondary",
    "--background",
    "--foreground",
    "--card",
    "--border",
];

/// Injectable rendering interface used by the CLI.
///
/// `Renderer` is the terminal implementation; tests can substitute a sink
/// that records calls.
pub trait RenderSink: Send + Sync {
    /// Render a titled section line.
    fn section(&self, title: &str);
    /// Render one key/value row.
    fn field(&self, key: &str, value: &str);
    /// Render an indented detail line.
    fn detail(&self, text: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    /// Render a transient notice.
    fn notice(&self, notice: &Notice);
    /// Render a theme's colour swatches.
    fn swatches(&self, theme: &ThemeRecord);
    /// Write CSS text to stdout.
    fn css(&self, text: &str);
    /// Re-tint UI chrome with the given theme.
    fn set_theme(&self, theme: &ThemeRecord);
}

/// Terminal renderer. Chrome colours follow the active theme.
pub struct Renderer {
    color: bool,
    accent: RwLock<Color>,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            accent: RwLock::new(Color::Magenta),
        }
    }

    fn accent(&self) -> Color {
        self.accent
            .read()
            .map(|guard| *guard)
            .unwrap_or(Color::Magenta)
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        if self.color {
            eprintln!("{} {}", BULLET.with(self.accent()), title.bold());
        } else {
            eprintln!("{title}:");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!("{INDENT}{} {value}", format!("{key}:").with(self.accent()));
        } else {
            eprintln!("{INDENT}{key}: {value}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            eprintln!("{INDENT}{}", text.dark_grey());
        } else {
            eprintln!("{INDENT}{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.yellow().bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.red().bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    fn notice(&self, notice: &Notice) {
        match (self.color, notice.kind) {
            (true, NoticeKind::Info) => {
                eprintln!("{} {}", notice.title.as_str().with(self.accent()).bold(), notice.description)
            }
            (true, NoticeKind::Destructive) => {
                eprintln!("{} {}", notice.title.as_str().red().bold(), notice.description)
            }
            (false, _) => eprintln!("{}: {}", notice.title, notice.description),
        }
    }

    fn swatches(&self, theme: &ThemeRecord) {
        for property in SWATCH_PROPERTIES {
            let Some(value) = theme.property(property) else {
                continue;
            };
            match property_color(theme, property).filter(|_| self.color) {
                Some(color) => eprintln!("{INDENT}{} {property}: {value}", SWATCH.on(color)),
                None => eprintln!("{INDENT}{property}: {value}"),
            }
        }
    }

    fn css(&self, text: &str) {
        print!("{text}");
    }

    fn set_theme(&self, theme: &ThemeRecord) {
        let Some(color) = property_color(theme, "--primary") else {
            return;
        };
        if let Ok(mut guard) = self.accent.write() {
            *guard = color;
        }
    }
}
