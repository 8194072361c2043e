//! Binary-local application orchestration helpers.
//!
//! `main.rs` stays a thin entrypoint; command handlers and the interactive
//! shell live here so they can be tested against a mock renderer.

pub(crate) mod commands;
pub(crate) mod entry;
pub(crate) mod shell;
pub(crate) mod slash;
