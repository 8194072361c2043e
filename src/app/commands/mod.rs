//! Command handlers shared by one-shot subcommands and the interactive shell.

/// Gemini theme generation.
pub(crate) mod generate;
/// Stored API key management.
pub(crate) mod key;
/// Theme listing, selection, CSS output, and preview.
pub(crate) mod theme;

#[cfg(test)]
pub(crate) mod test_context;
