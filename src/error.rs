//! Unified error types for theme loading, synthesis, and storage.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the generative text API layer.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status { code: u16, body: String },
    /// The response decoded but carried no candidate text.
    EmptyResponse,
    /// The response body was not the expected JSON envelope.
    Decode(String),
}

impl ApiError {
    /// HTTP status code when this error came from a non-2xx response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::EmptyResponse => write!(f, "model returned empty response"),
            Self::Decode(msg) => write!(f, "decode: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from the client-side key-value storage.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// No platform config directory could be resolved.
    Unavailable,
    /// The in-memory store lock was poisoned by a panicking writer.
    Poisoned,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Unavailable => write!(f, "no config directory available for storage"),
            Self::Poisoned => write!(f, "key storage lock poisoned"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// RegistryError
// ---------------------------------------------------------------------------

/// Errors when building a theme registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registry must hold at least one theme.
    Empty,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "theme registry cannot be empty"),
        }
    }
}

impl std::error::Error for RegistryError {}

// ---------------------------------------------------------------------------
// SynthError
// ---------------------------------------------------------------------------

/// Errors from AI theme synthesis.
#[derive(Debug)]
pub enum SynthError {
    /// No API key was supplied.
    MissingApiKey,
    /// No theme description was supplied.
    MissingPrompt,
    Api(ApiError),
    /// The model response held no parseable theme object.
    MalformedResponse(String),
}

/// User-facing notice text for a failure (title, description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl SynthError {
    /// True for failures caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::MissingPrompt)
    }

    /// Notice shown to the user for this failure.
    ///
    /// Validation failures get their own message; everything past the call
    /// boundary collapses into one generic notice.
    pub fn user_notice(&self) -> FailureNotice {
        match self {
            Self::MissingApiKey => FailureNotice {
                title: "API Key Required",
                description: "Please enter your Gemini API key first.",
            },
            Self::MissingPrompt => FailureNotice {
                title: "Theme Prompt Required",
                description: "Please describe the theme you want to generate.",
            },
            Self::Api(_) | Self::MalformedResponse(_) => FailureNotice {
                title: "Generation Failed",
                description: "Failed to generate theme. Check your API key and try again.",
            },
        }
    }
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "api key is required"),
            Self::MissingPrompt => write!(f, "theme prompt is required"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for SynthError {}

impl From<ApiError> for SynthError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Errors surfaced by the theme store handle.
#[derive(Debug)]
pub enum StoreError {
    /// The store actor has stopped.
    Closed,
    Synth(SynthError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "theme store channel closed"),
            Self::Synth(e) => write!(f, "synthesis: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<SynthError> for StoreError {
    fn from(e: SynthError) -> Self {
        Self::Synth(e)
    }
}
