//! HTTP client for the generative text API.
//!
//! - `gemini`: Google Gemini `generateContent` transport.

use crate::error::ApiError;
use async_trait::async_trait;

mod gemini;

pub use gemini::GeminiClient;

/// Minimal text-generation interface used by the theme synthesizer.
///
/// This trait lets tests provide deterministic mock responses without network
/// calls while the production path uses [`GeminiClient`].
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt with the caller's credential; return the raw text.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ApiError>;
}
