//! Shared test fixtures for storage, config, synthesis, and store tests.

use crate::api::TextGenerator;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("themeshift-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Model reply text carrying a complete palette wrapped in chatter.
pub fn palette_reply_fixture(primary: &str) -> String {
    let palette = json!({
        "primary": primary,
        "primaryGlow": "200 90% 70%",
        "background": "210 40% 98%",
        "foreground": "210 40% 10%",
        "card": "210 40% 96%",
        "cardForeground": "210 40% 10%",
        "secondary": "210 30% 90%",
        "secondaryForeground": "210 40% 20%",
        "accent": "170 80% 45%",
        "accentForeground": "0 0% 100%",
        "border": "210 30% 85%"
    });
    format!("Here is your theme:\n{palette}\nEnjoy!")
}

enum Script {
    Reply(String),
    Fail(u16),
}

/// Deterministic [`TextGenerator`] that records every call.
pub struct ScriptedGenerator {
    script: Script,
    delay: Duration,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    /// Always answer with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }

    /// Always fail with a non-2xx status.
    pub fn failing(code: u16) -> Self {
        Self::new(Script::Fail(code))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Wait `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _api_key: &str, prompt: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_prompt.lock() {
            *guard = Some(prompt.to_string());
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(code) => Err(ApiError::Status {
                code: *code,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn palette_fixture_parses() {
        let reply = palette_reply_fixture("1 2% 3%");
        let palette = crate::synth::parse_palette(&reply).expect("palette");
        assert_eq!(palette.primary, "1 2% 3%");
    }

    #[tokio::test]
    async fn scripted_generator_counts_calls() {
        let generator = ScriptedGenerator::failing(500);
        assert!(generator.generate("k", "p").await.is_err());
        assert_eq!(generator.calls(), 1);
        assert_eq!(generator.last_prompt().as_deref(), Some("p"));
    }
}
