//! Test doubles for command handler tests.

use crate::app::entry::AppContext;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use themeshift::api::TextGenerator;
use themeshift::config::Config;
use themeshift::error::ApiError;
use themeshift::storage::MemoryKeyValueStore;
use themeshift::store::{spawn_theme_store, ThemeStoreHandle, ThemeStoreOptions};
use themeshift::theme::{RegistryLatency, ThemeRecord, ThemeRegistry};
use themeshift::ui::{Notice, RenderSink};

#[derive(Clone, Default)]
pub(crate) struct MockRenderer {
    /// Captured `(kind, message)` render events for assertions.
    entries: Arc<StdMutex<Vec<(String, String)>>>,
}

impl MockRenderer {
    fn record(&self, kind: &str, message: &str) {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .push((kind.to_string(), message.to_string()));
    }

    /// Return true when a recorded event of `kind` contains `needle`.
    pub(crate) fn saw(&self, kind: &str, needle: &str) -> bool {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .iter()
            .any(|(k, msg)| k == kind && msg.contains(needle))
    }

    pub(crate) fn count(&self, kind: &str) -> usize {
        self.entries
            .lock()
            .expect("mock renderer lock")
            .iter()
            .filter(|(k, _)| k == kind)
            .count()
    }
}

impl RenderSink for MockRenderer {
    fn section(&self, title: &str) {
        self.record("section", title);
    }

    fn field(&self, key: &str, value: &str) {
        self.record("field", &format!("{key}:{value}"));
    }

    fn detail(&self, text: &str) {
        self.record("detail", text);
    }

    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.record("error", msg);
    }

    fn notice(&self, notice: &Notice) {
        self.record("notice", &format!("{}: {}", notice.title, notice.description));
    }

    fn swatches(&self, theme: &ThemeRecord) {
        self.record("swatches", &theme.id);
    }

    fn css(&self, text: &str) {
        self.record("css", text);
    }

    fn set_theme(&self, theme: &ThemeRecord) {
        self.record("theme", &theme.id);
    }
}

/// Generator answering every call with one scripted reply.
pub(crate) struct ScriptedGenerator {
    reply: Result<String, u16>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(code) => Err(ApiError::Status {
                code: *code,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

pub(crate) const PALETTE_REPLY: &str = r#"Sure! {"primary": "20 90% 50%", "primaryGlow": "20 90% 60%",
"background": "30 20% 8%", "foreground": "30 20% 95%", "card": "30 20% 12%",
"cardForeground": "30 20% 95%", "secondary": "40 60% 40%", "secondaryForeground": "0 0% 100%",
"accent": "10 80% 55%", "accentForeground": "0 0% 100%", "border": "30 20% 20%"}"#;

/// Owns everything an `AppContext` borrows.
pub(crate) struct TestApp {
    pub renderer: MockRenderer,
    pub config: Config,
    pub keys: MemoryKeyValueStore,
    pub generator: Arc<ScriptedGenerator>,
    pub store: ThemeStoreHandle,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self::with_generator(ScriptedGenerator::replying(PALETTE_REPLY))
    }

    pub(crate) fn with_generator(generator: ScriptedGenerator) -> Self {
        let generator = Arc::new(generator);
        let registry = ThemeRegistry::with_presets(RegistryLatency::none());
        let store = spawn_theme_store(registry, generator.clone(), ThemeStoreOptions::default());
        Self {
            renderer: MockRenderer::default(),
            config: Config::default(),
            keys: MemoryKeyValueStore::new(),
            generator,
            store,
        }
    }

    pub(crate) fn context(&self) -> AppContext<'_> {
        AppContext {
            renderer: &self.renderer,
            config: &self.config,
            store: self.store.clone(),
            keys: &self.keys,
        }
    }
}
