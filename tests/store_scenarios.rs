//! End-to-end theme store scenarios through the public API.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use themeshift::api::TextGenerator;
use themeshift::error::{ApiError, StoreError, SynthError};
use themeshift::scope::ScopeId;
use themeshift::store::{spawn_theme_store, SelectOutcome, ThemeStoreHandle, ThemeStoreOptions};
use themeshift::theme::{preset_themes, RegistryLatency, ThemeRecord, ThemeRegistry};

const PRESET_IDS: [&str; 5] = ["default", "dark-neon", "ocean-blue", "sunset-orange", "corporate"];

/// Generator answering every call with one scripted reply.
struct ScriptedGenerator {
    reply: Result<&'static str, u16>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(code) => Err(ApiError::Status {
                code,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

fn store_with(reply: &'static str) -> (ThemeStoreHandle, Arc<ScriptedGenerator>) {
    spawn_with(Ok(reply))
}

fn spawn_with(reply: Result<&'static str, u16>) -> (ThemeStoreHandle, Arc<ScriptedGenerator>) {
    let generator = Arc::new(ScriptedGenerator {
        reply,
        calls: AtomicUsize::new(0),
    });
    let store = spawn_theme_store(
        ThemeRegistry::with_presets(RegistryLatency::default()),
        generator.clone(),
        ThemeStoreOptions::default(),
    );
    (store, generator)
}

fn preset(id: &str) -> ThemeRecord {
    preset_themes()
        .into_iter()
        .find(|theme| theme.id == id)
        .expect("preset")
}

fn key_set(theme: &ThemeRecord) -> BTreeSet<String> {
    theme.properties.keys().cloned().collect()
}

#[tokio::test(start_paused = true)]
async fn load_then_select_swaps_values_over_identical_key_set() {
    let (store, _) = store_with("{}");
    let loaded = store.load().await.expect("load");
    let ids: Vec<&str> = loaded.iter().map(|theme| theme.id.as_str()).collect();
    assert_eq!(ids, PRESET_IDS);

    let document = store.document().await.expect("document");
    let default = preset("default");
    assert_eq!(document.root().properties(), &default.properties);
    assert_eq!(document.root().properties().len(), 17);
    assert_eq!(document.root().theme_tag(), Some("default"));

    let outcome = store.select("dark-neon").await.expect("select");
    let neon = preset("dark-neon");
    assert_eq!(outcome, SelectOutcome::Applied(neon.clone()));

    let root = store.root_properties().await.expect("root");
    let root_keys: BTreeSet<String> = root.keys().cloned().collect();
    assert_eq!(root_keys, key_set(&default));
    assert_eq!(root, neon.properties);
    let document = store.document().await.expect("document");
    assert_eq!(document.root().theme_tag(), Some("dark-neon"));
    assert!(store
        .render_css()
        .await
        .expect("css")
        .contains("--primary: 120 100% 50%;"));
}

#[tokio::test(start_paused = true)]
async fn unknown_id_reports_not_found_and_changes_nothing() {
    let (store, _) = store_with("{}");
    store.load().await.expect("load");
    let before = store.document().await.expect("document");

    assert_eq!(
        store.select("does-not-exist").await.expect("select"),
        SelectOutcome::NotFound
    );
    assert_eq!(store.snapshot().current_id(), Some("default"));
    let after = store.document().await.expect("document");
    assert_eq!(after.root().properties(), before.root().properties());
    assert_eq!(after.root().theme_tag(), Some("default"));
}

#[tokio::test(start_paused = true)]
async fn latest_request_wins_when_older_finishes_later() {
    let (store, _) = store_with("{}");
    store.load().await.expect("load");

    // `get` takes longer than `random`, so the first request finishes last.
    let (slow, fast) = tokio::join!(store.select("ocean-blue"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        store.select_random().await
    });
    assert_eq!(slow.expect("select"), SelectOutcome::Superseded);
    let applied = fast.expect("random");
    let winner = applied.applied().expect("applied").id.clone();
    assert!(PRESET_IDS.contains(&winner.as_str()));
    assert_eq!(store.snapshot().current_id(), Some(winner.as_str()));
    assert!(!store.snapshot().busy);
}

#[tokio::test(start_paused = true)]
async fn empty_key_never_reaches_the_generator() {
    let (store, generator) = store_with("{}");
    store.load().await.expect("load");
    let err = store.generate("  ", "neon city").await.expect_err("missing key");
    assert!(matches!(err, StoreError::Synth(SynthError::MissingApiKey)));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn reply_without_json_leaves_scope_untouched() {
    let (store, generator) = store_with("I cannot help with that.");
    store.load().await.expect("load");
    let before = store.document().await.expect("document");

    let err = store.generate("key", "neon city").await.expect_err("malformed");
    assert!(matches!(
        err,
        StoreError::Synth(SynthError::MalformedResponse(_))
    ));
    assert_eq!(generator.calls(), 1);
    let after = store.document().await.expect("document");
    assert_eq!(after.root().properties(), before.root().properties());
    assert_eq!(after.root().theme_tag(), before.root().theme_tag());
    assert!(store.snapshot().custom.is_empty());
}

#[tokio::test(start_paused = true)]
async fn generated_theme_carries_thirteen_properties_and_stays_selectable() {
    let (store, _) = store_with(
        r#"Here you go: {"primary":"200 80% 50%","primaryGlow":"200 80% 60%","background":"210 30% 6%",
        "foreground":"210 20% 96%","card":"210 30% 10%","cardForeground":"210 20% 96%",
        "secondary":"180 50% 40%","secondaryForeground":"0 0% 100%","accent":"160 70% 45%",
        "accentForeground":"0 0% 10%","border":"210 30% 18%","radius":"1rem"}"#,
    );
    store.load().await.expect("load");

    let outcome = store.generate("key", "deep sea").await.expect("generate");
    let theme = outcome.applied().expect("applied").clone();
    assert_eq!(theme.properties.len(), 13);
    assert_eq!(theme.property("--primary-foreground"), Some("0 0% 10%"));
    assert_eq!(theme.property("--radius"), Some("1rem"));

    let document = store.document().await.expect("document");
    assert_eq!(document.resolve(&ScopeId::Root, "--primary"), Some("200 80% 50%"));
    // Preset-only keys from the previous theme are released.
    assert_eq!(document.resolve(&ScopeId::Root, "--animation-speed"), None);

    store.select("corporate").await.expect("select");
    let back = store.select(&theme.id).await.expect("select generated");
    assert_eq!(back, SelectOutcome::Applied(theme.clone()));
    let document = store.document().await.expect("document");
    assert_eq!(document.root().theme_tag(), Some(theme.id.as_str()));
    assert_eq!(document.root().properties(), &theme.properties);
}

#[tokio::test(start_paused = true)]
async fn first_load_applies_default_even_when_a_lookup_misses_meanwhile() {
    let (store, _) = store_with("{}");
    let (loaded, missed) = tokio::join!(store.load(), store.select("does-not-exist"));
    assert_eq!(loaded.expect("load").len(), 5);
    assert_eq!(missed.expect("select"), SelectOutcome::NotFound);

    assert_eq!(store.snapshot().current_id(), Some("default"));
    assert_eq!(store.root_properties().await.expect("root"), preset("default").properties);
}

#[tokio::test(start_paused = true)]
async fn newer_request_that_changes_nothing_keeps_older_selection() {
    let (store, _) = spawn_with(Err(500));
    store.load().await.expect("load");

    let (neon, missed) = tokio::join!(store.select("dark-neon"), store.select("does-not-exist"));
    assert_eq!(neon.expect("select"), SelectOutcome::Applied(preset("dark-neon")));
    assert_eq!(missed.expect("select"), SelectOutcome::NotFound);
    assert_eq!(store.snapshot().current_id(), Some("dark-neon"));

    let (ocean, failed) = tokio::join!(store.select("ocean-blue"), store.generate("key", "storm"));
    assert_eq!(ocean.expect("select"), SelectOutcome::Applied(preset("ocean-blue")));
    assert!(matches!(failed, Err(StoreError::Synth(SynthError::Api(_)))));
    assert_eq!(store.snapshot().current_id(), Some("ocean-blue"));
    assert!(!store.snapshot().busy);
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_busy_then_idle() {
    let (store, _) = store_with("{}");
    let mut updates = store.subscribe();
    let load = tokio::spawn({
        let store = store.clone();
        async move { store.load().await }
    });

    updates.changed().await.expect("first update");
    assert!(updates.borrow().busy);
    load.await.expect("join").expect("load");
    assert!(!store.snapshot().busy);
    assert_eq!(store.snapshot().available.len(), 5);
}
