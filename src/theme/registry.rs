//! Theme registry: lookup, listing, and random selection over a fixed list.
//!
//! The async accessors sleep for a configured latency before answering so
//! callers exercise the same suspend/resume path a remote theme service
//! would force on them.

use super::{preset_themes, ThemeRecord};
use crate::error::RegistryError;
use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated latency for each registry call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryLatency {
    pub list: Duration,
    pub get: Duration,
    pub random: Duration,
}

impl RegistryLatency {
    /// No simulated delay at all.
    pub const fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            random: Duration::ZERO,
        }
    }
}

impl Default for RegistryLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            random: Duration::from_millis(150),
        }
    }
}

/// Non-empty, ordered list of themes.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<ThemeRecord>,
    latency: RegistryLatency,
}

impl ThemeRegistry {
    /// Build a registry over `themes`. Fails when the list is empty.
    pub fn new(themes: Vec<ThemeRecord>, latency: RegistryLatency) -> Result<Self, RegistryError> {
        if themes.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { themes, latency })
    }

    /// Registry over the built-in presets.
    pub fn with_presets(latency: RegistryLatency) -> Self {
        Self {
            themes: preset_themes(),
            latency,
        }
    }

    /// Append user-defined themes after the presets.
    ///
    /// Lookup stays first-match, so an extra theme reusing a preset id is
    /// listed but never returned by [`ThemeRegistry::find`].
    pub fn with_extra_themes(mut self, extra: impl IntoIterator<Item = ThemeRecord>) -> Self {
        self.themes.extend(extra);
        self
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// All themes in registry order.
    pub async fn list(&self) -> Vec<ThemeRecord> {
        sleep(self.latency.list).await;
        self.themes.clone()
    }

    /// First theme whose id equals `id`.
    pub async fn get(&self, id: &str) -> Option<ThemeRecord> {
        sleep(self.latency.get).await;
        self.find(id).cloned()
    }

    /// One theme chosen uniformly at random.
    pub async fn pick_random(&self) -> ThemeRecord {
        sleep(self.latency.random).await;
        let mut rng = rand::thread_rng();
        self.pick_random_with(&mut rng).clone()
    }

    /// Synchronous lookup without latency.
    pub fn find(&self, id: &str) -> Option<&ThemeRecord> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// Uniform pick driven by a caller-supplied RNG.
    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &ThemeRecord {
        let index = rng.gen_range(0..self.themes.len());
        &self.themes[index]
    }
}
