//! themeshift: runtime theme switching with AI-generated palettes.
//!
//! A fixed registry of preset themes (CSS custom-property maps) is served
//! through a simulated async lookup. A single store actor owns the root style
//! scope, serializes selection requests, and discards results that a newer
//! request has overtaken. Themes can also be synthesized from a free-text
//! description through the Gemini `generateContent` API.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use themeshift::api::GeminiClient;
//! use themeshift::config::load_config;
//! use themeshift::store::{spawn_theme_store, ThemeStoreOptions};
//! use themeshift::theme::ThemeRegistry;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let registry = ThemeRegistry::with_presets(config.store.latency);
//! let generator = Arc::new(GeminiClient::new(&config.ai));
//! let store = spawn_theme_store(registry, generator, ThemeStoreOptions::from(&config.store));
//! store.load().await.unwrap();
//! store.select("dark-neon").await.unwrap();
//! println!("{}", store.render_css().await.unwrap());
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod scope;
pub mod storage;
pub mod store;
pub mod synth;
#[cfg(test)]
pub mod testsupport;
pub mod theme;
pub mod ui;
