//! Style scopes and theme application.
//!
//! A [`StyleScope`] is one element's style bag: custom properties, a
//! `data-theme` tag, and a class list. [`StyleDocument`] owns the global root
//! scope plus named local containers. Local containers are isolated: a
//! property they set shadows the root, and nothing they set leaks upward.

use crate::theme::ThemeRecord;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

mod css;

pub use css::render_scope;

/// Attribute used to tag a scope with the applied theme id.
pub const DATA_THEME_ATTR: &str = "data-theme";
/// Class carried by the root while a theme switch is settling.
pub const THEME_CHANGING_CLASS: &str = "theme-changing";
/// Class carried by every local theme container.
pub const CONTAINER_CLASS: &str = "dynamic-theme-container";

/// One element's presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScope {
    style: BTreeMap<String, String>,
    theme_tag: Option<String>,
    classes: BTreeSet<String>,
    isolated: bool,
}

impl StyleScope {
    /// The document root scope.
    pub fn root() -> Self {
        Self::default()
    }

    /// A local container establishing its own styling boundary.
    pub fn isolated() -> Self {
        let mut scope = Self {
            isolated: true,
            ..Self::default()
        };
        scope.add_class(CONTAINER_CLASS);
        scope
    }

    pub fn set_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_string(), value.to_string());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.style.remove(name)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// The whole style bag, ordered by property name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.style
    }

    /// Current `data-theme` value.
    pub fn theme_tag(&self) -> Option<&str> {
        self.theme_tag.as_deref()
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_isolated(&self) -> bool {
        self.isolated
    }
}

/// Write every property of `theme` onto `scope` and tag it with the id.
///
/// Idempotent: applying the same theme twice leaves the same state.
pub fn apply(scope: &mut StyleScope, theme: &ThemeRecord) {
    for (name, value) in &theme.properties {
        scope.set_property(name, value);
    }
    scope.theme_tag = Some(theme.id.clone());
    trace!(theme = %theme.id, properties = theme.properties.len(), "applied theme to scope");
}

/// Remove every property key `theme` set from `scope`.
pub fn release(scope: &mut StyleScope, theme: &ThemeRecord) {
    for name in theme.properties.keys() {
        scope.remove_property(name);
    }
    if scope.theme_tag.as_deref() == Some(theme.id.as_str()) {
        scope.theme_tag = None;
    }
    trace!(theme = %theme.id, "released theme from scope");
}

/// Release `previous` (if any) then apply `next`.
pub fn switch(scope: &mut StyleScope, previous: Option<&ThemeRecord>, next: &ThemeRecord) {
    if let Some(previous) = previous {
        release(scope, previous);
    }
    apply(scope, next);
}

/// Addresses a scope inside a [`StyleDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeId {
    Root,
    Local(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LocalContainer {
    scope: StyleScope,
    mounted: Option<ThemeRecord>,
}

/// Root scope plus named, isolated local containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDocument {
    root: StyleScope,
    containers: BTreeMap<String, LocalContainer>,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &StyleScope {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut StyleScope {
        &mut self.root
    }

    pub fn container(&self, name: &str) -> Option<&StyleScope> {
        self.containers.get(name).map(|container| &container.scope)
    }

    /// Mount `theme` in the named container, creating it on first use.
    ///
    /// The previously mounted theme is released first so switching between
    /// themes with different key sets never leaves stale properties behind.
    /// `None` releases the current theme and keeps the empty container.
    pub fn set_local_theme(&mut self, name: &str, theme: Option<ThemeRecord>) {
        let container = self
            .containers
            .entry(name.to_string())
            .or_insert_with(|| LocalContainer {
                scope: StyleScope::isolated(),
                mounted: None,
            });
        if let Some(previous) = container.mounted.take() {
            release(&mut container.scope, &previous);
        }
        if let Some(theme) = theme {
            apply(&mut container.scope, &theme);
            container.mounted = Some(theme);
        }
    }

    /// Tear down a container, releasing its theme. Returns false if absent.
    pub fn unmount_local(&mut self, name: &str) -> bool {
        let Some(mut container) = self.containers.remove(name) else {
            return false;
        };
        if let Some(previous) = container.mounted.take() {
            release(&mut container.scope, &previous);
        }
        true
    }

    /// Effective value of `property` as seen from `scope`.
    ///
    /// Local containers answer from their own bag first and only fall back
    /// to the root for properties they do not set.
    pub fn resolve(&self, scope: &ScopeId, property: &str) -> Option<&str> {
        match scope {
            ScopeId::Root => self.root.property(property),
            ScopeId::Local(name) => self
                .container(name)
                .and_then(|local| local.property(property))
                .or_else(|| self.root.property(property)),
        }
    }

    /// CSS text for the root followed by every local container.
    pub fn render_css(&self) -> String {
        let mut out = render_scope(":root", &self.root);
        for (name, container) in &self.containers {
            let selector = match container.scope.theme_tag() {
                Some(tag) => format!("#{name}.{CONTAINER_CLASS}[{DATA_THEME_ATTR}=\"{tag}\"]"),
                None => format!("#{name}.{CONTAINER_CLASS}"),
            };
            out.push('\n');
            out.push_str(&render_scope(&selector, &container.scope));
        }
        out
    }
}
