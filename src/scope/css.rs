//! CSS text rendering for style scopes.

use super::StyleScope;
use std::fmt::Write;

/// Render one scope as a CSS rule block.
///
/// Isolated scopes get `isolation: isolate` ahead of their properties so
/// the container starts a new stacking/styling context.
pub fn render_scope(selector: &str, scope: &StyleScope) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{selector} {{");
    if scope.is_isolated() {
        out.push_str("  isolation: isolate;\n");
    }
    for (name, value) in scope.properties() {
        let _ = writeln!(out, "  {name}: {value};");
    }
    out.push_str("}\n");
    out
}
