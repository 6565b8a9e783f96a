//! Effective Style Resolution
//!
//! Stands in for a rendering engine's computed-style lookup: given an
//! element, yield the final effective value per property. The resolution is
//! a deterministic cascade: inherited properties from the ancestors, then
//! the per-tag defaults of the controlling preview stylesheet, then the
//! element's own inline declarations.

use std::collections::HashMap;

/// The resolved property-to-value map for one element.
pub type ComputedStyle = HashMap<String, String>;

/// Resolves the effective style of an element.
///
/// Implementations must be deterministic: the same tag, inline declarations
/// and parent style always yield the same result.
pub trait StyleResolver {
    /// Resolve the effective style for an element with the given tag name,
    /// inline `style` attribute value, and the resolved style of its parent.
    fn resolve(
        &self,
        tag: &str,
        inline_style: Option<&str>,
        parent: Option<&ComputedStyle>,
    ) -> ComputedStyle;
}

// ─────────────────────────────────────────────────────────────────────────────
// Preview Stylesheet
// ─────────────────────────────────────────────────────────────────────────────

/// Properties that flow from parent to child.
const INHERITED_PROPERTIES: &[&str] = &[
    "color",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "line-height",
    "text-align",
    "text-indent",
];

/// Per-tag defaults of the preview stylesheet: the user-agent-level facts
/// that word processors need spelled out explicitly.
const TAG_DEFAULTS: &[(&str, &str)] = &[
    ("strong", "font-weight: bold;"),
    ("b", "font-weight: bold;"),
    ("em", "font-style: italic;"),
    ("i", "font-style: italic;"),
    ("del", "text-decoration: line-through;"),
    ("s", "text-decoration: line-through;"),
    ("u", "text-decoration: underline;"),
    ("a", "color: #0563c1; text-decoration: underline;"),
    ("sup", "vertical-align: super; font-size: smaller;"),
    ("sub", "vertical-align: sub; font-size: smaller;"),
    ("th", "font-weight: bold;"),
];

/// Headless resolver over the preview stylesheet.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreviewStyles;

impl StyleResolver for PreviewStyles {
    fn resolve(
        &self,
        tag: &str,
        inline_style: Option<&str>,
        parent: Option<&ComputedStyle>,
    ) -> ComputedStyle {
        let mut resolved = ComputedStyle::new();

        if let Some(parent) = parent {
            for property in INHERITED_PROPERTIES {
                if let Some(value) = parent.get(*property) {
                    resolved.insert((*property).to_string(), value.clone());
                }
            }
        }

        if let Some((_, defaults)) = TAG_DEFAULTS.iter().find(|(name, _)| *name == tag) {
            for (property, value) in parse_declarations(defaults) {
                resolved.insert(property, value);
            }
        }

        if let Some(style) = inline_style {
            for (property, value) in parse_declarations(style) {
                resolved.insert(property, value);
            }
        }

        resolved
    }
}

/// Parse a `style` attribute value into (property, value) pairs.
///
/// Empty declarations and declarations without a value are skipped;
/// property names are lowercased.
pub(crate) fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim().to_string();
            if property.is_empty() || value.is_empty() {
                None
            } else {
                Some((property, value))
            }
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
