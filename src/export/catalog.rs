//! Word-Safe Style Catalog
//!
//! The fixed allow-list of CSS properties that survive transport into
//! word-processing documents. Everything outside this list is dropped when
//! styles are flattened for export; Word ignores it at best and mangles the
//! paste at worst.

/// CSS properties known to survive import into Word and WPS.
///
/// Extraction iterates this slice in order, so the emitted declaration order
/// is stable across runs.
pub const WORD_SUPPORTED_STYLES: &[&str] = &[
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "color",
    "background-color",
    "text-align",
    "text-indent",
    "text-decoration",
    "line-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-color",
    "border-style",
    "border-width",
    "border-collapse",
    "width",
    "height",
    "vertical-align",
];

/// Whether a resolved value carries no styling information and should be
/// omitted from the flattened output.
pub fn is_noop_value(value: &str) -> bool {
    matches!(value, "" | "none" | "normal" | "auto")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
