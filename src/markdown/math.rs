//! Math Typesetting
//!
//! Converts `$...$` and `$$...$$` expressions to static MathML, which word
//! processors accept on paste. A malformed expression degrades to a colored
//! inline error span carrying the source text; the rest of the document is
//! unaffected.

use latex2mathml::{latex_to_mathml, DisplayStyle};
use log::warn;

use crate::string_utils::html_escape;

/// Typeset one math expression.
///
/// Returns MathML markup on success. On a syntax error, returns an inline
/// span in `error_color` showing the raw source, with the error message in
/// the `title` attribute.
pub(crate) fn typeset_math(expression: &str, display: bool, error_color: &str) -> String {
    let style = if display {
        DisplayStyle::Block
    } else {
        DisplayStyle::Inline
    };

    match latex_to_mathml(expression, style) {
        Ok(mathml) => mathml,
        Err(err) => {
            warn!("Math expression failed to typeset: {}", err);
            format!(
                "<span style=\"color: {};\" title=\"{}\">{}</span>",
                error_color,
                html_escape(&err.to_string()),
                html_escape(expression)
            )
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
