//! Syntax Highlighting for Fenced Code Blocks
//!
//! This module integrates syntect for code block syntax highlighting in the
//! rendered HTML. The output must survive pasting into a word processor, so
//! the highlighter emits spans with literal inline `style` attributes rather
//! than class-based markup (classes are stripped on export).

use log::warn;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{append_highlighted_html_for_styled_line, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Default theme from syntect's built-in themes. Light, to read well on the
/// white page of a pasted document.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Fallback theme if the specified theme is not found.
pub const FALLBACK_THEME: &str = "base16-ocean.light";

// ─────────────────────────────────────────────────────────────────────────────
// Highlighter Hook
// ─────────────────────────────────────────────────────────────────────────────

/// Hook invoked for the contents of fenced code blocks.
///
/// Returns inline-styled HTML for the code, or `None` when the language is
/// not recognized; the renderer then falls back to escaped plain text.
pub trait CodeHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Syntect Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Syntect-backed highlighter that caches the loaded syntax and theme sets.
///
/// Loading the built-in sets is expensive, so construct one highlighter and
/// reuse it across renders.
pub struct SyntectHighlighter {
    /// Loaded syntax definitions
    syntax_set: SyntaxSet,
    /// The theme used for all highlighting
    theme: Theme,
}

impl SyntectHighlighter {
    /// Create a highlighter using the default light theme.
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME)
    }

    /// Create a highlighter using a named built-in theme.
    pub fn with_theme(theme_name: &str) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();

        let theme = match theme_set.themes.get(theme_name) {
            Some(theme) => theme.clone(),
            None => {
                warn!(
                    "Theme '{}' not found, falling back to '{}'",
                    theme_name, FALLBACK_THEME
                );
                theme_set
                    .themes
                    .get(FALLBACK_THEME)
                    .cloned()
                    .unwrap_or_default()
            }
        };

        Self { syntax_set, theme }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        if language.is_empty() {
            return None;
        }
        let syntax = self.syntax_set.find_syntax_by_token(language)?;

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut html = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntax_set).ok()?;
            append_highlighted_html_for_styled_line(&regions, IncludeBackground::No, &mut html)
                .ok()?;
        }
        Some(html)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_known_language_emits_inline_styles() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter
            .highlight("function hello() { return 1; }", "javascript")
            .unwrap();
        assert!(html.contains("<span style=\""));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_highlight_escapes_code_content() {
        let highlighter = SyntectHighlighter::new();
        let html = highlighter.highlight("let a = b < c;", "rust").unwrap();
        assert!(html.contains("&lt;"));
        assert!(!html.contains("b < c"));
    }

    #[test]
    fn test_highlight_unknown_language_returns_none() {
        let highlighter = SyntectHighlighter::new();
        assert!(highlighter
            .highlight("some text", "not-a-real-language")
            .is_none());
    }

    #[test]
    fn test_highlight_empty_language_returns_none() {
        let highlighter = SyntectHighlighter::new();
        assert!(highlighter.highlight("some text", "").is_none());
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        // Construction must not panic on a bad theme name.
        let highlighter = SyntectHighlighter::with_theme("no-such-theme");
        assert!(highlighter.highlight("fn main() {}", "rust").is_some());
    }
}
