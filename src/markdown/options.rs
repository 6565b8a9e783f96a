//! Render and Parser Options
//!
//! This module defines the options record the editor shell supplies on every
//! change, plus the parser configuration mapped onto comrak's option set.

use comrak::Options;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Render Options
// ─────────────────────────────────────────────────────────────────────────────

/// Options controlling post-processing of rendered HTML.
///
/// Field names serialize in camelCase so the record round-trips with the
/// JSON options object persisted by the editor shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Insert one space before the first text content of every list item.
    ///
    /// Word collapses the gap between a list marker and the item text when
    /// styled HTML is pasted; the extra space keeps them apart.
    pub add_space_before_first_level_list: bool,

    /// Base URL prepended to relative image paths.
    ///
    /// Accepted from the shell's options surface for forward compatibility;
    /// the renderer does not apply it yet.
    pub image_base_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            add_space_before_first_level_list: true,
            image_base_url: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markdown Options
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration options for markdown parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Enable GitHub Flavored Markdown tables
    pub tables: bool,
    /// Enable strikethrough syntax (~~text~~)
    pub strikethrough: bool,
    /// Enable autolink URLs and emails
    pub autolink: bool,
    /// Enable task lists (- [ ] and - [x])
    pub tasklist: bool,
    /// Enable footnotes
    pub footnotes: bool,
    /// Enable $...$ and $$...$$ math spans
    pub math: bool,
    /// Enable smart quotes, dashes and ellipses
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            footnotes: true,
            math: true,
            smart_punctuation: true,
        }
    }
}

impl MarkdownOptions {
    /// Convert to comrak Options.
    pub(crate) fn to_comrak_options(&self) -> Options {
        let mut options = Options::default();

        options.extension.table = self.tables;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.footnotes = self.footnotes;
        options.extension.math_dollars = self.math;

        options.parse.smart = self.smart_punctuation;

        options
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default() {
        let options = RenderOptions::default();
        assert!(options.add_space_before_first_level_list);
        assert!(options.image_base_url.is_none());
    }

    #[test]
    fn test_render_options_camel_case_field_names() {
        let options: RenderOptions =
            serde_json::from_str(r#"{"addSpaceBeforeFirstLevelList": false}"#).unwrap();
        assert!(!options.add_space_before_first_level_list);
    }

    #[test]
    fn test_render_options_missing_fields_use_defaults() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_render_options_serialization_round_trip() {
        let options = RenderOptions {
            add_space_before_first_level_list: false,
            image_base_url: Some("https://example.com/images".to_string()),
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("addSpaceBeforeFirstLevelList"));
        assert!(json.contains("imageBaseUrl"));
        let deserialized: RenderOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, deserialized);
    }

    #[test]
    fn test_markdown_options_default_enables_extensions() {
        let options = MarkdownOptions::default();
        assert!(options.tables);
        assert!(options.footnotes);
        assert!(options.math);
        assert!(options.smart_punctuation);
    }
}
