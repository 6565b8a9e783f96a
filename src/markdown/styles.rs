//! Word-Compatible Style Rules
//!
//! Inline style strings attached to every rendered construct. Word and WPS
//! discard external stylesheets when HTML is pasted, so each element carries
//! its full presentation as a literal `style` attribute. The point values and
//! colors here are tuned for how Word lays out pasted HTML; changing them
//! changes what users get in their documents.

// ─────────────────────────────────────────────────────────────────────────────
// Style Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Inline style for paragraphs.
pub const PARAGRAPH_STYLE: &str =
    "text-indent: 0; line-height: 1.5; margin: 0 0 12pt 0; text-align: left;";

/// Inline styles for heading levels 1-6. Level 1 is centered; the rest
/// inherit the default left alignment.
pub const HEADING_STYLES: [&str; 6] = [
    "font-size: 22pt; font-weight: bold; margin: 24pt 0 12pt 0; text-align: center; text-indent: 0;",
    "font-size: 18pt; font-weight: bold; margin: 18pt 0 10pt 0; text-indent: 0;",
    "font-size: 16pt; font-weight: bold; margin: 14pt 0 8pt 0; text-indent: 0;",
    "font-size: 14pt; font-weight: bold; margin: 12pt 0 6pt 0; text-indent: 0;",
    "font-size: 12pt; font-weight: bold; margin: 10pt 0 5pt 0; text-indent: 0;",
    "font-size: 12pt; font-weight: bold; margin: 8pt 0 4pt 0; text-indent: 0;",
];

/// Inline style for tables.
pub const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%; margin: 12pt 0;";

/// Inline style for table data cells.
pub const TABLE_CELL_STYLE: &str = "border: 1pt solid #000; padding: 6pt 12pt; text-align: left;";

/// Inline style for table header cells.
pub const TABLE_HEADER_STYLE: &str =
    "border: 1pt solid #000; padding: 6pt 12pt; text-align: left; font-weight: bold; background-color: #f0f0f0;";

/// Inline style for fenced code blocks.
pub const CODE_BLOCK_STYLE: &str =
    "background: #f5f5f5; border: 1pt solid #ccc; padding: 12pt; margin: 12pt 0; font-family: 'Courier New', monospace; font-size: 10pt; overflow-x: auto;";

/// Inline style for inline code spans.
pub const INLINE_CODE_STYLE: &str =
    "background: #f0f0f0; padding: 2pt 4pt; font-family: 'Courier New', monospace; font-size: 10pt;";

/// Inline style for bullet and ordered lists.
pub const LIST_STYLE: &str = "margin: 12pt 0; padding-left: 24pt;";

/// Inline style for list items.
pub const LIST_ITEM_STYLE: &str = "margin: 6pt 0; line-height: 1.5;";

/// Inline style for blockquotes.
pub const BLOCKQUOTE_STYLE: &str =
    "border-left: 4pt solid #ccc; padding-left: 12pt; margin: 12pt 0; color: #666;";

/// Inline style for horizontal rules.
pub const HORIZONTAL_RULE_STYLE: &str = "border: none; border-top: 1pt solid #ccc; margin: 24pt 0;";

/// Inline style for the line break emitted after a trailing bold run.
pub const STRONG_BREAK_STYLE: &str = "line-height: 1.5;";

/// Text color for inline math error spans.
pub const MATH_ERROR_COLOR: &str = "#cc0000";

/// Inline style for the error paragraph shown when rendering fails.
pub const RENDER_ERROR_STYLE: &str = "color: red;";

// ─────────────────────────────────────────────────────────────────────────────
// Style Rule Table
// ─────────────────────────────────────────────────────────────────────────────

/// The construct-to-style mapping used by the renderer.
///
/// Composed once at renderer construction and never mutated afterwards; every
/// render call reads the same table. Swapping in a custom table restyles the
/// whole document without touching the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRules {
    pub paragraph: &'static str,
    pub headings: [&'static str; 6],
    pub table: &'static str,
    pub table_cell: &'static str,
    pub table_header: &'static str,
    pub code_block: &'static str,
    pub inline_code: &'static str,
    pub bullet_list: &'static str,
    pub ordered_list: &'static str,
    pub list_item: &'static str,
    pub blockquote: &'static str,
    pub horizontal_rule: &'static str,
    pub strong_break: &'static str,
    pub math_error_color: &'static str,
    pub render_error: &'static str,
}

impl StyleRules {
    /// The rule table tuned for pasting into Word and WPS.
    pub fn word_compatible() -> Self {
        Self {
            paragraph: PARAGRAPH_STYLE,
            headings: HEADING_STYLES,
            table: TABLE_STYLE,
            table_cell: TABLE_CELL_STYLE,
            table_header: TABLE_HEADER_STYLE,
            code_block: CODE_BLOCK_STYLE,
            inline_code: INLINE_CODE_STYLE,
            bullet_list: LIST_STYLE,
            ordered_list: LIST_STYLE,
            list_item: LIST_ITEM_STYLE,
            blockquote: BLOCKQUOTE_STYLE,
            horizontal_rule: HORIZONTAL_RULE_STYLE,
            strong_break: STRONG_BREAK_STYLE,
            math_error_color: MATH_ERROR_COLOR,
            render_error: RENDER_ERROR_STYLE,
        }
    }

    /// Get the heading style for a 1-based level. Levels outside 1-6 clamp
    /// to the nearest valid level.
    pub fn heading(&self, level: u8) -> &'static str {
        self.headings[usize::from(level.clamp(1, 6)) - 1]
    }
}

impl Default for StyleRules {
    fn default() -> Self {
        Self::word_compatible()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
