//! List Spacing Post-Processing
//!
//! Word collapses the gap between a list marker and the item text when
//! styled HTML is pasted. This pass inserts one literal space after every
//! list-item open tag (and after the paragraph open tag inside loose items)
//! so the pasted result keeps the marker and text apart.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Matches a list-item open tag, optionally followed by whitespace and a
/// paragraph open tag (the loose-item form).
fn list_open_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(<li[^>]*>)(\s*<p[^>]*>)?").expect("hard-coded pattern compiles")
    })
}

/// Insert one space before the first text content of every list item.
///
/// The match is purely textual and applies to list items at every nesting
/// depth, not only top-level ones; nested items are prefixed as well.
// TODO: decide with product whether sub-list items should stay excluded
// from the "first level" option or keep receiving the space too.
pub fn add_list_spacing(html: &str) -> String {
    list_open_pattern()
        .replace_all(html, |caps: &Captures<'_>| match caps.get(2) {
            Some(paragraph_open) => format!("{}{} ", &caps[1], paragraph_open.as_str()),
            None => format!("{} ", &caps[1]),
        })
        .into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_inserted_after_list_item_open() {
        let html = r#"<li style="margin: 6pt 0;">one</li>"#;
        assert_eq!(
            add_list_spacing(html),
            r#"<li style="margin: 6pt 0;"> one</li>"#
        );
    }

    #[test]
    fn test_space_inserted_after_paragraph_in_loose_item() {
        let html = "<li>\n<p style=\"margin: 0;\">one</p>\n</li>";
        assert_eq!(
            add_list_spacing(html),
            "<li>\n<p style=\"margin: 0;\"> one</p>\n</li>"
        );
    }

    #[test]
    fn test_nested_items_are_prefixed_too() {
        let html = "<ul><li>a<ul><li>b</li></ul></li></ul>";
        assert_eq!(
            add_list_spacing(html),
            "<ul><li> a<ul><li> b</li></ul></li></ul>"
        );
    }

    #[test]
    fn test_html_without_lists_is_unchanged() {
        let html = "<p>no lists here</p>";
        assert_eq!(add_list_spacing(html), html);
    }
}
