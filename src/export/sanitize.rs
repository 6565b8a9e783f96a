//! Export Sanitization
//!
//! Rendered markup carries attributes that only mean something in the live
//! preview, such as debug `data-*` attributes and generated ids. They must not leak
//! into the target document, with one exception: footnote anchor ids, which
//! the in-document footnote links depend on.

use log::warn;
use markup5ever_rcdom::{Handle, NodeData};

use crate::export::dom::{parse_html_fragment, serialize_children};

/// Attribute name prefix of internal/debug attributes removed on export.
const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// Ids carrying this prefix anchor footnote links and must survive export.
const FOOTNOTE_ID_PREFIX: &str = "fn";

/// Remove non-portable attributes from markup prior to export.
///
/// Every `data-*` attribute is dropped, and every `id` whose value does not
/// start with the footnote prefix. Applying the function twice yields the
/// same output as applying it once.
pub fn clean_html(html: &str) -> String {
    let root = parse_html_fragment(html);
    clean_tree(&root);
    serialize_children(&root).unwrap_or_else(|err| {
        warn!("Serializing sanitized markup failed: {}", err);
        html.to_string()
    })
}

fn clean_tree(node: &Handle) {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs.borrow_mut().retain(|attr| {
            let name = attr.name.local.as_ref();
            if name.starts_with(DATA_ATTRIBUTE_PREFIX) {
                return false;
            }
            if name == "id" && !attr.value.starts_with(FOOTNOTE_ID_PREFIX) {
                return false;
            }
            true
        });
    }
    for child in node.children.borrow().iter() {
        clean_tree(child);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_attributes_removed() {
        let html = clean_html("<p data-line=\"3\" data-source=\"x\">text</p>");
        assert_eq!(html, "<p>text</p>");
    }

    #[test]
    fn test_plain_ids_removed() {
        let html = clean_html("<h1 id=\"title\">Title</h1>");
        assert_eq!(html, "<h1>Title</h1>");
    }

    #[test]
    fn test_footnote_ids_survive() {
        let html = clean_html("<li id=\"fn-1\">note</li><a id=\"fnref-1\">[1]</a>");
        assert!(html.contains("id=\"fn-1\""));
        assert!(html.contains("id=\"fnref-1\""));
    }

    #[test]
    fn test_style_attributes_untouched() {
        let html = clean_html("<p style=\"color: red;\" id=\"x\">text</p>");
        assert_eq!(html, "<p style=\"color: red;\">text</p>");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let input =
            "<div id=\"preview\" data-role=\"root\"><p id=\"fn-2\">a</p><span id=\"s\">b</span></div>";
        let once = clean_html(input);
        let twice = clean_html(&once);
        assert_eq!(once, twice);
    }
}
