//! Style Inlining
//!
//! Flattens each element's resolved style into a literal `style` attribute,
//! so the markup carries its full presentation with no stylesheet behind it.
//! Only catalog properties are written; `class` attributes are removed since
//! the classes they referenced no longer mean anything in the target
//! document.

use markup5ever_rcdom::{Handle, NodeData};

use crate::export::catalog::{is_noop_value, WORD_SUPPORTED_STYLES};
use crate::export::dom::{deep_clone, get_attribute, remove_attribute, set_attribute};
use crate::export::resolve::{ComputedStyle, StyleResolver};

/// Flatten resolved styles into literal `style` attributes across a subtree.
///
/// Operates on a deep copy; the caller's tree is never modified. For every
/// element, the resolved style is intersected with the Word-safe catalog and
/// concatenated onto the existing inline style, existing declarations
/// first, so on a conflict the earlier text wins in the target application's
/// reading order.
pub fn inline_styles(root: &Handle, resolver: &dyn StyleResolver) -> Handle {
    let copy = deep_clone(root);
    process_tree(&copy, resolver, None);
    copy
}

fn process_tree(node: &Handle, resolver: &dyn StyleResolver, parent: Option<&ComputedStyle>) {
    let resolved = if let NodeData::Element { name, attrs, .. } = &node.data {
        let mut attrs = attrs.borrow_mut();
        let existing = get_attribute(&attrs, "style");
        let resolved = resolver.resolve(name.local.as_ref(), existing.as_deref(), parent);

        let extracted = extract_relevant_styles(&resolved);
        match existing {
            Some(existing) => {
                set_attribute(&mut attrs, "style", &format!("{}; {}", existing, extracted));
            }
            None if !extracted.is_empty() => set_attribute(&mut attrs, "style", &extracted),
            None => {}
        }

        remove_attribute(&mut attrs, "class");
        Some(resolved)
    } else {
        None
    };

    for child in node.children.borrow().iter() {
        process_tree(child, resolver, resolved.as_ref().or(parent));
    }
}

/// Extract the catalog subset of a resolved style as a declaration string.
///
/// Properties appear in catalog order; values matching a no-op sentinel are
/// omitted.
fn extract_relevant_styles(resolved: &ComputedStyle) -> String {
    let mut declarations = Vec::new();
    for property in WORD_SUPPORTED_STYLES {
        if let Some(value) = resolved.get(*property) {
            if !is_noop_value(value) {
                declarations.push(format!("{}: {}", property, value));
            }
        }
    }
    declarations.join("; ")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
