//! HTML Tree Bridge
//!
//! The export pipeline works on a document tree rather than on markup text:
//! fragments are parsed with html5ever, processed, and serialized back. The
//! helpers here give the rest of the module the handful of operations it
//! needs: fragment parsing, innerHTML-style serialization, deep cloning,
//! text extraction and attribute access.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, Attribute, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

// ─────────────────────────────────────────────────────────────────────────────
// Parsing and Serialization
// ─────────────────────────────────────────────────────────────────────────────

/// Parse an HTML fragment into a tree.
///
/// Returns the synthetic container element wrapping the parsed nodes; its
/// children are the fragment's top-level nodes.
pub fn parse_html_fragment(html: &str) -> Handle {
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("div")),
        vec![],
    )
    .one(html);

    let document = dom.document;
    // Detach the container from the document before `document` is dropped.
    // markup5ever_rcdom's `Drop for Node` iteratively empties the `children`
    // of every node in the subtree it owns (a stack-overflow guard), regardless
    // of outstanding `Rc` references. Leaving the container attached means that
    // when `document` drops at the end of this function it would gut the tree we
    // hand back. Removing it from the document's children keeps it out of that
    // traversal so the returned subtree survives.
    let container = {
        let mut children = document.children.borrow_mut();
        if children.is_empty() {
            None
        } else {
            Some(children.remove(0))
        }
    };
    container.unwrap_or(document)
}

/// Serialize the children of `node` back to markup (innerHTML semantics).
pub fn serialize_children(node: &Handle) -> io::Result<String> {
    let mut buffer = Vec::new();
    let serializable = SerializableHandle::from(node.clone());
    serialize(
        &mut buffer,
        &serializable,
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Deep-copy a node and its subtree. The copy shares nothing with the
/// original, so the copy can be mutated freely.
pub fn deep_clone(node: &Handle) -> Handle {
    let data = match &node.data {
        NodeData::Document => NodeData::Document,
        NodeData::Doctype {
            name,
            public_id,
            system_id,
        } => NodeData::Doctype {
            name: name.clone(),
            public_id: public_id.clone(),
            system_id: system_id.clone(),
        },
        NodeData::Text { contents } => NodeData::Text {
            contents: RefCell::new(contents.borrow().clone()),
        },
        NodeData::Comment { contents } => NodeData::Comment {
            contents: contents.clone(),
        },
        NodeData::ProcessingInstruction { target, contents } => {
            NodeData::ProcessingInstruction {
                target: target.clone(),
                contents: contents.clone(),
            }
        }
        NodeData::Element {
            name,
            attrs,
            template_contents,
            mathml_annotation_xml_integration_point,
        } => NodeData::Element {
            name: name.clone(),
            attrs: RefCell::new(attrs.borrow().clone()),
            template_contents: RefCell::new(
                template_contents.borrow().as_ref().map(deep_clone),
            ),
            mathml_annotation_xml_integration_point: *mathml_annotation_xml_integration_point,
        },
    };

    let copy = Node::new(data);
    for child in node.children.borrow().iter() {
        let child_copy = deep_clone(child);
        child_copy.parent.set(Some(Rc::downgrade(&copy)));
        copy.children.borrow_mut().push(child_copy);
    }
    copy
}

/// Concatenated text-node content of a subtree (textContent semantics).
pub fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Attribute Access
// ─────────────────────────────────────────────────────────────────────────────

/// Look up an attribute value by local name.
pub(crate) fn get_attribute(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.name.local.as_ref() == name)
        .map(|attr| attr.value.to_string())
}

/// Set an attribute, replacing any existing value.
pub(crate) fn set_attribute(attrs: &mut Vec<Attribute>, name: &str, value: &str) {
    if let Some(attr) = attrs.iter_mut().find(|attr| attr.name.local.as_ref() == name) {
        attr.value = value.into();
    } else {
        attrs.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        });
    }
}

/// Remove an attribute by local name.
pub(crate) fn remove_attribute(attrs: &mut Vec<Attribute>, name: &str) {
    attrs.retain(|attr| attr.name.local.as_ref() != name);
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize_round_trip() {
        let html = "<p style=\"color: red;\">hi</p>";
        let root = parse_html_fragment(html);
        assert_eq!(serialize_children(&root).unwrap(), html);
    }

    #[test]
    fn test_text_content_strips_tags() {
        let root = parse_html_fragment("<p>a<strong>b</strong>c</p>");
        assert_eq!(text_content(&root), "abc");
    }

    #[test]
    fn test_text_content_of_empty_fragment() {
        let root = parse_html_fragment("");
        assert_eq!(text_content(&root), "");
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let root = parse_html_fragment("<p class=\"x\">text</p>");
        let copy = deep_clone(&root);

        // Strip an attribute on the copy; the original keeps it.
        if let NodeData::Element { attrs, .. } = &copy.children.borrow()[0].data {
            remove_attribute(&mut attrs.borrow_mut(), "class");
        }

        assert!(!serialize_children(&copy).unwrap().contains("class"));
        assert!(serialize_children(&root).unwrap().contains("class=\"x\""));
    }

    #[test]
    fn test_attribute_helpers() {
        let mut attrs = Vec::new();
        set_attribute(&mut attrs, "style", "color: red");
        assert_eq!(get_attribute(&attrs, "style").as_deref(), Some("color: red"));

        set_attribute(&mut attrs, "style", "color: blue");
        assert_eq!(attrs.len(), 1);
        assert_eq!(get_attribute(&attrs, "style").as_deref(), Some("color: blue"));

        remove_attribute(&mut attrs, "style");
        assert!(get_attribute(&attrs, "style").is_none());
    }
}
