//! Rich-Text Export Module
//!
//! This module turns rendered preview markup into a clipboard payload that
//! pastes cleanly into Word and WPS: styles flattened to literal inline
//! attributes, internal attributes stripped, and an HTML + plain-text pair
//! written to the system clipboard.
//!
//! # Architecture
//!
//! - `dom.rs` - HTML tree parsing, serialization and traversal helpers
//! - `catalog.rs` - the Word-safe style property allow-list
//! - `resolve.rs` - effective style resolution over the preview stylesheet
//! - `inliner.rs` - flattening resolved styles into `style` attributes
//! - `sanitize.rs` - removal of non-portable attributes
//! - `clipboard.rs` - platform clipboard operations with fallback

pub mod catalog;
pub mod clipboard;
pub mod dom;
pub mod inliner;
pub mod resolve;
pub mod sanitize;

pub use clipboard::{
    html_to_plain_text, is_rich_copy_supported, ClipboardExporter, CopyError, CopyPath,
};
pub use inliner::inline_styles;
pub use resolve::{ComputedStyle, PreviewStyles, StyleResolver};
pub use sanitize::clean_html;
