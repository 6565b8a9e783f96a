//! md2doc - Markdown to Word-Compatible Rich Text
//!
//! Converts markdown into HTML whose presentation rides on literal inline
//! `style` attributes, and copies it to the system clipboard as a
//! simultaneous `text/html` + `text/plain` payload. Paste the result into
//! Word or WPS and the styling survives, because nothing depends on a
//! stylesheet the target application would throw away.
//!
//! The editor surface around this crate is deliberately thin: callers hand
//! in a markdown string and an options record, display the returned HTML,
//! and on request pass the displayed fragment back for the clipboard copy.
//!
//! # Example
//! ```ignore
//! use md2doc::export::dom::parse_html_fragment;
//! use md2doc::{ClipboardExporter, RenderOptions, RichTextRenderer};
//!
//! let renderer = RichTextRenderer::new();
//! let html = renderer.render("# Hello\n\n- item", &RenderOptions::default());
//!
//! let mut exporter = ClipboardExporter::new();
//! exporter.copy_rich_text(&parse_html_fragment(&html))?;
//! ```

pub mod export;
pub mod markdown;
mod string_utils;

pub use export::{is_rich_copy_supported, ClipboardExporter, CopyError, CopyPath};
pub use markdown::{RenderOptions, RichTextRenderer};
