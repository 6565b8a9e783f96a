//! Markdown Rendering Module
//!
//! This module converts markdown text to HTML whose presentation is carried
//! entirely by literal inline `style` attributes, so the output survives
//! pasting into Word and WPS. Parsing uses the comrak library, a CommonMark +
//! GFM compatible parser.
//!
//! # Features
//! - Per-construct inline style rules tuned for word processors
//! - GFM tables, task lists, strikethrough, autolinks and footnotes
//! - Fenced-code syntax highlighting through a pluggable hook (syntect)
//! - Math typeset to static MathML with per-expression error recovery
//! - Optional list-spacing pass compensating for Word's marker handling
//!
//! # Example
//! ```ignore
//! use md2doc::markdown::{RenderOptions, RichTextRenderer};
//!
//! let renderer = RichTextRenderer::new();
//! let html = renderer.render("# Hello\n\n- item", &RenderOptions::default());
//! ```

mod highlight;
mod math;
mod options;
mod renderer;
mod spacing;
mod styles;

// Only export what the preview and export collaborators actually use
pub use highlight::{CodeHighlighter, SyntectHighlighter};
pub use options::{MarkdownOptions, RenderOptions};
pub use renderer::RichTextRenderer;
pub use spacing::add_list_spacing;
pub use styles::StyleRules;
