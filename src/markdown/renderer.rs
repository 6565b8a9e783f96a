//! Markdown Rendering with Inline Word Styles
//!
//! This module renders markdown to HTML in which every element carries a
//! literal inline `style` attribute, using the comrak library, a CommonMark +
//! GFM compatible parser. Word processors drop external stylesheets when
//! HTML is pasted, so the presentation must travel on the elements
//! themselves.
//!
//! The renderer walks the comrak AST with its own HTML writer instead of
//! using comrak's formatter: every construct's emission is owned here, and
//! the styles come from an immutable [`StyleRules`] table composed when the
//! renderer is built.

use std::fmt::{self, Write};

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};
use log::error;

use crate::markdown::highlight::{CodeHighlighter, SyntectHighlighter};
use crate::markdown::math::typeset_math;
use crate::markdown::options::{MarkdownOptions, RenderOptions};
use crate::markdown::spacing::add_list_spacing;
use crate::markdown::styles::StyleRules;
use crate::string_utils::html_escape;

// ─────────────────────────────────────────────────────────────────────────────
// Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Renders markdown to Word-ready HTML.
///
/// Construct one renderer and reuse it: the style rule table and the
/// syntax-highlighting hook are fixed at construction, and `render` itself
/// is a pure function of its inputs. Loading the default highlighter is the
/// expensive part of construction.
pub struct RichTextRenderer {
    markdown_options: MarkdownOptions,
    rules: StyleRules,
    highlighter: Option<Box<dyn CodeHighlighter>>,
}

impl RichTextRenderer {
    /// Create a renderer with Word-compatible styles and the default
    /// syntect highlighter.
    pub fn new() -> Self {
        Self {
            markdown_options: MarkdownOptions::default(),
            rules: StyleRules::word_compatible(),
            highlighter: Some(Box::new(SyntectHighlighter::new())),
        }
    }

    /// Replace the style rule table.
    pub fn with_rules(mut self, rules: StyleRules) -> Self {
        self.rules = rules;
        self
    }

    /// Replace the parser configuration.
    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown_options = options;
        self
    }

    /// Replace the syntax-highlighting hook.
    pub fn with_highlighter(mut self, highlighter: Box<dyn CodeHighlighter>) -> Self {
        self.highlighter = Some(highlighter);
        self
    }

    /// Drop the syntax-highlighting hook; fenced code renders as escaped
    /// plain text.
    pub fn without_highlighter(mut self) -> Self {
        self.highlighter = None;
        self
    }

    /// Render markdown to HTML with inline styles.
    ///
    /// An empty input renders to an empty string. The function never
    /// panics: if writing the document fails, the output is a visible
    /// error paragraph instead, so the preview is never left blank.
    pub fn render(&self, markdown: &str, options: &RenderOptions) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let arena = Arena::new();
        let comrak_options = self.markdown_options.to_comrak_options();
        let root = parse_document(&arena, markdown, &comrak_options);

        let mut writer = HtmlWriter {
            renderer: self,
            out: String::with_capacity(markdown.len() * 2),
            footnote_order: Vec::new(),
        };
        if let Err(err) = writer.write_document(root) {
            error!("Markdown rendering failed: {}", err);
            return format!(
                "<p style=\"{}\">Render error: {}</p>",
                self.rules.render_error,
                html_escape(&err.to_string())
            );
        }

        if options.add_space_before_first_level_list {
            add_list_spacing(&writer.out)
        } else {
            writer.out
        }
    }
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Writer
// ─────────────────────────────────────────────────────────────────────────────

/// One render pass over the AST. Owns the output buffer and the footnote
/// numbering for this document only.
struct HtmlWriter<'r> {
    renderer: &'r RichTextRenderer,
    out: String,
    /// Footnote names in first-reference order; position + 1 is the label.
    footnote_order: Vec<String>,
}

impl HtmlWriter<'_> {
    fn write_document<'a>(&mut self, root: &'a AstNode<'a>) -> fmt::Result {
        // Footnote definitions collect into a trailing section; everything
        // else renders in document order.
        let mut definitions = Vec::new();
        for child in root.children() {
            if matches!(&child.data.borrow().value, NodeValue::FootnoteDefinition(_)) {
                definitions.push(child);
            } else {
                self.write_node(child, false)?;
            }
        }
        if !definitions.is_empty() {
            self.write_footnote_section(&definitions)?;
        }
        Ok(())
    }

    /// Render one node. `tight` is set only for the direct children of a
    /// tight list item, where paragraphs render unwrapped.
    fn write_node<'a>(&mut self, node: &'a AstNode<'a>, tight: bool) -> fmt::Result {
        let rules = &self.renderer.rules;
        let data = node.data.borrow();
        match &data.value {
            NodeValue::Document => self.write_children(node, false)?,

            NodeValue::Paragraph => {
                if tight {
                    self.write_children(node, false)?;
                } else {
                    write!(self.out, "<p style=\"{}\">", rules.paragraph)?;
                    self.write_children(node, false)?;
                    self.out.push_str("</p>\n");
                }
            }

            NodeValue::Heading(heading) => {
                let level = heading.level.clamp(1, 6);
                write!(self.out, "<h{} style=\"{}\">", level, rules.heading(level))?;
                self.write_children(node, false)?;
                write!(self.out, "</h{}>\n", level)?;
            }

            NodeValue::BlockQuote => {
                write!(self.out, "<blockquote style=\"{}\">\n", rules.blockquote)?;
                self.write_children(node, false)?;
                self.out.push_str("</blockquote>\n");
            }

            NodeValue::List(list) => {
                match list.list_type {
                    ListType::Bullet => {
                        write!(self.out, "<ul style=\"{}\">\n", rules.bullet_list)?;
                    }
                    ListType::Ordered => {
                        self.out.push_str("<ol");
                        if list.start != 1 {
                            write!(self.out, " start=\"{}\"", list.start)?;
                        }
                        write!(self.out, " style=\"{}\">\n", rules.ordered_list)?;
                    }
                }
                self.write_children(node, false)?;
                match list.list_type {
                    ListType::Bullet => self.out.push_str("</ul>\n"),
                    ListType::Ordered => self.out.push_str("</ol>\n"),
                }
            }

            NodeValue::Item(_) => {
                let item_tight = parent_list_is_tight(node);
                write!(self.out, "<li style=\"{}\">", rules.list_item)?;
                if !item_tight {
                    self.out.push('\n');
                }
                self.write_children(node, item_tight)?;
                self.out.push_str("</li>\n");
            }

            NodeValue::TaskItem(checked) => {
                let item_tight = parent_list_is_tight(node);
                write!(self.out, "<li style=\"{}\">", rules.list_item)?;
                if checked.is_some() {
                    self.out
                        .push_str("<input type=\"checkbox\" checked=\"\" disabled=\"\" /> ");
                } else {
                    self.out.push_str("<input type=\"checkbox\" disabled=\"\" /> ");
                }
                self.write_children(node, item_tight)?;
                self.out.push_str("</li>\n");
            }

            NodeValue::CodeBlock(code) => {
                if code.fenced {
                    let language = code.info.split_whitespace().next().unwrap_or("");
                    let body = self
                        .renderer
                        .highlighter
                        .as_ref()
                        .filter(|_| !language.is_empty())
                        .and_then(|highlighter| highlighter.highlight(&code.literal, language))
                        .unwrap_or_else(|| html_escape(&code.literal));
                    write!(
                        self.out,
                        "<pre style=\"{}\"><code>{}</code></pre>\n",
                        rules.code_block, body
                    )?;
                } else {
                    write!(
                        self.out,
                        "<pre><code>{}</code></pre>\n",
                        html_escape(&code.literal)
                    )?;
                }
            }

            NodeValue::HtmlBlock(block) => self.out.push_str(&block.literal),

            NodeValue::ThematicBreak => {
                write!(self.out, "<hr style=\"{}\" />\n", rules.horizontal_rule)?;
            }

            NodeValue::Table(_) => self.write_table(node)?,
            // Rows and cells are emitted by write_table.
            NodeValue::TableRow(_) | NodeValue::TableCell => {}

            NodeValue::Text(text) => self.out.push_str(&html_escape(text)),

            NodeValue::SoftBreak => self.out.push('\n'),
            NodeValue::LineBreak => self.out.push_str("<br />\n"),

            NodeValue::Code(code) => {
                write!(
                    self.out,
                    "<code style=\"{}\">{}</code>",
                    rules.inline_code,
                    html_escape(&code.literal)
                )?;
            }

            NodeValue::HtmlInline(raw) => self.out.push_str(raw),

            NodeValue::Emph => {
                self.out.push_str("<em>");
                self.write_children(node, false)?;
                self.out.push_str("</em>");
            }

            NodeValue::Strong => {
                self.out.push_str("<strong>");
                self.write_children(node, false)?;
                // Word collapses the spacing after a bold run that closes its
                // line; an explicit break keeps the following block apart.
                if followed_only_by_whitespace(node) {
                    write!(self.out, "</strong><br style=\"{}\">\n", rules.strong_break)?;
                } else {
                    self.out.push_str("</strong>");
                }
            }

            NodeValue::Strikethrough => {
                self.out.push_str("<del>");
                self.write_children(node, false)?;
                self.out.push_str("</del>");
            }

            NodeValue::Superscript => {
                self.out.push_str("<sup>");
                self.write_children(node, false)?;
                self.out.push_str("</sup>");
            }

            NodeValue::Link(link) => {
                write!(self.out, "<a href=\"{}\"", html_escape(&link.url))?;
                if !link.title.is_empty() {
                    write!(self.out, " title=\"{}\"", html_escape(&link.title))?;
                }
                self.out.push('>');
                self.write_children(node, false)?;
                self.out.push_str("</a>");
            }

            NodeValue::Image(image) => {
                let mut alt = String::new();
                collect_text(node, &mut alt);
                write!(
                    self.out,
                    "<img src=\"{}\" alt=\"{}\"",
                    html_escape(&image.url),
                    html_escape(&alt)
                )?;
                if !image.title.is_empty() {
                    write!(self.out, " title=\"{}\"", html_escape(&image.title))?;
                }
                self.out.push_str(" />");
            }

            NodeValue::FootnoteReference(reference) => {
                let number = self.footnote_number(&reference.name);
                let name = html_escape(&reference.name);
                write!(
                    self.out,
                    "<sup class=\"footnote-ref\"><a href=\"#fn-{name}\" id=\"fnref-{name}\">[{number}]</a></sup>",
                )?;
            }

            // Definitions are collected at the document level.
            NodeValue::FootnoteDefinition(_) => {}

            NodeValue::Math(math) => {
                let markup = typeset_math(
                    &math.literal,
                    math.display_math,
                    self.renderer.rules.math_error_color,
                );
                self.out.push_str(&markup);
            }

            NodeValue::FrontMatter(_) => {}

            // Constructs this renderer does not style render their children
            // transparently.
            _ => self.write_children(node, tight)?,
        }
        Ok(())
    }

    fn write_children<'a>(&mut self, node: &'a AstNode<'a>, tight: bool) -> fmt::Result {
        for child in node.children() {
            self.write_node(child, tight)?;
        }
        Ok(())
    }

    fn write_table<'a>(&mut self, node: &'a AstNode<'a>) -> fmt::Result {
        write!(self.out, "<table style=\"{}\">\n", self.renderer.rules.table)?;

        let mut header_rows = Vec::new();
        let mut body_rows = Vec::new();
        for row in node.children() {
            if matches!(&row.data.borrow().value, NodeValue::TableRow(true)) {
                header_rows.push(row);
            } else {
                body_rows.push(row);
            }
        }

        self.out.push_str("<thead>\n");
        for row in &header_rows {
            self.write_table_row(row, true)?;
        }
        self.out.push_str("</thead>\n");

        if !body_rows.is_empty() {
            self.out.push_str("<tbody>\n");
            for row in &body_rows {
                self.write_table_row(row, false)?;
            }
            self.out.push_str("</tbody>\n");
        }

        self.out.push_str("</table>\n");
        Ok(())
    }

    fn write_table_row<'a>(&mut self, row: &'a AstNode<'a>, header: bool) -> fmt::Result {
        let (tag, style) = if header {
            ("th", self.renderer.rules.table_header)
        } else {
            ("td", self.renderer.rules.table_cell)
        };

        self.out.push_str("<tr>\n");
        for cell in row.children() {
            write!(self.out, "<{} style=\"{}\">", tag, style)?;
            self.write_children(cell, false)?;
            write!(self.out, "</{}>\n", tag)?;
        }
        self.out.push_str("</tr>\n");
        Ok(())
    }

    fn write_footnote_section<'a>(&mut self, definitions: &[&'a AstNode<'a>]) -> fmt::Result {
        let rules = &self.renderer.rules;
        write!(self.out, "<hr style=\"{}\" />\n", rules.horizontal_rule)?;
        self.out.push_str("<section class=\"footnotes\">\n");
        write!(self.out, "<ol style=\"{}\">\n", rules.ordered_list)?;

        // Definitions render in first-reference order so the list numbering
        // matches the labels in the text; unreferenced ones follow.
        let mut ordered: Vec<&'a AstNode<'a>> = Vec::with_capacity(definitions.len());
        for name in self.footnote_order.clone() {
            if let Some(def) = definitions
                .iter()
                .copied()
                .find(|def| definition_name(def).as_deref() == Some(name.as_str()))
            {
                ordered.push(def);
            }
        }
        for def in definitions.iter().copied() {
            if !ordered.iter().any(|seen| std::ptr::eq(*seen, def)) {
                ordered.push(def);
            }
        }

        for def in ordered {
            let Some(name) = definition_name(def) else {
                continue;
            };
            let escaped_name = html_escape(&name);
            write!(
                self.out,
                "<li id=\"fn-{}\" style=\"{}\">\n",
                escaped_name, self.renderer.rules.list_item
            )?;

            let children: Vec<_> = def.children().collect();
            let last = children.len().saturating_sub(1);
            for (index, child) in children.iter().enumerate() {
                let is_last_paragraph = index == last
                    && matches!(&child.data.borrow().value, NodeValue::Paragraph);
                if is_last_paragraph {
                    // The back-reference rides inside the closing paragraph.
                    write!(self.out, "<p style=\"{}\">", self.renderer.rules.paragraph)?;
                    self.write_children(child, false)?;
                    write!(
                        self.out,
                        " <a href=\"#fnref-{}\" class=\"footnote-backref\">\u{21a9}</a></p>\n",
                        escaped_name
                    )?;
                } else {
                    self.write_node(child, false)?;
                }
            }
            self.out.push_str("</li>\n");
        }

        self.out.push_str("</ol>\n</section>\n");
        Ok(())
    }

    fn footnote_number(&mut self, name: &str) -> usize {
        if let Some(position) = self.footnote_order.iter().position(|seen| seen == name) {
            position + 1
        } else {
            self.footnote_order.push(name.to_string());
            self.footnote_order.len()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the parent list of an item is tight (no blank lines between
/// items); tight items render their paragraph content unwrapped.
fn parent_list_is_tight(node: &AstNode<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        matches!(&parent.data.borrow().value, NodeValue::List(list) if list.tight)
    })
}

/// Whether the node's next sibling is absent or whitespace-only text, the
/// condition under which a closing bold run gets its compensating break.
/// Only the immediately adjacent node is inspected.
fn followed_only_by_whitespace(node: &AstNode<'_>) -> bool {
    match node.next_sibling() {
        None => true,
        Some(next) => {
            matches!(&next.data.borrow().value, NodeValue::Text(text) if text.trim().is_empty())
        }
    }
}

/// Collect the plain text of a subtree (used for image alt text).
fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {}
    }
    for child in node.children() {
        collect_text(child, out);
    }
}

fn definition_name(node: &AstNode<'_>) -> Option<String> {
    match &node.data.borrow().value {
        NodeValue::FootnoteDefinition(def) => Some(def.name.clone()),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::styles::{
        BLOCKQUOTE_STYLE, CODE_BLOCK_STYLE, HEADING_STYLES, INLINE_CODE_STYLE, LIST_STYLE,
        PARAGRAPH_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_STYLE,
    };

    fn renderer() -> RichTextRenderer {
        RichTextRenderer::new().without_highlighter()
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(renderer().render("", &RenderOptions::default()), "");
    }

    #[test]
    fn test_paragraph_style() {
        let html = renderer().render("hello world", &RenderOptions::default());
        assert_eq!(
            html,
            format!("<p style=\"{}\">hello world</p>\n", PARAGRAPH_STYLE)
        );
    }

    #[test]
    fn test_heading_and_list_scenario() {
        let html = renderer().render("# Title\n\n- one\n- two", &RenderOptions::default());
        assert!(html.contains(&format!("<h1 style=\"{}\">Title</h1>", HEADING_STYLES[0])));
        assert!(html.contains(&format!("<ul style=\"{}\">", LIST_STYLE)));
        // Default options insert a space before each item's text.
        assert!(html.contains("> one</li>"));
        assert!(html.contains("> two</li>"));
    }

    #[test]
    fn test_list_spacing_disabled_keeps_text_flush() {
        let options = RenderOptions {
            add_space_before_first_level_list: false,
            ..Default::default()
        };
        let html = renderer().render("- one\n- two", &options);
        assert!(html.contains(">one</li>"));
        assert!(!html.contains("> one</li>"));
    }

    #[test]
    fn test_all_heading_levels_use_their_profiles() {
        let r = renderer();
        for level in 1..=6usize {
            let markdown = format!("{} heading", "#".repeat(level));
            let html = r.render(&markdown, &RenderOptions::default());
            assert!(
                html.contains(&format!(
                    "<h{} style=\"{}\">heading</h{}>",
                    level,
                    HEADING_STYLES[level - 1],
                    level
                )),
                "level {} output: {}",
                level,
                html
            );
        }
    }

    #[test]
    fn test_table_styles() {
        let html = renderer().render(
            "| a | b |\n| --- | --- |\n| c | d |",
            &RenderOptions::default(),
        );
        assert!(html.contains(&format!("<table style=\"{}\">", TABLE_STYLE)));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<tbody>"));
        assert!(html.contains(&format!("<th style=\"{}\">a</th>", TABLE_HEADER_STYLE)));
        assert!(html.contains(&format!("<td style=\"{}\">c</td>", TABLE_CELL_STYLE)));
    }

    #[test]
    fn test_fenced_code_without_highlighter_escapes() {
        let html = renderer().render("```\nlet x = 1 < 2;\n```", &RenderOptions::default());
        assert!(html.contains(&format!("<pre style=\"{}\"><code>", CODE_BLOCK_STYLE)));
        assert!(html.contains("let x = 1 &lt; 2;"));
    }

    #[test]
    fn test_fenced_code_with_highlighter_emits_styled_spans() {
        let r = RichTextRenderer::new();
        let html = r.render(
            "```javascript\nfunction hello() { return 1; }\n```",
            &RenderOptions::default(),
        );
        assert!(html.contains(&format!("<pre style=\"{}\"><code>", CODE_BLOCK_STYLE)));
        assert!(html.contains("<span style=\""));
    }

    #[test]
    fn test_inline_code_escaped_and_styled() {
        let html = renderer().render("run `a<b` now", &RenderOptions::default());
        assert!(html.contains(&format!("<code style=\"{}\">a&lt;b</code>", INLINE_CODE_STYLE)));
    }

    #[test]
    fn test_blockquote_style() {
        let html = renderer().render("> quoted text", &RenderOptions::default());
        assert!(html.contains(&format!("<blockquote style=\"{}\">", BLOCKQUOTE_STYLE)));
        assert!(html.contains("quoted text"));
    }

    #[test]
    fn test_horizontal_rule_literal() {
        let html = renderer().render("---", &RenderOptions::default());
        assert!(html.contains(
            "<hr style=\"border: none; border-top: 1pt solid #ccc; margin: 24pt 0;\" />"
        ));
    }

    #[test]
    fn test_trailing_strong_gets_break() {
        let html = renderer().render("some **bold**", &RenderOptions::default());
        assert!(html.contains("</strong><br style=\"line-height: 1.5;\">"));
    }

    #[test]
    fn test_mid_text_strong_gets_no_break() {
        let html = renderer().render("**bold** and more", &RenderOptions::default());
        assert!(html.contains("</strong>"));
        assert!(!html.contains("<br"));
    }

    #[test]
    fn test_ordered_list_keeps_start() {
        let html = renderer().render("3. three\n4. four", &RenderOptions::default());
        assert!(html.contains(&format!("<ol start=\"3\" style=\"{}\">", LIST_STYLE)));
    }

    #[test]
    fn test_task_list_checkboxes() {
        let html = renderer().render("- [x] done\n- [ ] todo", &RenderOptions::default());
        assert!(html.contains("<input type=\"checkbox\" checked=\"\" disabled=\"\" />"));
        assert!(html.contains("<input type=\"checkbox\" disabled=\"\" />"));
    }

    #[test]
    fn test_footnote_ids_and_links() {
        let html = renderer().render(
            "text with a note[^note]\n\n[^note]: the note body",
            &RenderOptions::default(),
        );
        assert!(html.contains("id=\"fnref-note\""));
        assert!(html.contains("href=\"#fn-note\""));
        assert!(html.contains("id=\"fn-note\""));
        assert!(html.contains("href=\"#fnref-note\""));
        assert!(html.contains("[1]"));
    }

    #[test]
    fn test_inline_math_typesets() {
        let html = renderer().render("the law $E = mc^2$ holds", &RenderOptions::default());
        assert!(html.contains("<math"));
    }

    #[test]
    fn test_malformed_math_degrades_to_error_span() {
        let html = renderer().render("broken $\\frac{1$ math", &RenderOptions::default());
        assert!(html.contains("#cc0000"));
        // The rest of the document still renders.
        assert!(html.contains("broken"));
        assert!(html.contains("math"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = renderer().render(
            "before\n\n<div class=\"note\">hi</div>\n\nafter",
            &RenderOptions::default(),
        );
        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn test_no_unresolved_syntax_markers() {
        let html = renderer().render(
            "# Heading\n\n**bold** and *emphasis* and `code`",
            &RenderOptions::default(),
        );
        assert!(!html.contains('*'));
        assert!(!html.contains('`'));
        assert!(!html.contains("# Heading"));
    }

    #[test]
    fn test_smart_punctuation_substitutes_quotes() {
        let html = renderer().render("she said \"hello\"", &RenderOptions::default());
        assert!(html.contains('\u{201C}'));
        assert!(html.contains('\u{201D}'));
    }

    #[test]
    fn test_autolink() {
        let html = renderer().render("visit https://example.com now", &RenderOptions::default());
        assert!(html.contains("<a href=\"https://example.com\""));
    }

    #[test]
    fn test_strikethrough() {
        let html = renderer().render("~~gone~~", &RenderOptions::default());
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_image_alt_text() {
        let html = renderer().render("![alt text](img.png)", &RenderOptions::default());
        assert!(html.contains("<img src=\"img.png\" alt=\"alt text\" />"));
    }

    #[test]
    fn test_loose_list_wraps_paragraphs() {
        let html = renderer().render("- one\n\n- two", &RenderOptions::default());
        // Loose items wrap their content in styled paragraphs, and the
        // spacing pass lands after the paragraph open tag.
        assert!(html.contains(&format!("<p style=\"{}\"> one</p>", PARAGRAPH_STYLE)));
    }

    #[test]
    fn test_nested_items_also_get_spacing() {
        let html = renderer().render("- a\n  - b", &RenderOptions::default());
        assert!(html.contains("> a"));
        assert!(html.contains("> b"));
    }
}
