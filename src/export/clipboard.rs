//! Clipboard Export
//!
//! This module copies rendered rich text to the system clipboard using the
//! arboard crate: a simultaneous `text/html` + `text/plain` payload, so word
//! processors paste the styled markup while plain-text targets get readable
//! text. When arboard cannot reach a clipboard (no session, write rejected),
//! the sanitized markup is piped through the platform clipboard utility as a
//! fallback.

use std::fmt;
use std::io::{self, Write as _};
use std::process::{Command, Stdio};

use arboard::Clipboard;
use log::warn;
use markup5ever_rcdom::Handle;

use crate::export::dom::{parse_html_fragment, serialize_children, text_content};
use crate::export::inliner::inline_styles;
use crate::export::resolve::{PreviewStyles, StyleResolver};
use crate::export::sanitize::clean_html;

// ─────────────────────────────────────────────────────────────────────────────
// Fallback Command
// ─────────────────────────────────────────────────────────────────────────────

/// Platform clipboard utility used when the arboard write fails.
#[cfg(target_os = "macos")]
const FALLBACK_COMMAND: &[&str] = &["pbcopy"];
#[cfg(target_os = "windows")]
const FALLBACK_COMMAND: &[&str] = &["clip"];
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const FALLBACK_COMMAND: &[&str] = &["xclip", "-selection", "clipboard", "-t", "text/html"];

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during a copy attempt.
#[derive(Debug)]
pub enum CopyError {
    /// Copy was requested with nothing to copy
    NothingToCopy,
    /// Markup could not be serialized for export
    Serialize(io::Error),
    /// Both the clipboard write and the fallback utility failed
    CopyFailed { clipboard: String, fallback: String },
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::NothingToCopy => write!(f, "Nothing to copy"),
            CopyError::Serialize(err) => {
                write!(f, "Failed to serialize markup for export: {}", err)
            }
            CopyError::CopyFailed {
                clipboard,
                fallback,
            } => {
                write!(
                    f,
                    "Copy failed (clipboard: {}; fallback: {})",
                    clipboard, fallback
                )
            }
        }
    }
}

impl std::error::Error for CopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CopyError::Serialize(err) => Some(err),
            CopyError::NothingToCopy | CopyError::CopyFailed { .. } => None,
        }
    }
}

impl From<io::Error> for CopyError {
    fn from(err: io::Error) -> Self {
        CopyError::Serialize(err)
    }
}

/// Which path carried a successful clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    /// The structured HTML + plain-text clipboard write
    Clipboard,
    /// The platform clipboard utility fallback
    OsUtility,
}

impl CopyPath {
    /// Get the display label for this path.
    pub fn label(&self) -> &'static str {
        match self {
            CopyPath::Clipboard => "clipboard",
            CopyPath::OsUtility => FALLBACK_COMMAND[0],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Exporter
// ─────────────────────────────────────────────────────────────────────────────

/// Copies rendered rich text to the system clipboard.
///
/// `copy_rich_text` borrows the exporter mutably, so overlapping copies
/// cannot be issued from safe code. There is no internal queue and no
/// cancellation; each attempt runs to success or failure.
pub struct ClipboardExporter {
    resolver: Box<dyn StyleResolver>,
}

impl ClipboardExporter {
    /// Create an exporter resolving styles against the preview stylesheet.
    pub fn new() -> Self {
        Self {
            resolver: Box::new(PreviewStyles),
        }
    }

    /// Create an exporter with a custom style resolver.
    pub fn with_resolver(resolver: Box<dyn StyleResolver>) -> Self {
        Self { resolver }
    }

    /// Copy the element's contents to the clipboard as rich text.
    ///
    /// The element's styles are flattened into literal inline styles, the
    /// markup is sanitized, a plain-text form is derived, and both are
    /// written to the clipboard together. An element with no text content is
    /// rejected before any tree work happens.
    pub fn copy_rich_text(&mut self, element: &Handle) -> Result<CopyPath, CopyError> {
        if text_content(element).trim().is_empty() {
            return Err(CopyError::NothingToCopy);
        }

        let inlined = inline_styles(element, self.resolver.as_ref());
        let html = clean_html(&serialize_children(&inlined)?);
        let plain_text = html_to_plain_text(&html);

        match write_clipboard(&html, &plain_text) {
            Ok(()) => Ok(CopyPath::Clipboard),
            Err(clipboard_error) => {
                warn!(
                    "Clipboard write failed ({}), falling back to {}",
                    clipboard_error, FALLBACK_COMMAND[0]
                );
                match write_with_os_utility(&html) {
                    Ok(()) => Ok(CopyPath::OsUtility),
                    Err(fallback_error) => Err(CopyError::CopyFailed {
                        clipboard: clipboard_error,
                        fallback: fallback_error.to_string(),
                    }),
                }
            }
        }
    }
}

impl Default for ClipboardExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the plain-text form of exported markup (all tags stripped).
pub fn html_to_plain_text(html: &str) -> String {
    text_content(&parse_html_fragment(html))
}

/// Report whether a rich-text copy can be attempted on this system.
pub fn is_rich_copy_supported() -> bool {
    Clipboard::new().is_ok() || command_on_path(FALLBACK_COMMAND[0])
}

// ─────────────────────────────────────────────────────────────────────────────
// Write Paths
// ─────────────────────────────────────────────────────────────────────────────

fn write_clipboard(html: &str, plain_text: &str) -> Result<(), String> {
    let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
    clipboard
        .set_html(html, Some(plain_text))
        .map_err(|err| err.to_string())
}

fn write_with_os_utility(html: &str) -> io::Result<()> {
    let mut child = Command::new(FALLBACK_COMMAND[0])
        .args(&FALLBACK_COMMAND[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let write_result = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(html.as_bytes()),
        None => Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "no stdin handle on clipboard utility",
        )),
    };

    // Reap the child no matter how the write went.
    let wait_result = child.wait();

    write_result?;
    let status = wait_result?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{} exited with {}", FALLBACK_COMMAND[0], status),
        ))
    }
}

fn command_on_path(name: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(name);
        candidate.is_file() || candidate.with_extension("exe").is_file()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_rejected_before_any_work() {
        let element = parse_html_fragment("");
        let mut exporter = ClipboardExporter::new();
        assert!(matches!(
            exporter.copy_rich_text(&element),
            Err(CopyError::NothingToCopy)
        ));
    }

    #[test]
    fn test_whitespace_only_element_rejected() {
        let element = parse_html_fragment("<p>   </p>");
        let mut exporter = ClipboardExporter::new();
        assert!(matches!(
            exporter.copy_rich_text(&element),
            Err(CopyError::NothingToCopy)
        ));
    }

    #[test]
    fn test_html_to_plain_text_strips_tags() {
        let plain = html_to_plain_text("<p>a<strong>b</strong></p><p>c</p>");
        assert_eq!(plain, "abc");
    }

    #[test]
    fn test_copy_error_display() {
        assert_eq!(CopyError::NothingToCopy.to_string(), "Nothing to copy");

        let err = CopyError::CopyFailed {
            clipboard: "no display".to_string(),
            fallback: "utility missing".to_string(),
        };
        assert!(err.to_string().contains("no display"));
        assert!(err.to_string().contains("utility missing"));
    }

    // Note: Actual clipboard tests require a display/clipboard context
    // which isn't typically available in CI environments.
}
