use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::ansi;

pub type ClipboardResult<T> = std::result::Result<T, ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
}

/// What the caller must do to finish a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Queue this escape sequence for the renderer; the terminal applies it.
    Emit(String),
    /// The clipboard handled the text itself.
    Done,
}

/// Destination for copied code samples. Implementations receive the raw
/// sample text, never the escaped display form.
pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> ClipboardResult<CopyOutcome>;
}

/// OSC 52 system-clipboard writer.
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for Osc52Clipboard {
    fn copy(&mut self, text: &str) -> ClipboardResult<CopyOutcome> {
        let encoded = STANDARD.encode(text.as_bytes());
        Ok(CopyOutcome::Emit(ansi::osc52_clipboard(&encoded)))
    }
}

/// Records copied text instead of leaving the process. Test double.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copied: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn copied(&self) -> &[String] {
        &self.copied
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> ClipboardResult<CopyOutcome> {
        self.copied.push(text.to_string());
        Ok(CopyOutcome::Done)
    }
}

/// Every copy fails. Selected when the user turns the clipboard off, or
/// for terminals known to drop OSC 52.
#[derive(Debug, Default)]
pub struct DisabledClipboard;

impl DisabledClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for DisabledClipboard {
    fn copy(&mut self, _text: &str) -> ClipboardResult<CopyOutcome> {
        Err(ClipboardError::Unavailable)
    }
}
