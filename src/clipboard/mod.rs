//! Clipboard orchestrator.
//!
//! Copying happens through the terminal itself: the default clipboard
//! composes an OSC 52 write that the renderer flushes with the next
//! paint, so the runtime never needs a second writer or a display server
//! connection.

mod core;

pub use self::core::{
    Clipboard, ClipboardError, CopyOutcome, DisabledClipboard, MemoryClipboard, Osc52Clipboard,
};
