//! ANSI sequence composition helpers.
//!
//! The renderer, the fragment projector, and the OSC 52 clipboard all write
//! escape sequences; the builders live here so call sites do not hand-roll
//! escape codes. Functions return owned `String`s so callers can extend them
//! or write directly to the terminal.

const CSI: &str = "\x1b[";

/// Reset all SGR attributes.
pub const RESET: &str = "\x1b[0m";
/// Bold / increased intensity.
pub const BOLD: &str = "\x1b[1m";
/// Faint / decreased intensity.
pub const DIM: &str = "\x1b[2m";
/// Underline.
pub const UNDERLINE: &str = "\x1b[4m";
/// Reverse video.
pub const REVERSE: &str = "\x1b[7m";

/// Move the cursor to an absolute 1-based `row` and `column`.
pub fn move_to(row: u16, column: u16) -> String {
    format!("{CSI}{row};{column}H")
}

/// Compose an OSC 52 clipboard write for the given base64 payload.
///
/// Targets the `c` (system clipboard) selection and terminates with BEL,
/// which every terminal that honors OSC 52 accepts.
pub fn osc52_clipboard(encoded: &str) -> String {
    format!("\x1b]52;c;{encoded}\x07")
}
