use std::io::Write;

use crate::ansi;
use crate::display_width;
use crate::error::Result;
use crate::layout::Rect;
use crate::registry::{ZoneId, ZoneState};

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    pub restore_cursor: Option<(u16, u16)>,
}

/// ANSI escape code renderer writing directly to a terminal handle.
///
/// The renderer is the sole writer of the terminal stream: zone repaints,
/// queued raw sequences (OSC 52 clipboard writes), and the cursor restore
/// all go out in one flush.
pub struct AnsiRenderer {
    settings: RendererSettings,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render(
        &mut self,
        writer: &mut impl Write,
        dirty: &[(ZoneId, ZoneState)],
        sequences: &[String],
    ) -> Result<()> {
        for (_id, state) in dirty {
            render_zone(writer, state)?;
        }

        for sequence in sequences {
            write!(writer, "{}", sequence)?;
        }

        if let Some((row, col)) = self.settings.restore_cursor {
            write!(writer, "{}", ansi::move_to(row + 1, col + 1))?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn render_zone(writer: &mut impl Write, state: &ZoneState) -> Result<()> {
    let Rect {
        x,
        y,
        width,
        height,
    } = state.rect;

    if width == 0 || height == 0 {
        return Ok(());
    }

    let mut rendered_lines = Vec::new();
    for raw in state.content.split('\n') {
        rendered_lines.extend(chunk_to_width(raw, width));
    }

    if rendered_lines.len() > height as usize {
        rendered_lines.truncate(height as usize);
    }

    while rendered_lines.len() < height as usize {
        rendered_lines.push(String::new());
    }

    for (offset, line) in rendered_lines.iter_mut().enumerate() {
        pad_line(line, width);
        write!(writer, "{}", ansi::move_to(y + offset as u16 + 1, x + 1))?;
        write!(writer, "{}", line)?;
    }

    Ok(())
}

/// Hard-wrap a single line into display-width chunks.
///
/// Whitespace is preserved exactly; lab code samples carry meaningful
/// indentation. Escape sequences contribute zero width and are never split
/// across a chunk boundary.
pub fn chunk_to_width(raw: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used: u16 = 0;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            current.push(ch);
            if let Some(&next) = chars.peek() {
                current.push(next);
                chars.next();
                if next == '[' {
                    // CSI: parameter bytes through the final byte.
                    while let Some(&c) = chars.peek() {
                        current.push(c);
                        chars.next();
                        if ('\x40'..='\x7e').contains(&c) {
                            break;
                        }
                    }
                }
            }
            continue;
        }

        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w > width {
            // Glyph wider than the zone, skip it.
            continue;
        }
        if used + w > width {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

fn pad_line(line: &mut String, width: u16) {
    let mut display = display_width(line) as u16;
    while display < width {
        line.push(' ');
        display += 1;
    }

    if display > width {
        // Truncate any overshoot caused by ANSI codes being stripped differently.
        while (display_width(line) as u16) > width {
            line.pop();
        }
        while (display_width(line) as u16) < width {
            line.push(' ');
        }
    }
}
