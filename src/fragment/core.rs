use unicode_width::UnicodeWidthChar;

use crate::ansi;

/// Escape text for literal inclusion in a fragment.
///
/// `&` must be rewritten first or the other replacements would be
/// double-escaped.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline styles the markup vocabulary can toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct StyleState {
    bold: bool,
    dim: bool,
    reverse: bool,
    underline: bool,
}

impl StyleState {
    fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    fn push_codes(&self, line: &mut String) {
        if self.bold {
            line.push_str(ansi::BOLD);
        }
        if self.dim {
            line.push_str(ansi::DIM);
        }
        if self.reverse {
            line.push_str(ansi::REVERSE);
        }
        if self.underline {
            line.push_str(ansi::UNDERLINE);
        }
    }

    fn apply_tag(&mut self, body: &str) -> bool {
        let (name, enable) = match body.strip_prefix('/') {
            Some(rest) => (rest, false),
            None => (body, true),
        };
        match name {
            "b" => self.bold = enable,
            "dim" => self.dim = enable,
            "rev" => self.reverse = enable,
            "u" => self.underline = enable,
            _ => return false,
        }
        true
    }
}

/// Project a fragment into styled lines no wider than `width` cells.
///
/// Tags toggle styles, entities decode to literal characters, and any
/// other well-formed `<...>` run is consumed without output. Styles do
/// not span source lines; an unclosed tag is dropped at the line break.
/// Every emitted line is self-contained: continuation lines re-open the
/// active style and any styled line ends with a reset.
pub fn project(fragment: &str, width: u16) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for raw in fragment.split('\n') {
        project_line(raw, width, &mut out);
    }
    out
}

fn project_line(raw: &str, width: u16, out: &mut Vec<String>) {
    let mut style = StyleState::default();
    let mut open = false;
    let mut line = String::new();
    let mut used: u16 = 0;
    let mut emitted_any = false;

    let chars: Vec<char> = raw.chars().collect();
    let mut pos = 0usize;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch == '<' {
            if let Some(close) = chars[pos + 1..].iter().position(|&c| c == '>') {
                let body: String = chars[pos + 1..pos + 1 + close].iter().collect();
                pos += close + 2;
                let mut next = style;
                if next.apply_tag(&body) && next != style {
                    if open {
                        line.push_str(ansi::RESET);
                        open = false;
                    }
                    style = next;
                    if !style.is_plain() {
                        style.push_codes(&mut line);
                        open = true;
                        emitted_any = true;
                    }
                }
                continue;
            }
            // No closing bracket on this line, treat as literal.
        }

        let (text_ch, advance) = if ch == '&' {
            decode_entity(&chars[pos..])
        } else {
            (ch, 1)
        };
        pos += advance;

        let w = text_ch.width().unwrap_or(0) as u16;
        if w > width {
            continue;
        }
        if used + w > width {
            if open {
                line.push_str(ansi::RESET);
            }
            out.push(std::mem::take(&mut line));
            used = 0;
            if open {
                style.push_codes(&mut line);
            }
        }
        line.push(text_ch);
        used += w;
    }

    if open {
        line.push_str(ansi::RESET);
    }
    if !line.is_empty() || !emitted_any || out.is_empty() {
        out.push(line);
    }
}

fn decode_entity(rest: &[char]) -> (char, usize) {
    const ENTITIES: [(&str, char); 3] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>')];
    for (name, decoded) in ENTITIES {
        let len = name.chars().count();
        if rest.len() >= len && rest[..len].iter().collect::<String>() == name {
            return (decoded, len);
        }
    }
    ('&', 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_width;

    fn visible(lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| {
                String::from_utf8_lossy(&strip_ansi_escapes::strip(line)).into_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn escaped_placeholders_render_literally() {
        let raw = "oci compute instance launch --image-id <image_ocid>";
        let lines = project(&escape_text(raw), 80);
        assert_eq!(visible(&lines), raw);
    }

    #[test]
    fn unescaped_angle_runs_are_consumed() {
        let lines = project("oci compute instance launch --image-id <image_ocid>", 80);
        assert_eq!(visible(&lines), "oci compute instance launch --image-id ");
    }

    #[test]
    fn escape_handles_ampersand_first() {
        assert_eq!(escape_text("a & b &lt;"), "a &amp; b &amp;lt;");
        let lines = project(&escape_text("a & b &lt;"), 80);
        assert_eq!(visible(&lines), "a & b &lt;");
    }

    #[test]
    fn bold_tag_styles_and_resets() {
        let lines = project("<b>Step 1.</b> Open the console", 80);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(ansi::BOLD));
        assert!(lines[0].contains(ansi::RESET));
        assert_eq!(visible(&lines), "Step 1. Open the console");
    }

    #[test]
    fn unknown_tags_vanish_like_markup() {
        let lines = project("press <button>Copy</button> to copy", 80);
        assert_eq!(visible(&lines), "press Copy to copy");
    }

    #[test]
    fn dangling_bracket_is_literal() {
        let lines = project("10 < 16 CIDR bits", 80);
        assert_eq!(visible(&lines), "10 < 16 CIDR bits");
    }

    #[test]
    fn wrapped_styled_text_reopens_style() {
        let lines = project("<rev>provisioning link</rev>", 8);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with(ansi::REVERSE));
            assert!(line.ends_with(ansi::RESET));
            assert!(display_width(line) <= 8);
        }
        assert_eq!(visible(&lines).replace('\n', ""), "provisioning link");
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines = project("a\n\nb", 10);
        assert_eq!(visible(&lines), "a\n\nb");
    }

    #[test]
    fn style_does_not_leak_across_lines() {
        let lines = project("<b>head\ntail", 10);
        assert!(lines[0].contains(ansi::BOLD));
        assert!(!lines[1].contains(ansi::BOLD));
        assert_eq!(visible(&lines), "head\ntail");
    }
}
