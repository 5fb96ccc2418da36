//! Terminal display width helpers.
//!
//! Provides ANSI-aware width calculation for rendered content so zone
//! padding and the lab catalog rail stay aligned.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Truncate `text` to at most `max_width` display cells, appending an
/// ellipsis when anything was cut.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let w = display_width(&ch.to_string());
        if width + w >= max_width {
            if width < max_width {
                result.push('…');
            }
            break;
        }
        width += w;
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi_sequences() {
        assert_eq!(display_width("\u{1b}[1mPlan\u{1b}[0m"), 4);
    }

    #[test]
    fn width_counts_checkbox_glyphs_as_one_cell() {
        assert_eq!(display_width("☑ done"), 6);
    }

    #[test]
    fn truncate_keeps_short_text_intact() {
        assert_eq!(truncate_display("Compute", 12), "Compute");
    }

    #[test]
    fn truncate_marks_cut_text() {
        let cut = truncate_display("Observability: Logs, Metrics, Alarms", 12);
        assert!(cut.ends_with('…'));
        assert!(display_width(&cut) <= 12);
    }
}
