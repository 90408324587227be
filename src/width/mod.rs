//! Terminal display width helpers.
//!
//! Provides ANSI-aware width calculation and greedy word wrapping so layout
//! padding stays aligned regardless of embedded escape sequences.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    UnicodeWidthStr::width(&*clean_str)
}

/// Remove CSI escape sequences while keeping every other character, tabs
/// and newlines included.
///
/// A full VTE filter discards control bytes along with the escapes, which
/// would erase tabs before tab stops can be expanded. A bare escape is
/// dropped together with its introducer character.
pub fn strip_csi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        if chars.next() == Some('[') {
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }

    out
}

/// Display width of escape-free text with horizontal tabs expanded to the
/// next multiple of `tab_width`. Newlines reset the tab column and occupy no
/// cells themselves.
pub fn tabbed_width(text: &str, tab_width: usize) -> usize {
    let tab = tab_width.max(1);
    let mut total = 0usize;
    let mut column = 0usize;

    for ch in text.chars() {
        match ch {
            '\n' => column = 0,
            '\t' => {
                let advance = tab - column % tab;
                total += advance;
                column += advance;
            }
            _ => {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                total += w;
                column += w;
            }
        }
    }

    total
}

/// Greedy word wrap at `width` display columns.
///
/// Lines break at whitespace; a word wider than a whole line is broken
/// mid-word, never mid-character. Whitespace at break points is consumed.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_columns(text, width, width)
}

/// Word wrap where the first line has its own column budget.
///
/// Used by cell layout when the current output line is already partially
/// filled: the first wrapped line gets the leftover columns, every
/// continuation line gets the full cell width.
pub fn wrap_columns(text: &str, first: usize, rest: usize) -> Vec<String> {
    let rest = rest.max(1);
    let mut limit = first.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_width = UnicodeWidthStr::width(word);

        loop {
            let separator = if current.is_empty() { 0 } else { 1 };
            if current_width + separator + word_width <= limit {
                if separator == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += separator + word_width;
                break;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
                limit = rest;
                continue;
            }

            // Word wider than a whole line: break it at the column budget.
            let (head, tail) = split_at_width(word, limit);
            lines.push(head.to_string());
            limit = rest;
            word = tail;
            word_width = UnicodeWidthStr::width(word);
            if word.is_empty() {
                break;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split `text` at the widest char boundary whose prefix fits in `width`
/// columns. Always consumes at least one char so callers make progress.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut taken = 0usize;
    let mut boundary = 0usize;

    for (idx, ch) in text.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if boundary > 0 && taken + w > width {
            return (&text[..boundary], &text[boundary..]);
        }
        taken += w;
        boundary = idx + ch.len_utf8();
        if taken >= width {
            return (&text[..boundary], &text[boundary..]);
        }
    }

    (text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_basic() {
        let lines = wrap("hello world", 5);
        assert_eq!(lines, vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn wrap_packs_words_greedily() {
        let lines = wrap("one two three four", 9);
        assert_eq!(
            lines,
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
    }

    #[test]
    fn wrap_breaks_long_words() {
        let lines = wrap("abcdefgh xy", 4);
        assert_eq!(
            lines,
            vec!["abcd".to_string(), "efgh".to_string(), "xy".to_string()]
        );
    }

    #[test]
    fn wrap_columns_respects_first_line_budget() {
        let lines = wrap_columns("alpha beta gamma", 5, 11);
        assert_eq!(lines, vec!["alpha".to_string(), "beta gamma".to_string()]);
    }

    #[test]
    fn display_width_ignores_escape_sequences() {
        assert_eq!(display_width("\x1b[0;31;47mred\x1b[0m"), 3);
    }

    #[test]
    fn strip_csi_keeps_tabs_and_newlines() {
        assert_eq!(strip_csi("\x1b[0;31;40m\tx\n\x1b[0m"), "\tx\n");
        assert_eq!(strip_csi("\x1b[2J\x1b[;Hab"), "ab");
    }

    #[test]
    fn tabbed_width_expands_to_tab_stops() {
        assert_eq!(tabbed_width("\tx", 8), 9);
        assert_eq!(tabbed_width("abc\tx", 8), 9);
        assert_eq!(tabbed_width("a\nb", 8), 2);
    }
}
