use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of a string in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to `max_cells` terminal cells, ending in `…` when anything was dropped.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    match max_cells {
        0 => String::new(),
        1 => "\u{2026}".to_string(),
        _ => {
            let mut out = take_width(s, max_cells - 1).to_string();
            out.push('\u{2026}');
            out
        }
    }
}

/// Right-pad with spaces to exactly `cells` wide (truncating first if needed)
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    out.extend(std::iter::repeat_n(' ', cells.saturating_sub(w)));
    out
}

/// Word-wrap `s` into lines of at most `cells` cells. Words wider than a
/// line are split on grapheme boundaries.
pub fn wrap_to_width(s: &str, cells: usize) -> Vec<String> {
    if cells == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in s.split_whitespace() {
        let mut word = word;
        loop {
            let sep = usize::from(!line.is_empty());
            if display_width(&line) + sep + display_width(word) <= cells {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            // Word alone is too wide: hard-split it
            let head = take_width(word, cells);
            let head = if head.is_empty() { grapheme_at(word, 0) } else { head };
            lines.push(head.to_string());
            word = &word[head.len()..];
            if word.is_empty() {
                break;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Next grapheme boundary after `byte_offset`, or None at the end
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let g = grapheme_at(s, byte_offset);
    Some(byte_offset + g.len())
}

/// Previous grapheme boundary before `byte_offset`, or None at the start
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// The grapheme cluster starting at `byte_offset`
fn grapheme_at(s: &str, byte_offset: usize) -> &str {
    s.get(byte_offset..)
        .and_then(|rest| rest.graphemes(true).next())
        .unwrap_or("")
}

/// Longest prefix of `s` that fits in `cells`, on a grapheme boundary
fn take_width(s: &str, cells: usize) -> &str {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        let gw = UnicodeWidthStr::width(g);
        if width + gw > cells {
            return &s[..i];
        }
        width += gw;
    }
    s
}
