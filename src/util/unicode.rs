use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells taken by `s`
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells`, ending in `…` when something was dropped.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..).filter(|r| !r.is_empty())?;
    let first = rest.graphemes(true).next().map_or(rest.len(), str::len);
    Some(offset + first)
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    let head = s.get(..offset)?;
    head.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Display column of the byte `offset` within `s`
pub fn byte_offset_to_display_col(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset of the first grapheme that starts at or after `col`.
/// A wide grapheme straddling `col` is skipped whole.
pub fn display_col_to_byte_offset(s: &str, col: usize) -> usize {
    let mut at = 0;
    for (i, g) in s.grapheme_indices(true) {
        if at >= col {
            return i;
        }
        at += display_width(g);
    }
    s.len()
}
