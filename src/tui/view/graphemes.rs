// module handling graphemes and their terminal cell widths
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

// Get visual width of string (accounts for wide characters like emojis)
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

// Cells taken by the first `column` graphemes of the line
pub fn cell_offset(line: &str, column: usize) -> usize {
    line.graphemes(true).take(column).map(visual_width).sum()
}

// Grapheme column whose cells cover `cell`, clamped to the end of the line
pub fn column_at_cell(line: &str, cell: usize) -> usize {
    let mut width = 0;
    for (column, grapheme) in line.graphemes(true).enumerate() {
        let next = width + visual_width(grapheme);
        if cell < next {
            return column;
        }
        width = next;
    }
    line.graphemes(true).count()
}

// Graphemes that fit in `max_width` cells
pub fn truncate_to_width(line: &str, max_width: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut width = 0;
    for grapheme in line.graphemes(true) {
        let g_width = visual_width(grapheme);
        if width + g_width > max_width {
            break;
        }
        out.push(grapheme);
        width += g_width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_offset_ascii() {
        assert_eq!(cell_offset("hello", 0), 0);
        assert_eq!(cell_offset("hello", 3), 3);
        assert_eq!(cell_offset("hello", 99), 5);
    }

    #[test]
    fn test_cell_offset_wide() {
        // each CJK char and the crab take two cells
        assert_eq!(cell_offset("日本a", 2), 4);
        assert_eq!(cell_offset("🦀x", 1), 2);
    }

    #[test]
    fn test_column_at_cell() {
        assert_eq!(column_at_cell("日本a", 0), 0);
        assert_eq!(column_at_cell("日本a", 1), 0);
        assert_eq!(column_at_cell("日本a", 2), 1);
        assert_eq!(column_at_cell("日本a", 4), 2);
        assert_eq!(column_at_cell("日本a", 40), 3);
    }

    #[test]
    fn test_truncate_keeps_whole_graphemes() {
        assert_eq!(truncate_to_width("ab日", 3), vec!["a", "b"]);
        assert_eq!(truncate_to_width("ab日", 4), vec!["a", "b", "日"]);
    }
}
