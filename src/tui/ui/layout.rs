//! Layout calculations and text utilities for the TUI.

use ratatui::{buffer::Buffer, layout::Rect};
use unicode_width::UnicodeWidthStr;

/// Split `area` into `count` equal-width columns, left to right.
///
/// Each column gets `area.width / count` cells; the remainder is left
/// unused on the right edge.
pub fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let width = (area.width as usize / count) as u16;
    (0..count)
        .map(|i| Rect {
            x: area.x.saturating_add(width.saturating_mul(i as u16)),
            y: area.y,
            width,
            height: area.height,
        })
        .collect()
}

/// Convert a buffer to text.
///
/// Trailing spaces on each row and trailing blank rows are dropped. Wide
/// glyphs occupy two cells but are emitted once.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines: Vec<String> = Vec::with_capacity(area.height as usize);

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            line.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_areas_even_split() {
        let areas = column_areas(Rect::new(0, 0, 90, 10), 3);
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().all(|a| a.width == 30 && a.height == 10));
        assert_eq!(areas[2].x, 60);
    }

    #[test]
    fn test_column_areas_remainder_unused() {
        let areas = column_areas(Rect::new(0, 0, 100, 5), 3);
        assert!(areas.iter().all(|a| a.width == 33));
        assert_eq!(areas[2].right(), 99);
    }

    #[test]
    fn test_column_areas_more_columns_than_cells() {
        let areas = column_areas(Rect::new(0, 0, 2, 5), 4);
        assert_eq!(areas.len(), 4);
        assert!(areas.iter().all(|a| a.width == 0));
    }

    #[test]
    fn test_column_areas_none() {
        assert!(column_areas(Rect::new(0, 0, 80, 24), 0).is_empty());
    }

    #[test]
    fn test_buffer_to_string_trims() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        buf.set_string(0, 0, "hi", ratatui::style::Style::default());
        assert_eq!(buffer_to_string(&buf), "hi");
    }

    #[test]
    fn test_buffer_to_string_wide_glyph() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        buf.set_string(0, 0, "日本x", ratatui::style::Style::default());
        assert_eq!(buffer_to_string(&buf), "日本x");
    }
}
