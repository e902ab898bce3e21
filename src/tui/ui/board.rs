//! Board rendering: columns side by side, item cards stacked inside.

use super::layout::column_areas;
use super::theme::Theme;
use crate::data::{Board, Column, Item};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};

/// Border, heading, body, border
pub const ITEM_HEIGHT: u16 = 4;

pub fn render_board(board: &Board, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let areas = column_areas(area, board.columns.len());
    for (column, column_area) in board.columns.iter().zip(areas) {
        render_column(column, theme, column_area, buf);
    }
}

fn render_column(column: &Column, theme: &Theme, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1))
        .title(Line::from(column.name.as_str()).bold());
    let inner = block.inner(area);
    block.render(area, buf);

    // Cards that do not fit entirely are left out.
    let mut y = inner.y;
    for item in &column.items {
        if y.saturating_add(ITEM_HEIGHT) > inner.bottom() {
            break;
        }
        render_item(
            item,
            Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: ITEM_HEIGHT,
            },
            buf,
        );
        y += ITEM_HEIGHT;
    }
}

fn render_item(item: &Item, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(item.heading()).bold(),
        Line::from(item.name.as_str()).fg(Color::Gray),
    ];

    Paragraph::new(lines)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
        .render(area, buf);
}
