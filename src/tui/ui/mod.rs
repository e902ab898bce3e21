//! TUI rendering module.
//!
//! Rendering is a pure function of `App`: it writes into a ratatui `Buffer`,
//! which the event loop hands to the terminal and tests turn into text.
//!
//! - `layout` - column geometry and buffer-to-text conversion
//! - `board` - column and item card widgets
//! - `theme` - colours taken from the `[ui]` config section

mod board;
pub mod layout;
pub mod theme;

use crate::data::Board;
use crate::tui::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
    Frame,
};

pub use layout::{buffer_to_string, column_areas};
pub use theme::Theme;

pub const LOADING_TEXT: &str = "Loading...";
pub const FAILURE_PREFIX: &str = "Uh oh ya done goofed because:";

/// What the current board state turns into on screen
enum Screen<'a> {
    Blank,
    Text(String),
    Board(&'a Board),
}

/// Render the whole app into `area`, clipped to the app's known size.
pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    let area = Rect {
        width: area.width.min(app.width),
        height: area.height.min(app.height),
        ..area
    };

    let screen = app.board.fold(
        || Screen::Blank,
        || Screen::Text(LOADING_TEXT.to_string()),
        |error| Screen::Text(format!("{} {}", FAILURE_PREFIX, error)),
        Screen::Board,
    );

    match screen {
        Screen::Blank => {}
        // One line, clipped at the right edge like any other overflow.
        Screen::Text(text) => Paragraph::new(text).render(area, buf),
        Screen::Board(board) => board::render_board(board, &app.theme, area, buf),
    }
}

/// Main draw function - renders the entire TUI.
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    render(app, area, f.buffer_mut());
}

/// Render the app at its current width and height, as plain text.
pub fn render_to_string(app: &App) -> String {
    let area = Rect::new(0, 0, app.width, app.height);
    let mut buf = Buffer::empty(area);
    render(app, area, &mut buf);
    buffer_to_string(&buf)
}
