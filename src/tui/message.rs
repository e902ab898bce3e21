//! Message enum for Elm Architecture (TEA) pattern.
//!
//! Every event the app reacts to is a message: lifecycle, load completion,
//! terminal resize and key input.

use crate::data::Board;

/// All events processed by `App::update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────────────────────
    // App lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Process start; requests the board load
    Init,
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Background load
    // ─────────────────────────────────────────────────────────────────────────
    /// The board load finished, with the board or an error message
    BoardLoaded(Result<Board, String>),

    // ─────────────────────────────────────────────────────────────────────────
    // Terminal
    // ─────────────────────────────────────────────────────────────────────────
    /// Terminal size changed
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────────────────────
    // No-op
    // ─────────────────────────────────────────────────────────────────────────
    /// No operation (for unhandled keys)
    None,
}
