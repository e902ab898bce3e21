use crate::data::{Board, RemoteState};
use crate::tui::ui::Theme;
use crate::tui::Message;

/// Effect requested by `App::update`, carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// Start the background board load
    LoadBoard,
    /// Stop the event loop
    Quit,
}

/// Whole application state.
///
/// `update` consumes the current state and returns its successor, so the
/// event loop always holds exactly one value.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub owner: String,
    pub project_number: u32,
    pub board: RemoteState<Board>,
    pub width: u16,
    pub height: u16,
    pub theme: Theme,
}

impl App {
    pub fn new(owner: impl Into<String>, project_number: u32, width: u16, height: u16) -> Self {
        Self {
            owner: owner.into(),
            project_number,
            board: RemoteState::NotAsked,
            width,
            height,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Process a message (Elm Architecture update function).
    pub fn update(self, msg: Message) -> (Self, Command) {
        match msg {
            // One episode per process; an outcome is never reopened.
            Message::Init if self.board != RemoteState::NotAsked => (self, Command::None),
            Message::Init => {
                tracing::debug!(
                    owner = %self.owner,
                    project = self.project_number,
                    "Requesting board load"
                );
                (
                    Self {
                        board: RemoteState::Loading,
                        ..self
                    },
                    Command::LoadBoard,
                )
            }
            Message::BoardLoaded(result) => {
                let board = RemoteState::from_result(result);
                tracing::debug!(
                    from = self.board.label(),
                    to = board.label(),
                    items = board.as_success().map_or(0, Board::item_count),
                    "Board state"
                );
                (Self { board, ..self }, Command::None)
            }
            Message::Resize { width, height } => (
                Self {
                    width,
                    height,
                    ..self
                },
                Command::None,
            ),
            Message::Quit => {
                if !self.board.is_terminal() {
                    tracing::debug!(state = self.board.label(), "Quit before the load finished");
                }
                (self, Command::Quit)
            }
            Message::None => (self, Command::None),
        }
    }

    /// Render the current state as text.
    pub fn view(&self) -> String {
        super::ui::render_to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("octo", 1, 80, 24)
    }

    #[test]
    fn test_init_moves_to_loading() {
        let (app, cmd) = app().update(Message::Init);
        assert_eq!(app.board, RemoteState::Loading);
        assert_eq!(cmd, Command::LoadBoard);
    }

    #[test]
    fn test_second_init_does_not_reload() {
        let (app, _) = app().update(Message::Init);
        let (app, cmd) = app.update(Message::Init);
        assert_eq!(app.board, RemoteState::Loading);
        assert_eq!(cmd, Command::None);
    }

    #[test]
    fn test_quit_keeps_state() {
        let (app, cmd) = app().update(Message::Quit);
        assert_eq!(cmd, Command::Quit);
        assert_eq!(app.board, RemoteState::NotAsked);
    }
}
