mod app;
pub mod input;
mod message;
pub mod ui;

use crate::config::Config;
use crate::integrations;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub use app::{App, Command};
pub use message::Message;

pub async fn run(config: Config, owner: String, project_number: u32) -> Result<()> {
    // Check if stdout is a terminal
    if !std::io::IsTerminal::is_terminal(&io::stdout()) {
        anyhow::bail!("workboard requires an interactive terminal");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let app = App::new(owner, project_number, size.width, size.height)
        .with_theme(ui::Theme::from_config(&config.ui));

    let result = run_app(&mut terminal, app, Arc::new(config)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Single event loop: every message is applied in order, then the screen is
/// redrawn from the resulting state.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    config: Arc<Config>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let (tx, mut rx) = mpsc::channel::<Message>(4);
    let mut queue = VecDeque::from([Message::Init]);

    loop {
        while let Some(msg) = queue.pop_front() {
            let (next, command) = app.update(msg);
            app = next;

            match command {
                Command::None => {}
                Command::LoadBoard => integrations::spawn_load(
                    Arc::clone(&config),
                    app.owner.clone(),
                    app.project_number,
                    tx.clone(),
                ),
                Command::Quit => return Ok(()),
            }
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => queue.push_back(input::dispatch(key)),
                Event::Resize(width, height) => {
                    queue.push_back(Message::Resize { width, height })
                }
                _ => {}
            }
        }

        // Background load results (non-blocking)
        while let Ok(msg) = rx.try_recv() {
            queue.push_back(msg);
        }
    }
}
