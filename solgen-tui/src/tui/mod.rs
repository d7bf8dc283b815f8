use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use solgen::{AppConfig, GeneratorClient};
use std::io;
use std::sync::Arc;
use tracing::info;

use clipboard::SystemClipboard;

mod app;
mod clipboard;
mod event;
mod screens;
mod theme;
mod ui;
pub mod widgets;

pub use app::App;
pub use event::EventHandler;

/// Run the TUI application
pub async fn run_tui(config: AppConfig) -> Result<()> {
    let client = Arc::new(GeneratorClient::new(&config.generator)?);
    info!(url = client.url(), "Using generation endpoint");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(config.feedback.toast_ttl(), client, Box::new(SystemClipboard));
    let res = run_app(&mut terminal, &mut app).await;
    app.session.clear();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut event_handler = EventHandler::new();
    app.set_sender(event_handler.sender());

    loop {
        // Draw the current state
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events
        if let Some(event) = event_handler.next().await {
            if !app.handle_event(event) {
                break; // Exit on quit
            }
        }
    }

    Ok(())
}
