//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use shelf_app::config::Settings;
use shelf_app::shutdown::spawn_quit_listener;
use shelf_app::{process_message, AppState, Message};
use shelf_core::prelude::*;
use shelf_core::Catalog;

use super::{event, render, terminal};

/// Run the interactive widget over `catalog` until the user quits
///
/// `source` is the catalog file name shown in the header.
pub async fn run(catalog: Catalog, settings: Settings, source: Option<String>) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_catalog(catalog, settings);
    state.source = source;
    info!(
        "Starting TUI with {} products (icons={})",
        state.catalog().len(),
        state.settings.ui.icons
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let quit_rx = spawn_quit_listener();

    let result = run_loop(&mut term, &mut state, quit_rx);

    ratatui::restore();
    info!("TUI stopped");

    result
}

/// Main event loop
///
/// Draws once up front, then redraws after every processed message that
/// can change the screen.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut quit_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    terminal.draw(|frame| render::view(frame, state))?;

    while !state.should_quit() {
        let mut redraw = false;

        while let Ok(msg) = quit_rx.try_recv() {
            redraw |= handle_message(state, msg);
        }

        if let Some(message) = event::poll()? {
            redraw |= handle_message(state, message);
        }

        if redraw && !state.should_quit() {
            terminal.draw(|frame| render::view(frame, state))?;
        }
    }

    Ok(())
}

/// Process one message; returns whether the screen must be redrawn
fn handle_message(state: &mut AppState, message: Message) -> bool {
    if message == Message::Tick {
        return false;
    }
    process_message(state, message);
    true
}
