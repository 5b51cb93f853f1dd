//! Headless mode runner - main event loop without TUI
//!
//! Reads commands from stdin on a blocking thread, runs them through the
//! same message pipeline as the TUI and re-emits the projection after each.

use std::io::{self, BufRead, Write};

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use shelf_app::config::Settings;
use shelf_app::shutdown::spawn_quit_listener;
use shelf_app::{process_message, AppState, Message};
use shelf_core::{Catalog, FilterState, Result};

use super::{parse_command, projection_events, HeadlessEvent};

/// Run in headless mode - output NDJSON events instead of TUI
///
/// `initial` seeds the first projection (from `--filter` / `--in-stock`).
pub async fn run_headless(catalog: Catalog, settings: Settings, initial: FilterState) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Shelf starting in HEADLESS mode");
    info!("Catalog: {} products", catalog.len());
    info!("═══════════════════════════════════════════════════════");

    let mut state = AppState::with_catalog(catalog, settings);
    seed_filter(&mut state, initial);

    let mut stdout = io::stdout();
    write_projection(&state, &mut stdout)?;
    stdout.flush()?;

    // Blocking stdin reader; dropping the sender on EOF closes the channel
    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(line_tx);
    });

    let mut quit_rx = spawn_quit_listener();

    while !state.should_quit() {
        tokio::select! {
            line = line_rx.recv() => match line {
                Some(line) => handle_line(&mut state, &line, &mut stdout)?,
                None => {
                    info!("Stdin closed");
                    process_message(&mut state, Message::Quit);
                }
            },
            Some(msg) = quit_rx.recv() => {
                process_message(&mut state, msg);
            }
        }
    }

    info!("Shelf headless mode exiting");
    Ok(())
}

/// Apply the initial filter through the regular message path
fn seed_filter(state: &mut AppState, initial: FilterState) {
    if initial.is_identity() {
        return;
    }
    debug!("Initial filter: {:?}", initial);
    if !initial.filter_text.is_empty() {
        process_message(state, Message::FilterTextChanged(initial.filter_text));
    }
    if initial.in_stock_only {
        process_message(state, Message::InStockOnlyChanged(true));
    }
}

/// Write the current projection as NDJSON
pub fn write_projection<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    for event in projection_events(state) {
        event.write_to(out)?;
    }
    Ok(())
}

/// Handle one stdin line: run the command and re-emit, or report an error
pub fn handle_line<W: Write>(state: &mut AppState, line: &str, out: &mut W) -> Result<()> {
    match parse_command(line) {
        Ok(Some(message)) => {
            debug!("Stdin command: {:?}", message);
            process_message(state, message);
            if !state.should_quit() {
                write_projection(state, out)?;
            }
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Rejected stdin line {:?}: {}", line, e);
            HeadlessEvent::error(e.to_string()).write_to(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Forward stdin lines to the event loop (blocking version)
fn spawn_stdin_reader_blocking(line_tx: mpsc::Sender<String>) {
    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                if line_tx.blocking_send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
