//! Headless mode - NDJSON projection output, no TUI
//!
//! Emits the visible rows as newline-delimited JSON on stdout and reads
//! filter commands from stdin, one per line. Every command becomes the same
//! `Message` the TUI produces, so headless output matches what the table
//! would show.
//!
//! # Example Output
//!
//! ```json
//! {"event":"filter","filter_text":"pea","in_stock_only":true}
//! {"event":"category","name":"Vegetables"}
//! {"event":"product","name":"Peas","price":"$1","stocked":true}
//! {"event":"summary","products":1,"categories":1,"hidden":5}
//! ```
//!
//! # Commands
//!
//! - `text <value>`: replace the filter text (the value may be empty)
//! - `stock on|off|true|false`: set the in-stock-only flag
//! - `quit`: exit (EOF also exits)

pub mod runner;

use serde::Serialize;
use std::io::Write;

use shelf_app::{AppState, Message};
use shelf_core::{Error, ProjectionSummary, Result, Row};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Filter values the following rows were derived from
    Filter {
        filter_text: String,
        in_stock_only: bool,
    },

    /// Category header row
    Category { name: String },

    /// Product row
    Product {
        name: String,
        price: String,
        stocked: bool,
    },

    /// Counts for the projection just emitted
    Summary {
        products: usize,
        categories: usize,
        hidden: usize,
    },

    /// A stdin line could not be understood
    Error { message: String },
}

impl HeadlessEvent {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    fn from_row(row: &Row<'_>) -> Self {
        match row {
            Row::Category(name) => Self::Category {
                name: name.to_string(),
            },
            Row::Product(product) => Self::Product {
                name: product.name.clone(),
                price: product.price.clone(),
                stocked: product.stocked,
            },
        }
    }

    /// Write this event as one JSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Events describing the current projection: filter, rows, summary
pub fn projection_events(state: &AppState) -> Vec<HeadlessEvent> {
    let filter = state.filter();
    let rows = state.rows();
    let summary = ProjectionSummary::from_rows(&rows, state.catalog().len());

    let mut events = Vec::with_capacity(rows.len() + 2);
    events.push(HeadlessEvent::Filter {
        filter_text: filter.filter_text.clone(),
        in_stock_only: filter.in_stock_only,
    });
    events.extend(rows.iter().map(HeadlessEvent::from_row));
    events.push(HeadlessEvent::Summary {
        products: summary.products,
        categories: summary.categories,
        hidden: summary.hidden,
    });
    events
}

/// Parse one stdin line into the message it stands for
///
/// Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Message>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, Some(argument)),
        None => (line, None),
    };

    match command {
        "text" => Ok(Some(Message::FilterTextChanged(
            argument.unwrap_or_default().to_string(),
        ))),
        "stock" => match argument.map(str::trim) {
            Some("on" | "true") => Ok(Some(Message::InStockOnlyChanged(true))),
            Some("off" | "false") => Ok(Some(Message::InStockOnlyChanged(false))),
            Some(other) => Err(Error::command(format!(
                "stock expects on|off|true|false, got {:?}",
                other
            ))),
            None => Err(Error::command("stock expects on|off|true|false")),
        },
        "quit" if argument.map_or(true, |a| a.trim().is_empty()) => Ok(Some(Message::Quit)),
        _ => Err(Error::command(format!("unknown command {:?}", line.trim()))),
    }
}
