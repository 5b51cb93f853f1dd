//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! Both runners hold the receiver from [`spawn_quit_listener`]: the TUI
//! drains it between key polls, headless mode selects on it next to stdin.

use tokio::sync::mpsc;

use crate::message::Message;
use shelf_core::prelude::*;

/// OS request that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

impl From<ShutdownSignal> for Message {
    fn from(_: ShutdownSignal) -> Self {
        Message::Quit
    }
}

/// Listen for the first shutdown signal and deliver it as `Message::Quit`
///
/// At most one message is ever sent. The channel closes without a message
/// if the listener cannot be installed.
pub fn spawn_quit_listener() -> mpsc::Receiver<Message> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        match next_signal().await {
            Ok(signal) => {
                info!("Received {}, quitting", signal.name());
                let _ = tx.send(signal.into()).await;
            }
            Err(e) => error!("Quit listener unavailable: {}", e),
        }
    });
    rx
}

async fn next_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut interrupt = signal(SignalKind::interrupt())?;
        let mut terminate = signal(SignalKind::terminate())?;
        Ok(tokio::select! {
            _ = interrupt.recv() => ShutdownSignal::Interrupt,
            _ = terminate.recv() => ShutdownSignal::Terminate,
        })
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(ShutdownSignal::Interrupt)
    }
}
