//! OS signal handling for graceful shutdown

use tokio::sync::mpsc;

use crate::message::Message;
use phishguard_core::prelude::*;

/// Spawn a task that listens for OS signals and sends quit messages
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        info!("Shutdown signal received");
        let _ = tx.send(Message::Quit).await;
    });
}

/// Wait for a termination signal
async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
            }
        }

        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}
