//! Signal handling for the harvest loop

use colored::Colorize;
use tokio::sync::mpsc;

use crate::application::HarvestEvent;

/// Start listening for SIGINT (and SIGTERM on Unix).
///
/// The first signal is forwarded as [`HarvestEvent::Shutdown`] so the loop
/// can save the captured list before exiting.
pub fn spawn_shutdown_listener(events: mpsc::Sender<HarvestEvent>) -> Result<(), std::io::Error> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let tx_term = events.clone();
        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
            let _ = tx_term.send(HarvestEvent::Shutdown).await;
        });
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("{} Received SIGINT (shutdown)", "↓".cyan());
            let _ = events.send(HarvestEvent::Shutdown).await;
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listener_installs_without_sending() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_shutdown_listener(tx).unwrap();
        assert!(rx.try_recv().is_err());
    }
}
