//! Operator command reader
//!
//! Reads one command per line from stdin on a dedicated thread so a blocked
//! read never holds up shutdown of the async runtime.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

use crate::application::HarvestEvent;
use crate::domain::harvest::OperatorCommand;

use super::presenter::Presenter;

/// Spawn the stdin reader thread
pub fn spawn_command_reader(events: mpsc::Sender<HarvestEvent>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("operator-input".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            read_commands(stdin.lock(), &events, &Presenter::new());
        })
}

/// Forward parsed commands until input ends, `quit` is read, or the loop is gone.
pub fn read_commands<R: BufRead>(
    reader: R,
    events: &mpsc::Sender<HarvestEvent>,
    presenter: &Presenter,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(error = %e, "stdin read failed");
                break;
            }
        };

        let command = match line.parse::<OperatorCommand>() {
            Ok(command) => command,
            Err(e) => {
                presenter.warn(&e.to_string());
                continue;
            }
        };

        if events.blocking_send(HarvestEvent::Command(command)).is_err() {
            break;
        }
        if command == OperatorCommand::Quit {
            break;
        }
    }
    tracing::debug!("operator input closed");
}
