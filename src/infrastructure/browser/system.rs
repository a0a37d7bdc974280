//! System browser adapter
//!
//! Hands the URL to the platform opener: xdg-open on Linux/BSD,
//! open on macOS, start on Windows.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{Browser, BrowserError};

/// Opens URLs in the user's default browser
pub struct SystemBrowser {
    program: String,
    leading_args: Vec<String>,
}

impl SystemBrowser {
    /// Create an adapter using the platform opener
    pub fn new() -> Self {
        let (program, leading_args) = if cfg!(target_os = "macos") {
            ("open", vec![])
        } else if cfg!(windows) {
            ("cmd", vec!["/C", "start", ""])
        } else {
            ("xdg-open", vec![])
        };

        Self {
            program: program.to_string(),
            leading_args: leading_args.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create with a custom opener program (e.g. "firefox")
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    fn command(&self, url: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Browser for SystemBrowser {
    /// Launch the opener and return once it is running.
    ///
    /// Some openers stay in the foreground until the browser closes, so the
    /// exit status is only collected in the background.
    async fn open(&self, url: &str) -> Result<(), BrowserError> {
        let mut child = self.command(url).spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BrowserError::OpenerNotFound(self.program.clone())
            } else {
                BrowserError::OpenFailed(e.to_string())
            }
        })?;

        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!(%program, %status, "browser opener exited with failure");
                }
                Ok(_) => {}
                Err(e) => tracing::debug!(%program, error = %e, "failed to reap browser opener"),
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_opener_is_reported() {
        let browser = SystemBrowser::with_program("definitely-not-a-real-opener-4711");
        let err = browser.open("https://example.com").await.unwrap_err();
        assert!(matches!(err, BrowserError::OpenerNotFound(p) if p.contains("4711")));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn long_running_opener_does_not_block() {
        let browser = SystemBrowser::with_program("sleep");
        let opened =
            tokio::time::timeout(std::time::Duration::from_secs(1), browser.open("5")).await;
        assert!(matches!(opened, Ok(Ok(()))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_opener_is_not_fatal() {
        let browser = SystemBrowser::with_program("false");
        assert!(browser.open("https://example.com").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_opener() {
        let browser = SystemBrowser::with_program("true");
        assert!(browser.open("https://example.com").await.is_ok());
    }
}
