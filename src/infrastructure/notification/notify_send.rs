//! notify-send notification adapter (Linux desktops)

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationError, Notice, Notifier};

const APP_NAME: &str = "EmbedHarvest";

/// Shells out to `notify-send`
#[derive(Debug, Default)]
pub struct NotifySendNotifier;

impl NotifySendNotifier {
    pub fn new() -> Self {
        Self
    }

    fn args(notice: &Notice) -> Vec<String> {
        let urgency = if notice.icon.is_urgent() {
            "critical"
        } else {
            "normal"
        };
        vec![
            "--app-name".to_string(),
            APP_NAME.to_string(),
            "--icon".to_string(),
            notice.icon.icon_name().to_string(),
            "--urgency".to_string(),
            urgency.to_string(),
            notice.summary.clone(),
            notice.body.clone(),
        ]
    }
}

#[async_trait]
impl Notifier for NotifySendNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .args(Self::args(notice))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => NotificationError::NotifySendNotFound,
                _ => NotificationError::SendFailed(e.to_string()),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                status
            )))
        }
    }
}
