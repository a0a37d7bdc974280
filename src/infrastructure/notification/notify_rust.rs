//! Desktop notices through notify-rust (Windows, macOS, Linux)

use async_trait::async_trait;
use notify_rust::{Notification, Timeout};
#[cfg(all(unix, not(target_os = "macos")))]
use notify_rust::Urgency;

use crate::application::ports::{NotificationError, Notice, Notifier};

const APP_NAME: &str = "EmbedHarvest";

/// Routine notices disappear on their own; urgent ones stay until dismissed
const ROUTINE_TIMEOUT_MS: u32 = 4000;

/// notify-rust adapter
#[derive(Debug, Default)]
pub struct NotifyRustNotifier;

impl NotifyRustNotifier {
    pub fn new() -> Self {
        Self
    }

    fn build(notice: &Notice) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(APP_NAME)
            .summary(&notice.summary)
            .body(&notice.body)
            .icon(notice.icon.icon_name());

        if notice.icon.is_urgent() {
            notification.timeout(Timeout::Never);
            #[cfg(all(unix, not(target_os = "macos")))]
            notification.urgency(Urgency::Critical);
        } else {
            notification.timeout(Timeout::Milliseconds(ROUTINE_TIMEOUT_MS));
        }
        notification
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotificationError> {
        let notification = Self::build(notice);

        // show() talks to the desktop bus synchronously
        tokio::task::spawn_blocking(move || {
            notification
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::SendFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }
}
