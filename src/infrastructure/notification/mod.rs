//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or notify-send as fallback.

mod notify_rust;
mod notify_send;

pub use notify_rust::NotifyRustNotifier;
pub use notify_send::NotifySendNotifier;

use crate::application::ports::Notifier;

/// Create the notifier for the current platform.
///
/// Prefers notify-send on Linux when it is installed.
pub fn create_notifier() -> Box<dyn Notifier> {
    #[cfg(target_os = "linux")]
    {
        let has_notify_send = std::env::var_os("PATH")
            .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join("notify-send").is_file()))
            .unwrap_or(false);
        if has_notify_send {
            return Box::new(NotifySendNotifier::new());
        }
    }

    Box::new(NotifyRustNotifier::new())
}
