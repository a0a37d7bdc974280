//! Clipboard poller
//!
//! Samples the clipboard at a fixed pace. The next read is scheduled only
//! after the previous one settled and its sample reached the harvest loop,
//! so reads never overlap.

use tokio::sync::mpsc;

use crate::domain::schedule::Interval;

use super::harvest::HarvestEvent;
use super::ports::Clipboard;

/// Sequential clipboard sampler
pub struct ClipboardPoller<C: Clipboard> {
    clipboard: C,
    interval: Interval,
}

impl<C: Clipboard> ClipboardPoller<C> {
    pub fn new(clipboard: C, interval: Interval) -> Self {
        Self {
            clipboard,
            interval,
        }
    }

    /// Read the clipboard once. Every failure is swallowed.
    pub async fn tick(&self) -> Option<String> {
        self.clipboard.read_text().await.ok()
    }

    /// Poll until the harvest loop goes away.
    pub async fn run(self, events: mpsc::Sender<HarvestEvent>) {
        loop {
            if let Some(text) = self.tick().await {
                if events.send(HarvestEvent::ClipboardSampled(text)).await.is_err() {
                    return;
                }
            }
            tokio::time::sleep(self.interval.as_std()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::ClipboardError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingClipboard;

    #[async_trait]
    impl Clipboard for FailingClipboard {
        async fn read_text(&self) -> Result<String, ClipboardError> {
            Err(ClipboardError::ClipboardUnavailable("denied".into()))
        }
    }

    /// Returns "value-<n>" and records how many reads are in flight.
    struct CountingClipboard {
        reads: AtomicUsize,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Clipboard for CountingClipboard {
        async fn read_text(&self) -> Result<String, ClipboardError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            let n = self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("value-{}", n))
        }
    }

    #[tokio::test]
    async fn read_failure_is_swallowed() {
        let poller = ClipboardPoller::new(FailingClipboard, Interval::from_millis(1));
        assert!(poller.tick().await.is_none());
    }

    #[tokio::test]
    async fn failing_clipboard_sends_nothing() {
        let poller = ClipboardPoller::new(FailingClipboard, Interval::from_millis(1));
        let (tx, mut rx) = mpsc::channel(4);
        let handle = tokio::spawn(poller.run(tx));

        let received =
            tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv()).await;
        assert!(received.is_err(), "no sample expected from a failing clipboard");
        handle.abort();
    }

    #[tokio::test]
    async fn reads_never_overlap() {
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let clipboard = CountingClipboard {
            reads: AtomicUsize::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::clone(&max_in_flight),
        };
        // Interval shorter than a read: a fixed-rate timer would overlap here.
        let poller = ClipboardPoller::new(clipboard, Interval::from_millis(1));
        let (tx, mut rx) = mpsc::channel(16);
        let handle = tokio::spawn(poller.run(tx));

        for n in 0..5 {
            match rx.recv().await {
                Some(HarvestEvent::ClipboardSampled(text)) => {
                    assert_eq!(text, format!("value-{}", n))
                }
                _ => panic!("expected a clipboard sample"),
            }
        }
        handle.abort();

        assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stops_when_receiver_dropped() {
        let clipboard = CountingClipboard {
            reads: AtomicUsize::new(0),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        };
        let poller = ClipboardPoller::new(clipboard, Interval::from_millis(1));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        tokio::time::timeout(std::time::Duration::from_secs(1), poller.run(tx))
            .await
            .expect("poller should stop once the loop is gone");
    }
}
