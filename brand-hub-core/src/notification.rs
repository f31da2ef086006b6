//! Transient status notifications
//!
//! A single slot holds the visible message. Each `notify` replaces it and schedules a clear
//! after the TTL; a newer message invalidates every older pending clear.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Default visibility window
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Notification severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    /// Operation applied in memory but something degraded (e.g. write failed)
    Warning,
}

/// Status message shown after a mutation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Single-slot, self-clearing notification channel
pub struct NotificationChannel {
    ttl: Duration,
    generation: Arc<AtomicU64>,
    slot: Arc<watch::Sender<Option<Notification>>>,
}

impl NotificationChannel {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            ttl,
            generation: Arc::new(AtomicU64::new(0)),
            slot: Arc::new(slot),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Shows a success message.
    pub fn notify(&self, message: impl Into<String>) {
        self.emit(Notification::success(message));
    }

    /// Shows a warning message.
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Notification::warning(message));
    }

    /// Replaces the visible notification and restarts the expiry delay.
    pub fn emit(&self, notification: Notification) {
        let mut generation = 0;
        self.slot.send_modify(|current| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *current = Some(notification);
        });

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::debug!("No tokio runtime, notification will stay until replaced");
            return;
        };

        let ttl = self.ttl;
        let slot = Arc::clone(&self.slot);
        let latest = Arc::clone(&self.generation);
        runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            slot.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) == generation && current.is_some() {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        });
    }

    /// Currently visible notification
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    /// Receiver that observes every change, including clears.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.subscribe()
    }

    /// Hides the current notification immediately.
    pub fn dismiss(&self) {
        self.slot.send_modify(|current| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *current = None;
        });
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        // let the expiry task run if it became ready at the same instant
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn clears_after_ttl() {
        let channel = NotificationChannel::default();
        channel.notify("New brand created successfully!");
        assert_eq!(
            channel.current(),
            Some(Notification::success("New brand created successfully!"))
        );

        sleep_ms(2999).await;
        assert!(channel.current().is_some());

        sleep_ms(2).await;
        assert!(channel.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn second_notify_replaces_and_restarts_delay() {
        let channel = NotificationChannel::default();
        channel.notify("first");
        sleep_ms(1000).await;

        channel.notify("second");
        assert_eq!(channel.current().unwrap().message, "second");

        // first message's timer fires here and must not clear the second
        sleep_ms(2500).await;
        assert_eq!(channel.current().unwrap().message, "second");

        // t0_second + 2999
        sleep_ms(499).await;
        assert_eq!(channel.current().unwrap().message, "second");

        sleep_ms(2).await;
        assert!(channel.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_clear() {
        let channel = NotificationChannel::new(Duration::from_millis(100));
        let mut rx = channel.subscribe();
        channel.warn("write failed");

        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|n| n.level),
            Some(NotificationLevel::Warning)
        );

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_hides_immediately() {
        let channel = NotificationChannel::default();
        channel.notify("hosting deleted.");
        channel.dismiss();
        assert!(channel.current().is_none());
    }

    #[test]
    fn works_without_runtime() {
        let channel = NotificationChannel::default();
        channel.notify("no runtime");
        assert_eq!(channel.current().unwrap().message, "no runtime");
    }
}
