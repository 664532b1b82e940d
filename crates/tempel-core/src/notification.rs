use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tempel_types::{Notification, NotificationKind};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::view::View;

/// Transient status line with a single auto-hide timer
///
/// Showing a message cancels the previous timer, so at most one dismissal is
/// ever pending. Must be used from within a tokio runtime.
pub struct NotificationService {
    view: View,
    duration: Duration,
    pending: Mutex<Option<CancellationToken>>,
    dismissed: Arc<AtomicUsize>,
}

impl NotificationService {
    pub fn new(view: View, duration: Duration) -> Self {
        Self {
            view,
            duration,
            pending: Mutex::new(None),
            dismissed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.show(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.show(message, NotificationKind::Error)
    }

    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> Uuid {
        let id = Uuid::new_v4();
        let message = message.into();
        tracing::debug!("[NOTIFY] {:?}: {}", kind, message);

        let token = CancellationToken::new();
        // Held until the message is shown; the pending timer belongs to it
        let mut pending = self.lock_pending();
        if let Some(previous) = pending.replace(token.clone()) {
            previous.cancel();
        }

        self.view.update(|state| {
            state.notification = Some(Notification {
                id,
                message,
                kind,
                visible: true,
            });
        });
        drop(pending);

        let view = self.view.clone();
        let duration = self.duration;
        let dismissed = self.dismissed.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(duration) => {
                    view.update(|state| {
                        if let Some(current) = state.notification.as_mut()
                            && current.id == id
                        {
                            current.visible = false;
                        }
                    });
                    dismissed.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        id
    }

    /// Drop the pending auto-hide, leaving the current message as it is
    pub fn cancel_pending(&self) {
        if let Some(token) = self.lock_pending().take() {
            token.cancel();
        }
    }

    /// Number of timers that ran to completion
    pub fn dismissed(&self) -> usize {
        self.dismissed.load(Ordering::SeqCst)
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
