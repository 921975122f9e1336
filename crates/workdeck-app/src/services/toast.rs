//! Transient toast notifications

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use super::Notifier;

/// Toasts beyond this count push out the oldest one
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    pub created: Instant,
}

#[derive(Debug, Default)]
struct ToastInner {
    toasts: VecDeque<Toast>,
    next_id: u64,
}

/// Shared toast stack. The card pushes through [`Notifier`], the view reads
/// [`ToastQueue::visible`] and the tick handler calls [`ToastQueue::expire`].
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<ToastInner>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ToastInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn push(&self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.push_at(kind, text, Instant::now())
    }

    fn push_at(&self, kind: ToastKind, text: impl Into<String>, created: Instant) -> u64 {
        let mut inner = self.lock();
        inner.next_id = inner.next_id.wrapping_add(1);
        let id = inner.next_id;
        inner.toasts.push_back(Toast {
            id,
            kind,
            text: text.into(),
            created,
        });
        while inner.toasts.len() > MAX_VISIBLE_TOASTS {
            inner.toasts.pop_front();
        }
        id
    }

    /// Drop toasts older than `ttl`. Returns how many were removed.
    pub fn expire(&self, now: Instant, ttl: Duration) -> usize {
        let mut inner = self.lock();
        let before = inner.toasts.len();
        inner
            .toasts
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
        before - inner.toasts.len()
    }

    /// Oldest first
    pub fn visible(&self) -> Vec<Toast> {
        self.lock().toasts.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, kind: ToastKind, text: &str) {
        self.push(kind, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_pushes_toast() {
        let queue = ToastQueue::new();
        queue.notify(ToastKind::Error, "Failed to download workspace.");

        let visible = queue.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, ToastKind::Error);
        assert_eq!(visible[0].text, "Failed to download workspace.");
    }

    #[test]
    fn test_expire_removes_old_toasts() {
        let queue = ToastQueue::new();
        let start = Instant::now();
        queue.push_at(ToastKind::Info, "old", start);
        queue.push_at(ToastKind::Info, "new", start + Duration::from_secs(4));

        let removed = queue.expire(start + Duration::from_secs(5), Duration::from_secs(5));

        assert_eq!(removed, 1);
        assert_eq!(queue.visible()[0].text, "new");
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let queue = ToastQueue::new();
        for i in 0..(MAX_VISIBLE_TOASTS + 2) {
            queue.push(ToastKind::Info, format!("toast {i}"));
        }
        let visible = queue.visible();
        assert_eq!(visible.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(visible[0].text, "toast 2");
    }

    #[test]
    fn test_ids_are_unique() {
        let queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "a");
        let b = queue.push(ToastKind::Info, "b");
        assert_ne!(a, b);
    }
}
