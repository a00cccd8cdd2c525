use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const TOAST_TTL: Duration = Duration::from_secs(4);
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

/// Shared toast queue. Callbacks hold a clone and push into it; the view
/// drains expired entries every tick.
#[derive(Clone, Default)]
pub struct Toaster {
    toasts: Rc<RefCell<VecDeque<Toast>>>,
}

impl Toaster {
    pub fn push(&self, message: impl Into<String>) {
        self.push_kind(ToastKind::Info, message.into(), Instant::now());
    }

    pub fn push_error(&self, message: impl Into<String>) {
        self.push_kind(ToastKind::Error, message.into(), Instant::now());
    }

    fn push_kind(&self, kind: ToastKind, message: String, created_at: Instant) {
        tracing::info!(?kind, %message, "toast");
        self.toasts.borrow_mut().push_back(Toast {
            kind,
            message,
            created_at,
        });
    }

    pub fn prune(&self, now: Instant) -> bool {
        let mut toasts = self.toasts.borrow_mut();
        let before = toasts.len();
        toasts.retain(|toast| now.saturating_duration_since(toast.created_at) < TOAST_TTL);
        toasts.len() != before
    }

    /// Newest last, at most [`MAX_VISIBLE_TOASTS`].
    pub fn visible(&self) -> Vec<Toast> {
        let toasts = self.toasts.borrow();
        let skip = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
        toasts.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ToastKind, Toaster, TOAST_TTL};
    use std::time::{Duration, Instant};

    #[test]
    fn visible_keeps_three_newest() {
        let toaster = Toaster::default();
        for message in ["a", "b", "c", "d"] {
            toaster.push(message);
        }
        let visible: Vec<String> = toaster
            .visible()
            .into_iter()
            .map(|toast| toast.message)
            .collect();
        assert_eq!(visible, vec!["b", "c", "d"]);
        assert_eq!(toaster.len(), 4);
    }

    #[test]
    fn prune_drops_expired_toasts() {
        let toaster = Toaster::default();
        let start = Instant::now();
        toaster.push_kind(ToastKind::Info, "old".to_string(), start);
        toaster.push_kind(
            ToastKind::Error,
            "new".to_string(),
            start + Duration::from_secs(3),
        );

        assert!(toaster.prune(start + TOAST_TTL));
        let visible = toaster.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "new");
        assert_eq!(visible[0].kind, ToastKind::Error);
        assert!(!toaster.prune(start + TOAST_TTL));
    }
}
