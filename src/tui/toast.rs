use std::time::{Duration, Instant};

use crate::ops::notice::{Notice, Notifier};

/// How long a toast stays in the status row
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub at: Instant,
}

/// Transient notices shown in the status row, newest last
#[derive(Debug, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts::default()
    }

    /// The newest toast still within its display time
    pub fn current(&self) -> Option<&Toast> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<&Toast> {
        self.entries
            .last()
            .filter(|t| now.saturating_duration_since(t.at) < TOAST_TTL)
    }

    /// Drop expired toasts
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.entries
            .retain(|t| now.saturating_duration_since(t.at) < TOAST_TTL);
    }

    pub fn dismiss(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notice: &Notice) {
        tracing::info!(id = %notice.image_id(), "{}", notice.message());
        self.entries.push(Toast {
            notice: notice.clone(),
            at: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::image::ImageId;

    #[test]
    fn test_newest_toast_is_current() {
        let mut toasts = Toasts::new();
        assert!(toasts.current().is_none());
        toasts.notify(&Notice::ImageSaved(ImageId::from("1")));
        toasts.notify(&Notice::FavoriteAdded(ImageId::from("2")));
        assert_eq!(toasts.current().unwrap().notice.message(), "Added to favorites");
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_toast_expires() {
        let mut toasts = Toasts::new();
        toasts.notify(&Notice::ImageAdded(ImageId::from("1")));
        let later = Instant::now() + TOAST_TTL + Duration::from_millis(1);
        assert!(toasts.current_at(later).is_none());
        toasts.dismiss();
        assert!(toasts.is_empty());
    }
}
