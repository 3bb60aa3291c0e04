use std::sync::atomic::{AtomicUsize, Ordering};

/// Aggregate load-progress tracker shared by every in-flight request.
///
/// Mirrors the start/progress/complete/error hooks a host typically wires to
/// a loading screen; here they land in the log.
#[derive(Debug, Default)]
pub struct LoadingManager {
    started: AtomicUsize,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

impl LoadingManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn item_started(&self, path: &std::path::Path) {
        let started = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        if started == self.completed.load(Ordering::SeqCst) + self.failed.load(Ordering::SeqCst) + 1
        {
            tracing::info!("loading started");
        }
        tracing::debug!(path = %path.display(), "loading item");
    }

    pub(crate) fn item_completed(&self, path: &std::path::Path) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(path = %path.display(), "loading in progress");
        if self.is_idle() {
            tracing::info!("loading finished");
        }
    }

    pub(crate) fn item_failed(&self, path: &std::path::Path) {
        self.failed.fetch_add(1, Ordering::SeqCst);
        tracing::warn!(path = %path.display(), "loading error");
    }

    /// True when every started load has finished one way or the other.
    pub fn is_idle(&self) -> bool {
        let done = self.completed.load(Ordering::SeqCst) + self.failed.load(Ordering::SeqCst);
        done == self.started.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn idle_after_all_items_settle() {
        let manager = LoadingManager::new();
        assert!(manager.is_idle());

        manager.item_started(Path::new("a.png"));
        manager.item_started(Path::new("b.png"));
        assert!(!manager.is_idle());

        manager.item_completed(Path::new("a.png"));
        manager.item_failed(Path::new("b.png"));
        assert!(manager.is_idle());
        assert_eq!(manager.started(), 2);
        assert_eq!(manager.failed(), 1);
    }
}
