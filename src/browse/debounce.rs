use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancellable delayed action.
///
/// Each call supersedes any pending prior action: the previous delayed task
/// is aborted before the new one is scheduled. Used to hold back search-term
/// commits until typing pauses, so the catalog is not queried per keystroke.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Debouncer tuned from the catalog config (300ms by default)
    pub fn from_config() -> Self {
        Self::new(Duration::from_millis(
            crate::config::config().catalog.search_debounce_ms,
        ))
    }

    /// Schedule `action` to run after the quiet period, cancelling any
    /// previously scheduled action that has not fired yet.
    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(prev) = self.pending.take() {
            prev.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Drop the pending action, if any, without running it
    pub fn cancel(&mut self) {
        if let Some(prev) = self.pending.take() {
            prev.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
