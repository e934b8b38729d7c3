use std::fmt;
use std::future::Future;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::sleep;

/// A deferred action owned by a page element.
///
/// Dropping the task cancels it, so an element that leaves the page takes its
/// pending timer with it.
pub struct ScheduledTask {
    handle: Option<AbortHandle>,
}

impl ScheduledTask {
    /// Runs `action` after `delay` on the current tokio runtime.
    pub fn spawn<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            action.await;
        })
        .abort_handle();

        Self { handle: Some(handle) }
    }

    /// Lets the task run to completion even after this value is dropped.
    /// Used by the task itself once it has fired.
    pub fn disarm(mut self) {
        self.handle.take();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(AbortHandle::is_finished)
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let task = ScheduledTask::spawn(Duration::from_millis(500), async move {
            flag.store(true, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(499)).await;
        assert!(!fired.load(Ordering::SeqCst));

        sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
        drop(task);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let task = ScheduledTask::spawn(Duration::from_millis(500), async move {
            flag.store(true, Ordering::SeqCst);
        });

        drop(task);
        sleep(Duration::from_secs(1)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
