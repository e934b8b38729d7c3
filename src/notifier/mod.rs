pub mod banner;

use crate::dom::{ScheduledTask, SharedPage};
use crate::model::Severity;
use async_trait::async_trait;
use banner::{Banner, BannerId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_ALERT_DURATION: Duration = Duration::from_millis(4000);

/// Shared notification function used by the validator and the vehicle filter.
#[async_trait]
pub trait Alerts: Send + Sync {
    /// Shows `message`; `None` uses the sink's default duration.
    async fn show_alert(&self, severity: Severity, message: &str, duration: Option<Duration>);
}

/// Inserts alert banners at the top of the page body and removes them after
/// their duration, unless the user dismisses them first.
pub struct Notifier {
    page: SharedPage,
    default_duration: Duration,
    next_id: AtomicU64,
}

impl Notifier {
    pub fn new(page: SharedPage) -> Self {
        Self::with_default_duration(page, DEFAULT_ALERT_DURATION)
    }

    pub fn with_default_duration(page: SharedPage, default_duration: Duration) -> Self {
        Self {
            page,
            default_duration,
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn show(&self, severity: Severity, message: &str, duration: Option<Duration>) -> BannerId {
        let id = BannerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let duration = duration.unwrap_or(self.default_duration);
        info!("[{}] {}: {}", id, severity, message);

        let mut banner = Banner::new(id, severity, message);
        let page = self.page.clone();
        // Removal waits on the page lock, so it cannot run before the insert below.
        banner.schedule_removal(ScheduledTask::spawn(duration, async move {
            if let Some(mut removed) = page.lock().await.take_banner(id) {
                removed.disarm();
                debug!("[{}] auto-removed", id);
            }
        }));

        self.page.lock().await.prepend_banner(banner);
        id
    }

    /// Close button handler. Cancels the pending auto-removal.
    pub async fn dismiss(&self, id: BannerId) -> bool {
        match self.page.lock().await.take_banner(id) {
            Some(_) => {
                debug!("[{}] dismissed", id);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl Alerts for Notifier {
    async fn show_alert(&self, severity: Severity, message: &str, duration: Option<Duration>) {
        self.show(severity, message, duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Page;
    use tokio::time::sleep;

    async fn messages(page: &SharedPage) -> Vec<String> {
        page.lock()
            .await
            .banners()
            .iter()
            .map(|b| b.message().to_string())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn newest_banner_is_first_child() {
        let page = Page::new().shared();
        let notifier = Notifier::new(page.clone());

        notifier.show(Severity::Info, "first", None).await;
        notifier.show(Severity::Warning, "second", None).await;
        notifier.show(Severity::Info, "first", None).await;

        assert_eq!(messages(&page).await, vec!["first", "second", "first"]);
    }

    #[tokio::test(start_paused = true)]
    async fn removed_after_default_duration() {
        let page = Page::new().shared();
        let notifier = Notifier::new(page.clone());
        notifier.show(Severity::Success, "saved", None).await;

        sleep(Duration::from_millis(3990)).await;
        assert_eq!(messages(&page).await, vec!["saved"]);

        sleep(Duration::from_millis(20)).await;
        assert!(messages(&page).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_durations_expire_independently() {
        let page = Page::new().shared();
        let notifier = Notifier::new(page.clone());
        notifier.show(Severity::Info, "long", None).await;
        notifier.show(Severity::Info, "short", Some(Duration::from_millis(3000))).await;

        sleep(Duration::from_millis(3500)).await;
        assert_eq!(messages(&page).await, vec!["long"]);

        sleep(Duration::from_millis(1000)).await;
        assert!(messages(&page).await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_and_cancels() {
        let page = Page::new().shared();
        let notifier = Notifier::new(page.clone());
        let id = notifier.show(Severity::Error, "oops", None).await;

        assert!(notifier.dismiss(id).await);
        assert!(!notifier.dismiss(id).await);
        assert!(messages(&page).await.is_empty());

        sleep(Duration::from_millis(1000)).await;
        notifier.show(Severity::Info, "later", None).await;
        sleep(Duration::from_millis(3500)).await;
        assert_eq!(messages(&page).await, vec!["later"]);
    }
}
