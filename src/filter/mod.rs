// Vehicle filter: derives the visible card set from an immutable snapshot.

pub mod criteria;

pub use criteria::{FilterCriteria, PriceBracket};

use crate::dom::{Page, ScheduledTask, SharedPage, ids};
use crate::model::{Severity, Vehicle};
use crate::notifier::Alerts;
use crate::storage::{LocalStorage, SqliteStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Storage key holding the last applied `FilterCriteria`.
pub const FILTERS_KEY: &str = "vehicleFilters";
pub const HIGHLIGHT_SHADOW: &str = "0 0 20px rgba(0,123,255,0.5)";
pub const RESET_NOTICE: &str = "Filters have been reset";
pub const UNKNOWN_CAR_NOTICE: &str = "Unable to determine car to book";
pub const NOT_FOUND_NOTICE: &str = "Vehicle not found";
const RESULT_COUNT_STYLE: &str = "text-align: center; color: #666; margin: 10px 0;";

#[derive(Debug, Clone)]
pub struct FilterSettings {
    pub booking_path: String,
    pub notice_duration: Duration,
    pub highlight_duration: Duration,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            booking_path: "/bill".into(),
            notice_duration: Duration::from_millis(3000),
            highlight_duration: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// The container shows the whole snapshot.
    Unfiltered,
    /// The container shows a subset derived from the snapshot.
    Filtered,
}

pub fn result_count_text(count: usize) -> String {
    format!("Showing {} vehicle{}", count, if count == 1 { "" } else { "s" })
}

/// Creates the counter above the container on first use, then updates it.
fn display_result_count(page: &mut Page, count: usize) {
    if page.element(ids::RESULT_COUNT).is_none() {
        if page.container().is_none() {
            debug!("No vehicle container, result count skipped");
            return;
        }
        page.insert_element(ids::RESULT_COUNT)
            .attributes
            .insert("style".into(), RESULT_COUNT_STYLE.into());
    }
    if let Some(counter) = page.element_mut(ids::RESULT_COUNT) {
        counter.text = result_count_text(count);
    }
}

async fn revert_highlight(page: SharedPage, generation: u64, index: usize) {
    let mut page = page.lock().await;
    let Some(container) = page.container_mut() else {
        return;
    };
    if container.generation() != generation {
        return;
    }
    if let Some(card) = container.cards_mut().get_mut(index) {
        card.box_shadow.clear();
        if let Some(task) = card.revert.take() {
            task.disarm();
        }
    }
}

pub struct VehicleFilter {
    snapshot: Arc<[Vehicle]>,
    state: FilterState,
    page: SharedPage,
    alerts: Arc<dyn Alerts>,
    settings: FilterSettings,
    storage: Option<LocalStorage<SqliteStore>>,
}

impl VehicleFilter {
    /// `snapshot` is the reset baseline; it is never modified afterwards.
    pub fn new(
        page: SharedPage,
        snapshot: Vec<Vehicle>,
        alerts: Arc<dyn Alerts>,
        settings: FilterSettings,
    ) -> Self {
        info!("Vehicle filtering initialized with {} vehicles", snapshot.len());
        Self {
            snapshot: snapshot.into(),
            state: FilterState::Unfiltered,
            page,
            alerts,
            settings,
            storage: None,
        }
    }

    /// Persists applied criteria under `FILTERS_KEY` and clears them on reset.
    pub fn with_storage(mut self, storage: LocalStorage<SqliteStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn snapshot(&self) -> &[Vehicle] {
        &self.snapshot
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Snapshot entries matching `criteria`, in snapshot order.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<Vehicle> {
        self.snapshot
            .iter()
            .filter(|v| criteria.matches(v))
            .cloned()
            .collect()
    }

    /// Change handler for the price, type and search controls.
    pub async fn apply_filters(&mut self) -> usize {
        let criteria = FilterCriteria::from_controls(&*self.page.lock().await);
        self.apply(&criteria).await
    }

    pub async fn apply(&mut self, criteria: &FilterCriteria) -> usize {
        let matches = self.filtered(criteria);

        {
            let mut page = self.page.lock().await;
            if let Some(container) = page.container_mut() {
                container.render_results(&matches);
            }
            display_result_count(&mut page, matches.len());
        }
        self.state = FilterState::Filtered;

        if let Some(storage) = self.storage.as_mut() {
            if !storage.save(FILTERS_KEY, criteria) {
                warn!("Filter state not persisted");
            }
        }

        info!(
            "Filter {:?} matched {}/{} vehicles",
            criteria,
            matches.len(),
            self.snapshot.len()
        );
        matches.len()
    }

    /// Clears the controls and shows the full snapshot again.
    pub async fn reset_filters(&mut self) {
        {
            let mut page = self.page.lock().await;
            page.set_value(ids::PRICE_FILTER, PriceBracket::All.as_control());
            page.set_value(ids::TYPE_FILTER, "");
            page.set_value(ids::VEHICLE_SEARCH, "");
            if let Some(container) = page.container_mut() {
                container.render(&self.snapshot);
            }
            display_result_count(&mut page, self.snapshot.len());
        }
        self.state = FilterState::Unfiltered;
        if let Some(storage) = self.storage.as_mut() {
            storage.clear(FILTERS_KEY);
        }
        info!("Filters reset");

        self.alerts
            .show_alert(Severity::Info, RESET_NOTICE, Some(self.settings.notice_duration))
            .await;
    }

    /// Navigates to the booking page for `car_name`. Returns the new location.
    pub async fn quick_book_car(&self, car_name: &str) -> Option<String> {
        if car_name.is_empty() {
            warn!("Quick book requested without a car name");
            self.alerts
                .show_alert(Severity::Error, UNKNOWN_CAR_NOTICE, Some(self.settings.notice_duration))
                .await;
            return None;
        }

        let url = format!("{}?car={}", self.settings.booking_path, urlencoding::encode(car_name));
        info!("Quick booking '{}' -> {}", car_name, url);
        self.page.lock().await.navigate(url.clone());
        Some(url)
    }

    /// Scrolls to the rendered card named `car_name` (ignoring case) and
    /// highlights it for a while.
    pub async fn scroll_to_vehicle(&self, car_name: &str) -> bool {
        let mut guard = self.page.lock().await;
        let page = &mut *guard;
        let Some(container) = page.container_mut() else {
            return false;
        };

        let wanted = car_name.to_lowercase();
        let found = container
            .cards()
            .iter()
            .position(|c| !c.vehicle.name.is_empty() && c.vehicle.name.to_lowercase() == wanted);

        let Some(index) = found else {
            drop(guard);
            debug!("No rendered card named '{}'", car_name);
            self.alerts
                .show_alert(Severity::Warning, NOT_FOUND_NOTICE, Some(self.settings.notice_duration))
                .await;
            return false;
        };

        let generation = container.generation();
        let revert = ScheduledTask::spawn(
            self.settings.highlight_duration,
            revert_highlight(self.page.clone(), generation, index),
        );
        let card = &mut container.cards_mut()[index];
        card.box_shadow = HIGHLIGHT_SHADOW.into();
        // A previous highlight timer on this card is dropped, and so cancelled.
        card.revert = Some(revert);
        let name = card.vehicle.name.clone();

        page.scroll_into_view(&name);
        true
    }
}
