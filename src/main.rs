use car_rental_ui::config::{AppConfig, load_config};
use car_rental_ui::dom::{Page, ids};
use car_rental_ui::filter::{FILTERS_KEY, FilterCriteria, VehicleFilter};
use car_rental_ui::model::Vehicle;
use car_rental_ui::notifier::Notifier;
use car_rental_ui::parser::{Parser, VehicleCardParser};
use car_rental_ui::storage::{LocalStorage, SqliteStore};
use std::fs;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let store = match SqliteStore::new(&config.storage_path) {
        Ok(s) => match config.storage_quota_bytes {
            Some(quota) => s.with_quota(quota),
            None => s,
        },
        Err(e) => {
            error!("Failed to initialize storage: {:?}", e);
            return;
        }
    };
    let storage = LocalStorage::new(store);

    let vehicles = load_vehicles(&config.vehicle_page);
    let saved: FilterCriteria = storage.get(FILTERS_KEY).unwrap_or_default();

    let page = Page::new()
        .with_booking_form()
        .with_control(ids::PRICE_FILTER, saved.price.as_control())
        .with_control(ids::TYPE_FILTER, &saved.vehicle_type)
        .with_control(ids::VEHICLE_SEARCH, &saved.search)
        .with_vehicles(&vehicles)
        .shared();

    let notifier = Arc::new(Notifier::with_default_duration(page.clone(), config.alert_duration()));
    let mut filter = VehicleFilter::new(page.clone(), vehicles, notifier, config.filter_settings())
        .with_storage(storage);

    if !saved.is_unfiltered() {
        info!("Restoring saved filters: {:?}", saved);
        filter.apply(&saved).await;
    }

    info!("Car Rental System initialized successfully");
}

/// Parses the vehicle listing page once. A missing or broken page yields an
/// empty snapshot.
fn load_vehicles(path: &str) -> Vec<Vehicle> {
    let html = match fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to read vehicle page {}: {}", path, e);
            return Vec::new();
        }
    };

    let parsed = VehicleCardParser::new().and_then(|parser| parser.parse(&html));
    match parsed {
        Ok(vehicles) => {
            info!("Loaded {} vehicles from {}", vehicles.len(), path);
            vehicles
        }
        Err(e) => {
            warn!("Parse error: {:?}", e);
            Vec::new()
        }
    }
}
