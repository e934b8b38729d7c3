use crate::filter::FilterSettings;
use serde::Deserialize;
use std::fs;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub alert_duration_ms: u64,
    /// Short notices from the vehicle list (reset, quick-book, scroll misses).
    pub notice_duration_ms: u64,
    pub highlight_duration_ms: u64,
    pub booking_path: String,
    pub storage_path: String,
    pub vehicle_page: String,
    pub storage_quota_bytes: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            alert_duration_ms: 4000,
            notice_duration_ms: 3000,
            highlight_duration_ms: 2000,
            booking_path: "/bill".into(),
            storage_path: "storage.db".into(),
            vehicle_page: "templates/vehicles.html".into(),
            storage_quota_bytes: Some(5 * 1024 * 1024),
        }
    }
}

impl AppConfig {
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    pub fn filter_settings(&self) -> FilterSettings {
        FilterSettings {
            booking_path: self.booking_path.clone(),
            notice_duration: Duration::from_millis(self.notice_duration_ms),
            highlight_duration: Duration::from_millis(self.highlight_duration_ms),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "booking_path": "/book" }"#).unwrap();
        assert_eq!(config.booking_path, "/book");
        assert_eq!(config.alert_duration(), Duration::from_millis(4000));

        let settings = config.filter_settings();
        assert_eq!(settings.notice_duration, Duration::from_millis(3000));
        assert_eq!(settings.highlight_duration, Duration::from_millis(2000));
    }

    #[test]
    fn quota_can_be_disabled() {
        let config: AppConfig = serde_json::from_str(r#"{ "storage_quota_bytes": null }"#).unwrap();
        assert_eq!(config.storage_quota_bytes, None);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        assert!(load_config("/nonexistent/config.json").is_err());
    }
}
