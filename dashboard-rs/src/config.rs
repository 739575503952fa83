use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use activity_rs::ActivityBands;
use chart_rs::gauge::{ACCEL_FULL_SCALE, GYRO_FULL_SCALE};

use crate::errors::DashboardError;

const DEFAULT_BASE_URL: &str = "https://example.com";
const DEFAULT_POLL_PERIOD_MILLIS: u64 = 2000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
const DEFAULT_HISTORY: usize = 100;
const ACCEL_RANGE: f64 = 20.0;
const GYRO_RANGE: f64 = 10.0;

/// Buffer and display settings of one sensor.
///
/// A channel block given in a configuration file replaces the default block as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Buffer capacity, also the number of chart slots.
    pub history: usize,
    /// Chart range, plotted as `±range`.
    pub range: f64,
    pub gauge_full_scale: f64,
}

impl ChannelConfig {
    pub fn accel() -> Self {
        Self {
            history: DEFAULT_HISTORY,
            range: ACCEL_RANGE,
            gauge_full_scale: ACCEL_FULL_SCALE,
        }
    }

    pub fn gyro() -> Self {
        Self {
            history: DEFAULT_HISTORY,
            range: GYRO_RANGE,
            gauge_full_scale: GYRO_FULL_SCALE,
        }
    }

    fn validate(&self, name: &str) -> Result<(), DashboardError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.range) {
            return Err(DashboardError::InvalidConfig(format!(
                "{name}.range must be a positive number, got {}",
                self.range
            )));
        }
        if !positive(self.gauge_full_scale) {
            return Err(DashboardError::InvalidConfig(format!(
                "{name}.gauge_full_scale must be a positive number, got {}",
                self.gauge_full_scale
            )));
        }
        Ok(())
    }
}

/// Dashboard settings. Every field is optional in JSON and falls back to its default.
///
/// ```
/// use dashboard_rs::config::DashboardConfig;
///
/// let config = DashboardConfig::from_json_str(r#"{"poll_period_millis": 500}"#).unwrap();
/// assert_eq!(config.poll_period_millis, 500);
/// assert_eq!(config.accel.range, 20.0);
/// assert_eq!(config.gyro.history, 100);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub base_url: String,
    pub poll_period_millis: u64,
    pub request_timeout_secs: u64,
    pub accel: ChannelConfig,
    pub gyro: ChannelConfig,
    pub bands: ActivityBands,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_period_millis: DEFAULT_POLL_PERIOD_MILLIS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            accel: ChannelConfig::accel(),
            gyro: ChannelConfig::gyro(),
            bands: ActivityBands::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(data: &str) -> Result<Self, DashboardError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DashboardError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loading configuration from {}", path.as_ref().display());
        Self::from_json_str(&data)
    }

    /// Bands are checked when they are built, so only the numeric settings are looked at here.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.poll_period_millis == 0 {
            return Err(DashboardError::InvalidConfig(
                "poll_period_millis must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(DashboardError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.accel.validate("accel")?;
        self.gyro.validate("gyro")
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poll_period_millis)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
