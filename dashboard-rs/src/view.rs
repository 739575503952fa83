use serde::{Deserialize, Serialize};

use activity_rs::{Prediction, PredictionSource};
use chart_rs::{ChartFrame, Gauge};

/// Gauge and chart of one sensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorPanel {
    pub gauge: Gauge,
    pub chart: ChartFrame,
}

/// Plain data for one repaint of the dashboard screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Current activity, or a placeholder until the first prediction lands.
    pub status: String,
    pub prediction: Option<Prediction>,
    pub accel: SensorPanel,
    pub gyro: SensorPanel,
}

impl DashboardView {
    /// True while the status comes from the local classifier.
    pub fn is_fallback(&self) -> bool {
        self.prediction
            .as_ref()
            .map(|p| p.source == PredictionSource::Fallback)
            .unwrap_or(false)
    }
}
