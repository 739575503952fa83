//! Sensor readings and the sources that publish them.

use serde::{Deserialize, Serialize};

use dash_common::{Clock, Sample};

mod gaussian;
pub mod mock;

pub use mock::{MockSensorSource, MockSourceConfig};

/// Sensors shown on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
}

impl SensorKind {
    pub const ALL: [SensorKind; 2] = [SensorKind::Accelerometer, SensorKind::Gyroscope];

    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer => "Accelerometer",
            SensorKind::Gyroscope => "Gyroscope",
        }
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "accelerometer" | "accel" => Ok(SensorKind::Accelerometer),
            "gyroscope" | "gyro" => Ok(SensorKind::Gyroscope),
            _ => Err(format!("Unknown sensor {value}")),
        }
    }
}

/// One reading published by a sensor source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub kind: SensorKind,
    pub sample: Sample,
    pub timestamp: Clock,
}

impl SensorReading {
    pub fn new(kind: SensorKind, sample: Sample) -> Self {
        Self {
            kind,
            sample,
            timestamp: Clock::now(),
        }
    }
}
