use serde::{Deserialize, Serialize};

use dash_common::Sample;

/// Full scale of the accelerometer gauge, m/s².
pub const ACCEL_FULL_SCALE: f64 = 20.0;
/// Full scale of the gyroscope gauge, rad/s.
pub const GYRO_FULL_SCALE: f64 = 5.0;

const ARC_START_DEGREES: f64 = -90.0;
const FULL_TURN_DEGREES: f64 = 360.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaugeArc {
    pub start_degrees: f64,
    pub sweep_degrees: f64,
}

/// Circular indicator of the current magnitude of one sensor.
///
/// ```
/// use chart_rs::Gauge;
/// use dash_common::Sample;
///
/// let gauge = Gauge::from_sample("Accelerometer", &Sample::from_axes(3.0, 4.0, 0.0), 20.0);
/// assert_eq!(gauge.text, "5.0");
/// assert_eq!(gauge.progress, 0.25);
/// assert_eq!(gauge.arc.sweep_degrees, 90.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub label: String,
    pub magnitude: f64,
    /// Fraction of the full scale, in `[0, 1]`.
    pub progress: f64,
    pub text: String,
    pub arc: GaugeArc,
}

impl Gauge {
    pub fn from_magnitude(label: &str, magnitude: f64, full_scale: f64) -> Self {
        let progress = if full_scale.is_finite() && full_scale > 0.0 && !magnitude.is_nan() {
            (magnitude / full_scale).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            label: label.to_string(),
            magnitude,
            progress,
            text: format!("{magnitude:.1}"),
            arc: GaugeArc {
                start_degrees: ARC_START_DEGREES,
                sweep_degrees: FULL_TURN_DEGREES * progress,
            },
        }
    }

    pub fn from_sample(label: &str, sample: &Sample, full_scale: f64) -> Self {
        Self::from_magnitude(label, sample.magnitude(), full_scale)
    }
}
