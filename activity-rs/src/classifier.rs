//! Magnitude-threshold fallback classifier.
//!
//! The label of a sample is found by comparing its magnitude against an ordered
//! list of upper bounds, using a strict `<`. A magnitude equal to a bound belongs
//! to the band above it.

use serde::{Deserialize, Serialize};

use dash_common::Sample;

use crate::errors::ActivityError;

const IDLE: &str = "Idle";
const STANDBY: &str = "Standby";
const SITTING: &str = "Sitting";
const WALKING: &str = "Walking";
const RUNNING: &str = "Running";

const IDLE_UPPER_BOUND: f64 = 1.0;
const STANDBY_UPPER_BOUND: f64 = 11.0;
const WALKING_UPPER_BOUND: f64 = 15.0;

/// Ordered label table used by the heuristic classifier.
///
/// `labels[i]` applies to magnitudes in `[thresholds[i - 1], thresholds[i])`, with the
/// first band open towards zero and the last band open towards infinity.
///
/// # Examples
///
/// ```
/// use activity_rs::ActivityBands;
/// use dash_common::Sample;
///
/// let bands = ActivityBands::default();
/// assert_eq!(bands.classify(&Sample::from_axes(0.5, 0.0, 0.0)), "Idle");
/// assert_eq!(bands.classify(&Sample::from_axes(0.0, 0.0, 9.81)), "Standby");
/// assert_eq!(ActivityBands::sitting().classify_magnitude(9.81), "Sitting");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandsTable", into = "BandsTable")]
pub struct ActivityBands {
    thresholds: Vec<f64>,
    labels: Vec<String>,
}

#[derive(Clone, Serialize, Deserialize)]
struct BandsTable {
    thresholds: Vec<f64>,
    labels: Vec<String>,
}

impl ActivityBands {
    /// Builds a label table. Thresholds must be finite and strictly increasing, and
    /// there must be exactly one more label than thresholds.
    pub fn new(thresholds: Vec<f64>, labels: Vec<String>) -> Result<Self, ActivityError> {
        if labels.len() != thresholds.len() + 1 {
            return Err(ActivityError::InvalidBands(format!(
                "{} thresholds need {} labels, got {}",
                thresholds.len(),
                thresholds.len() + 1,
                labels.len()
            )));
        }
        if let Some(bad) = thresholds.iter().find(|t| !t.is_finite()) {
            return Err(ActivityError::InvalidBands(format!(
                "threshold {bad} is not finite"
            )));
        }
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ActivityError::InvalidBands(format!(
                "thresholds must be strictly increasing, found {} before {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { thresholds, labels })
    }

    fn with_second_label(second: &str) -> Self {
        Self {
            thresholds: vec![IDLE_UPPER_BOUND, STANDBY_UPPER_BOUND, WALKING_UPPER_BOUND],
            labels: [IDLE, second, WALKING, RUNNING]
                .iter()
                .map(|label| label.to_string())
                .collect(),
        }
    }

    /// Same bands as the default table, with "Sitting" in place of "Standby".
    pub fn sitting() -> Self {
        Self::with_second_label(SITTING)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the band `magnitude` falls into. NaN lands in the last band.
    pub fn band_index(&self, magnitude: f64) -> usize {
        self.thresholds
            .iter()
            .position(|upper_bound| magnitude < *upper_bound)
            .unwrap_or(self.thresholds.len())
    }

    pub fn classify_magnitude(&self, magnitude: f64) -> &str {
        &self.labels[self.band_index(magnitude)]
    }

    pub fn classify(&self, sample: &Sample) -> &str {
        self.classify_magnitude(sample.magnitude())
    }
}

impl Default for ActivityBands {
    fn default() -> Self {
        Self::with_second_label(STANDBY)
    }
}

impl TryFrom<BandsTable> for ActivityBands {
    type Error = ActivityError;

    fn try_from(value: BandsTable) -> Result<Self, Self::Error> {
        Self::new(value.thresholds, value.labels)
    }
}

impl From<ActivityBands> for BandsTable {
    fn from(value: ActivityBands) -> Self {
        Self {
            thresholds: value.thresholds,
            labels: value.labels,
        }
    }
}
