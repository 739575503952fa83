use serde::{Deserialize, Serialize};

use dash_common::Sample;

/// Where a prediction came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionSource {
    /// Returned by the remote classification service.
    Remote,
    /// Computed locally because the remote call failed.
    Fallback,
}

/// Activity classification for one accelerometer sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub activity: String,
    pub confidence: Option<f64>,
    pub sample: Sample,
    pub source: PredictionSource,
}

impl Prediction {
    pub fn remote(activity: &str, confidence: Option<f64>, sample: Sample) -> Self {
        Self {
            activity: activity.to_string(),
            confidence,
            sample,
            source: PredictionSource::Remote,
        }
    }

    pub fn fallback(activity: &str, sample: Sample) -> Self {
        Self {
            activity: activity.to_string(),
            confidence: None,
            sample,
            source: PredictionSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == PredictionSource::Fallback
    }
}

/// Body of a classification request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub acc_x: f64,
    pub acc_y: f64,
    pub acc_z: f64,
}

impl From<&Sample> for PredictionRequest {
    fn from(sample: &Sample) -> Self {
        Self {
            acc_x: sample.x(),
            acc_y: sample.y(),
            acc_z: sample.z(),
        }
    }
}
