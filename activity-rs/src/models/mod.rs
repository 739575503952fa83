pub mod prediction;
pub mod record;

pub use prediction::{Prediction, PredictionRequest, PredictionSource};
pub use record::ActivityRecord;
