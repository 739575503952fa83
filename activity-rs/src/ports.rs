use async_trait::async_trait;

use dash_common::Sample;

use crate::errors::ActivityError;
use crate::models::{ActivityRecord, Prediction};

#[async_trait]
pub trait ActivityPort: Send + Sync {
    /// Asks the service to classify one accelerometer sample.
    /// Returns FetchData if the service can't be reached or answers with an error status,
    /// and IncorrectDataFormat if the body has an unexpected shape.
    async fn predict(&self, sample: &Sample) -> Result<Prediction, ActivityError>;

    /// Returns the past activities known to the service.
    async fn history(&self) -> Result<Vec<ActivityRecord>, ActivityError>;

    fn get_tag(&self) -> &str;
}
