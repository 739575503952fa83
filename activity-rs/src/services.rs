use std::time::Duration;

use dash_common::{Clock, Sample};

use crate::adapters::production::ActivityHttp;
use crate::classifier::ActivityBands;
use crate::errors::ActivityError;
use crate::models::{ActivityRecord, Prediction};
use crate::ports::ActivityPort;

/// Activity service that never fails.
///
/// Every call first goes to the wrapped port. When that errors, the failure is logged and
/// replaced by a local result: the band classifier for predictions, the canned list for history.
pub struct ActivityService<C>
where
    C: ActivityPort,
{
    client: C,
    bands: ActivityBands,
}

impl<C> ActivityService<C>
where
    C: ActivityPort,
{
    pub fn new(client: C, bands: ActivityBands) -> Self {
        Self { client, bands }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn bands(&self) -> &ActivityBands {
        &self.bands
    }

    pub fn get_tag(&self) -> &str {
        self.client.get_tag()
    }

    /// Classifies `sample`, remotely if possible.
    pub async fn predict(&self, sample: &Sample) -> Prediction {
        match self.client.predict(sample).await {
            Ok(prediction) => {
                log::debug!("{}: remote prediction {}", self.get_tag(), prediction.activity);
                prediction
            }
            Err(e) => {
                let activity = self.bands.classify(sample);
                log::warn!(
                    "{}: prediction failed ({e}), using local classifier: {activity}",
                    self.get_tag()
                );
                Prediction::fallback(activity, *sample)
            }
        }
    }

    /// Lists past activities, falling back to a fixed list dated relative to now.
    pub async fn history(&self) -> Vec<ActivityRecord> {
        match self.client.history().await {
            Ok(history) => history,
            Err(e) => {
                log::warn!("{}: history failed ({e}), using canned list", self.get_tag());
                ActivityRecord::canned_history(Clock::now().as_millis())
            }
        }
    }
}

/// Builds a service backed by the HTTP adapter.
///
/// An error ClientBuild is returned if the HTTP client cannot be created.
pub fn connect(
    base_url: &str,
    timeout: Duration,
    bands: ActivityBands,
) -> Result<ActivityService<ActivityHttp>, ActivityError> {
    let client = ActivityHttp::with_timeout(base_url, timeout)?;
    log::info!("Connecting to activity service at {}", client.base_url());
    Ok(ActivityService::new(client, bands))
}
