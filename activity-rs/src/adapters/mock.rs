// Stands in for the remote activity service in tests and offline demos.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use dash_common::Sample;

use crate::errors::ActivityError;
use crate::models::{ActivityRecord, Prediction};
use crate::ports::ActivityPort;

const OFFLINE: &str = "mock service is offline";

/// Scripted activity service.
///
/// Predictions cycle through the scripted labels with full confidence. While offline every
/// call fails with FetchData, which is how tests exercise the fallback paths.
pub struct ActivityMock {
    tag: String,
    activities: Vec<String>,
    history: Vec<ActivityRecord>,
    online: AtomicBool,
    predict_calls: AtomicUsize,
    history_calls: AtomicUsize,
}

impl ActivityMock {
    pub fn scripted(tag: &str, activities: &[&str], history: Vec<ActivityRecord>) -> Self {
        Self {
            tag: tag.to_string(),
            activities: activities.iter().map(|a| a.to_string()).collect(),
            history,
            online: AtomicBool::new(true),
            predict_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
        }
    }

    /// A service that can never be reached.
    pub fn offline(tag: &str) -> Self {
        let mock = Self::scripted(tag, &[], vec![]);
        mock.set_online(false);
        mock
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<(), ActivityError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ActivityError::FetchData(OFFLINE.to_string()))
        }
    }
}

#[async_trait]
impl ActivityPort for ActivityMock {
    async fn predict(&self, sample: &Sample) -> Result<Prediction, ActivityError> {
        let call = self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        if self.activities.is_empty() {
            return Err(ActivityError::IncorrectDataFormat(
                "no scripted activities".to_string(),
            ));
        }
        let activity = &self.activities[call % self.activities.len()];
        Ok(Prediction::remote(activity, Some(1.0), *sample))
    }

    async fn history(&self) -> Result<Vec<ActivityRecord>, ActivityError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.history.clone())
    }

    fn get_tag(&self) -> &str {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_predictions_cycle() {
        let mock = ActivityMock::scripted("Test", &["Walking", "Running"], vec![]);
        let sample = Sample::default();
        let labels = [
            mock.predict(&sample).await.unwrap().activity,
            mock.predict(&sample).await.unwrap().activity,
            mock.predict(&sample).await.unwrap().activity,
        ];
        assert_eq!(labels, ["Walking", "Running", "Walking"]);
        assert_eq!(mock.predict_calls(), 3);
        assert_eq!(mock.get_tag(), "Test");
    }

    #[tokio::test]
    async fn test_offline_mock_fails() {
        let mock = ActivityMock::offline("Test");
        assert!(matches!(
            mock.predict(&Sample::default()).await,
            Err(ActivityError::FetchData(_))
        ));
        assert!(mock.history().await.is_err());
        assert_eq!(mock.predict_calls(), 1);
        assert_eq!(mock.history_calls(), 1);
    }

    #[tokio::test]
    async fn test_toggle_online() {
        let history = vec![ActivityRecord::new("1", 10, "Hiking", "2 hr")];
        let mock = ActivityMock::scripted("Test", &["Idle"], history.clone());
        mock.set_online(false);
        assert!(mock.history().await.is_err());
        mock.set_online(true);
        assert_eq!(mock.history().await.unwrap(), history);
    }
}
