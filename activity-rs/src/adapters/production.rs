// Client of the remote activity service: classification of single samples and the
// list of past activities.

use std::time::Duration;

use async_trait::async_trait;

use dash_common::Sample;

use crate::errors::ActivityError;
use crate::helpers;
use crate::http_client::{HttpClient, CLIENT_TIMEOUT_DEFAULT};
use crate::models::{ActivityRecord, Prediction, PredictionRequest};
use crate::ports::ActivityPort;

/// HTTP endpoints.
const PREDICT_CMD: &str = "/api/predict";
const HISTORY_CMD: &str = "/api/history";

const TAG: &str = "activity-http";

pub struct ActivityHttp {
    client: HttpClient,
}

impl ActivityHttp {
    /// Creates a new client with the default request timeout.
    /// Returns a ClientBuild error if the HTTP client cannot be created.
    pub fn new(base_url: &str) -> Result<Self, ActivityError> {
        Self::with_timeout(base_url, Duration::from_secs(CLIENT_TIMEOUT_DEFAULT))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ActivityError> {
        let client = HttpClient::new(base_url, timeout)?;
        log::debug!("Activity service at {}", client.base_url());
        Ok(Self { client })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl ActivityPort for ActivityHttp {
    async fn predict(&self, sample: &Sample) -> Result<Prediction, ActivityError> {
        let body = PredictionRequest::from(sample);
        let data = self.client.post_json(PREDICT_CMD, &body).await?;
        helpers::parse_prediction(&data, sample)
    }

    async fn history(&self) -> Result<Vec<ActivityRecord>, ActivityError> {
        let data = self.client.get_json(HISTORY_CMD).await?;
        helpers::parse_history(&data)
    }

    fn get_tag(&self) -> &str {
        TAG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_activity_http_new() {
        let client = ActivityHttp::new("http://localhost/").expect("Error creating client");
        assert_eq!(client.base_url(), "http://localhost");
    }

    #[tokio::test]
    async fn test_predict_posts_sample() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(PREDICT_CMD))
            .and(body_json(serde_json::json!({
                "acc_x": 0.5, "acc_y": 0.0, "acc_z": 9.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "activity": "Walking",
                "confidence": 0.8
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ActivityHttp::new(mock_server.uri().as_str()).unwrap();
        let sample = Sample::from_axes(0.5, 0.0, 9.5);
        let prediction = client.predict(&sample).await.unwrap();

        assert_eq!(prediction.activity, "Walking");
        assert_eq!(prediction.confidence, Some(0.8));
        assert_eq!(prediction.sample, sample);
    }

    #[tokio::test]
    async fn test_predict_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ActivityHttp::new(mock_server.uri().as_str()).unwrap();
        let result = client.predict(&Sample::default()).await;
        assert!(matches!(result, Err(ActivityError::FetchData(_))));
    }

    #[tokio::test]
    async fn test_predict_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = ActivityHttp::new(mock_server.uri().as_str()).unwrap();
        let result = client.predict(&Sample::default()).await;
        assert!(matches!(result, Err(ActivityError::IncorrectDataFormat(_))));
    }

    #[tokio::test]
    async fn test_history() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(HISTORY_CMD))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "timestamp": 1_700_000_000_000i64, "activity": "Cycling", "duration": "45 min"},
                {"id": "2", "timestamp": 1_700_000_100_000i64, "activity": "Hiking", "duration": "2 hr"}
            ])))
            .mount(&mock_server)
            .await;

        let client = ActivityHttp::new(mock_server.uri().as_str()).unwrap();
        let history = client.history().await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].activity, "Cycling");
        assert_eq!(history[1].timestamp, 1_700_000_100_000);
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Nothing listens on the discard port.
        let client =
            ActivityHttp::with_timeout("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        assert!(matches!(
            client.history().await,
            Err(ActivityError::FetchData(_))
        ));
    }
}
