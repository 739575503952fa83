use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::errors::ActivityError;

pub(crate) const CLIENT_TIMEOUT_DEFAULT: u64 = 5;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, ActivityError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ActivityError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, ActivityError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ActivityError::FetchData(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ActivityError::IncorrectDataFormat(e.to_string()))
    }

    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value, ActivityError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ActivityError::FetchData(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ActivityError::IncorrectDataFormat(e.to_string()))
    }
}
