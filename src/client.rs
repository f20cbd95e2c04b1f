use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::meeting::{MeetingPayload, MeetingRecord};

/// Default base URL of the meeting backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Operations the meeting backend exposes under `/api/{backend}/meetings`.
///
/// `backend` is the namespace selector, e.g. `"go"`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingApi: Send + Sync {
    async fn list_meetings(&self, backend: &str) -> Result<Vec<MeetingRecord>, ApiError>;

    async fn get_meeting(&self, backend: &str, id: i64) -> Result<MeetingRecord, ApiError>;

    async fn create_meeting(
        &self,
        backend: &str,
        payload: &MeetingPayload,
    ) -> Result<MeetingRecord, ApiError>;

    /// Some backends answer with the stored record, others with an empty body.
    async fn update_meeting(
        &self,
        backend: &str,
        id: i64,
        payload: &MeetingPayload,
    ) -> Result<Option<MeetingRecord>, ApiError>;

    async fn delete_meeting(&self, backend: &str, id: i64) -> Result<(), ApiError>;
}

/// reqwest client for the meeting REST backend
#[derive(Clone)]
pub struct MeetingApiClient {
    client: Client,
    base_url: String,
}

impl Default for MeetingApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl MeetingApiClient {
    /// No request timeout is configured: a hung backend call stays pending.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, backend: &str) -> String {
        format!("{}/api/{}/meetings", self.base_url, backend)
    }

    fn item_url(&self, backend: &str, id: i64) -> String {
        format!("{}/{}", self.collection_url(backend), id)
    }

    // Turn non-2xx responses into ApiError::Status, keeping the body for the logs
    async fn check_status(res: Response) -> Result<Response, ApiError> {
        let status = res.status();
        info!("Response received with status: {}", status);

        if status.is_success() {
            Ok(res)
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl MeetingApi for MeetingApiClient {
    async fn list_meetings(&self, backend: &str) -> Result<Vec<MeetingRecord>, ApiError> {
        let url = self.collection_url(backend);
        info!("Fetching meetings from backend {}", backend);
        debug!("API URL: {}", url);

        let res = Self::check_status(self.client.get(&url).send().await?).await?;
        Ok(res.json::<Vec<MeetingRecord>>().await?)
    }

    async fn get_meeting(&self, backend: &str, id: i64) -> Result<MeetingRecord, ApiError> {
        let url = self.item_url(backend, id);
        info!("Fetching meeting {} from backend {}", id, backend);
        debug!("API URL: {}", url);

        let res = Self::check_status(self.client.get(&url).send().await?).await?;
        Ok(res.json::<MeetingRecord>().await?)
    }

    async fn create_meeting(
        &self,
        backend: &str,
        payload: &MeetingPayload,
    ) -> Result<MeetingRecord, ApiError> {
        let url = self.collection_url(backend);
        info!("Creating meeting '{}' on backend {}", payload.topic, backend);
        debug!("API URL: {}, payload: {:?}", url, payload);

        let res = Self::check_status(self.client.post(&url).json(payload).send().await?).await?;
        Ok(res.json::<MeetingRecord>().await?)
    }

    async fn update_meeting(
        &self,
        backend: &str,
        id: i64,
        payload: &MeetingPayload,
    ) -> Result<Option<MeetingRecord>, ApiError> {
        let url = self.item_url(backend, id);
        info!("Updating meeting {} on backend {}", id, backend);
        debug!("API URL: {}, payload: {:?}", url, payload);

        let res = Self::check_status(self.client.put(&url).json(payload).send().await?).await?;

        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        // An unparseable body still means the update went through
        match serde_json::from_str::<MeetingRecord>(&body) {
            Ok(record) => Ok(Some(record)),
            Err(err) => {
                debug!("Ignoring update response body: {}", err);
                Ok(None)
            }
        }
    }

    async fn delete_meeting(&self, backend: &str, id: i64) -> Result<(), ApiError> {
        let url = self.item_url(backend, id);
        info!("Deleting meeting {} on backend {}", id, backend);
        debug!("API URL: {}", url);

        Self::check_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}
