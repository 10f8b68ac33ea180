pub mod error;
pub mod model;

use async_trait::async_trait;

use crate::config::Config;
use error::ApiError;
use model::{ApiResponse, CodeRequest, Stats, Submission};

/// The remote song-request API. Object-safe so the UI can run against a
/// deterministic fake in tests.
#[async_trait]
pub trait SongApi: Send + Sync {
    async fn request_code(&self, email: &str) -> Result<ApiResponse, ApiError>;
    async fn submit_song(&self, submission: &Submission) -> Result<ApiResponse, ApiError>;
    async fn fetch_stats(&self) -> Result<Stats, ApiError>;
}

pub struct ApiService {
    client: reqwest::Client,
    base_url: String,
}

impl ApiService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SongApi for ApiService {
    async fn request_code(&self, email: &str) -> Result<ApiResponse, ApiError> {
        let body = CodeRequest {
            email: email.to_string(),
        };

        // Failures arrive as JSON bodies with non-2xx statuses, so the body
        // is parsed regardless of status.
        Ok(self
            .client
            .post(self.url("/api/request-code"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?)
    }

    async fn submit_song(&self, submission: &Submission) -> Result<ApiResponse, ApiError> {
        Ok(self
            .client
            .post(self.url("/api/submit"))
            .json(submission)
            .send()
            .await?
            .json()
            .await?)
    }

    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        Ok(self
            .client
            .get(self.url("/api/stats"))
            .send()
            .await?
            .json()
            .await?)
    }
}
