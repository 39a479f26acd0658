use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::config::ApiConfig;
use crate::exercise::SentenceExercise;

pub const SENTENCE_PATH: &str = "/api/sentence";
pub const CHECK_PATH: &str = "/api/check";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend base url not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The sentence backend as seen from the page. Every failure, whatever the
/// cause, surfaces as an [`ApiError`].
#[allow(async_fn_in_trait)]
pub trait ExerciseApi {
    async fn fetch_sentence(&self) -> Result<SentenceExercise, ApiError>;

    async fn check_sentence(&self, words: &[String]) -> Result<bool, ApiError>;
}

#[derive(Debug, Serialize)]
pub struct CheckRequest<'a> {
    pub words: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    pub correct: bool,
}

#[derive(Debug, Clone)]
pub struct HttpExerciseApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpExerciseApi {
    pub fn new(config: ApiConfig) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let client = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "failed to build configured HTTP client, using defaults");
            reqwest::Client::new()
        });

        Self { config, client }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        if self.config.base_url.trim().is_empty() {
            return Err(ApiError::NotConfigured);
        }
        Ok(format!("{}{}", self.config.base_url.trim_end_matches('/'), path))
    }

    async fn decode<T: for<'de> Deserialize<'de>>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus { status });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ExerciseApi for HttpExerciseApi {
    async fn fetch_sentence(&self) -> Result<SentenceExercise, ApiError> {
        let url = self.endpoint(SENTENCE_PATH)?;
        let resp = self.client.get(&url).send().await?;
        Self::decode(resp).await
    }

    async fn check_sentence(&self, words: &[String]) -> Result<bool, ApiError> {
        let url = self.endpoint(CHECK_PATH)?;
        let resp = self
            .client
            .post(&url)
            .json(&CheckRequest { words })
            .send()
            .await?;
        let body: CheckResponse = Self::decode(resp).await?;
        Ok(body.correct)
    }
}
