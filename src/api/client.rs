//! Async HTTP client for the translation server and dictionary service.
//!
//! One error per call, no retries. Error bodies are read as text first so a
//! failed JSON parse never loses the server's message.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::types::{
    BatchTranslationRequest, BatchTranslationResult, DictionaryEntry, HealthResponse,
    TranslationRequest, TranslationResult,
};

/// Default translation server address.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Hosted dictionary lookup service.
pub const DEFAULT_DICTIONARY_URL: &str =
    "https://ibani-dictionary-git-main-williampepple1s-projects.vercel.app";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Longest slice of a raw error body carried into an error message.
const ERROR_SNIPPET_CHARS: usize = 400;

/// Errors that can occur while talking to the remote services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Server replied with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// HTTP client bound to a translation server and a dictionary service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    dictionary_url: String,
}

impl ApiClient {
    /// Create a client with a 30-second request timeout.
    pub fn new(base_url: &str, dictionary_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            dictionary_url: dictionary_url.trim_end_matches('/').to_string(),
        })
    }

    /// The translation server this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/api/health`
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST `/api/translate`
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, ApiError> {
        let url = format!("{}/api/translate", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// POST `/api/batch-translate`
    pub async fn batch_translate(
        &self,
        request: &BatchTranslationRequest,
    ) -> Result<BatchTranslationResult, ApiError> {
        let url = format!("{}/api/batch-translate", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// GET `{dictionary_url}/search?word={word}`
    pub async fn search_dictionary(&self, word: &str) -> Result<Vec<DictionaryEntry>, ApiError> {
        let url = format!("{}/search", self.dictionary_url);
        let response = self
            .http
            .get(&url)
            .query(&[("word", word)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Check the status, then decode the body as JSON.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Api {
                code: status.as_u16(),
                message: extract_error_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Pull a human-readable message out of an error body.
///
/// Tries the common shapes `{"error": {"message": ...}}` and
/// `{"message": ...}`, falling back to a bounded slice of the raw body.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.chars().count() > ERROR_SNIPPET_CHARS {
        let snippet: String = trimmed.chars().take(ERROR_SNIPPET_CHARS).collect();
        format!("{snippet}...")
    } else {
        trimmed.to_string()
    }
}
