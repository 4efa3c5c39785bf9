//! Wire types for the translation server and the dictionary service.
//!
//! Field names follow the server's JSON contract exactly; the dictionary
//! service returns PascalCase keys, mapped here via serde renames.

use serde::{Deserialize, Serialize};

/// Request body for `/api/translate`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
}

/// A single completed translation as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub source: String,
    pub translation: String,
    pub model: String,
}

/// Request body for `/api/batch-translate`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchTranslationRequest {
    pub texts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
}

/// Response body for `/api/batch-translate`.
///
/// `translations` preserves the order of the submitted texts; `count` is the
/// server-reported number of results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchTranslationResult {
    pub translations: Vec<TranslationResult>,
    pub count: usize,
}

/// Response body for `/api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub model_path: String,
}

/// One dictionary search hit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    #[serde(rename = "Ibani")]
    pub ibani: String,
    #[serde(rename = "Pos")]
    pub pos: String,
    #[serde(rename = "Meaning")]
    pub meaning: String,
}
