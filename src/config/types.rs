// Configuration type definitions

use serde::Deserialize;

use crate::api::{DEFAULT_API_URL, DEFAULT_DICTIONARY_URL};

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Translation server connection section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_dictionary_url() -> String {
    DEFAULT_DICTIONARY_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            dictionary_url: default_dictionary_url(),
        }
    }
}

/// Default generation parameters for translation requests
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_num_beams")]
    pub num_beams: u32,
}

fn default_max_length() -> u32 {
    128
}

fn default_num_beams() -> u32 {
    4
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig {
            max_length: default_max_length(),
            num_beams: default_num_beams(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}
