//! API client layer for the translation server and dictionary service.

pub mod client;
pub mod types;
pub mod worker;

pub use client::{ApiClient, ApiError, DEFAULT_API_URL, DEFAULT_DICTIONARY_URL};
pub use worker::{ApiRequest, ApiResponse, spawn_worker};
