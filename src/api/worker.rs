//! Background API worker.
//!
//! Runs every HTTP call on a dedicated thread so the UI never blocks on the
//! network. Requests arrive over an mpsc channel and responses are sent back
//! tagged with the request id that produced them; the UI drops responses
//! whose id no longer matches its in-flight request.

use std::sync::mpsc::{Receiver, Sender};

use super::client::{ApiClient, ApiError};
use super::types::{
    BatchTranslationRequest, BatchTranslationResult, DictionaryEntry, HealthResponse,
    TranslationRequest, TranslationResult,
};

/// Requests sent from the UI thread to the worker.
#[derive(Debug)]
pub enum ApiRequest {
    Translate {
        request: TranslationRequest,
        request_id: u64,
    },
    BatchTranslate {
        request: BatchTranslationRequest,
        request_id: u64,
    },
    SearchDictionary {
        word: String,
        request_id: u64,
    },
    /// Health polls carry no id; the latest response always wins.
    CheckHealth,
}

/// Responses sent from the worker back to the UI thread.
#[derive(Debug)]
pub enum ApiResponse {
    Translated {
        result: Result<TranslationResult, ApiError>,
        request_id: u64,
    },
    BatchTranslated {
        result: Result<BatchTranslationResult, ApiError>,
        request_id: u64,
    },
    DictionaryResults {
        result: Result<Vec<DictionaryEntry>, ApiError>,
        request_id: u64,
    },
    Health(Result<HealthResponse, ApiError>),
}

/// Spawn the API worker thread.
///
/// The thread owns a single-threaded tokio runtime and processes requests
/// until the request channel closes.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");

        rt.block_on(worker_loop(client, request_rx, response_tx));
    });
}

/// Main worker loop.
///
/// Blocking `recv()` is fine here since the thread does nothing else;
/// requests are processed one at a time in arrival order.
async fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&client, request).await;

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }
}

async fn handle_request(client: &ApiClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Translate {
            request,
            request_id,
        } => ApiResponse::Translated {
            result: client.translate(&request).await,
            request_id,
        },
        ApiRequest::BatchTranslate {
            request,
            request_id,
        } => ApiResponse::BatchTranslated {
            result: client.batch_translate(&request).await,
            request_id,
        },
        ApiRequest::SearchDictionary { word, request_id } => ApiResponse::DictionaryResults {
            result: client.search_dictionary(&word).await,
            request_id,
        },
        ApiRequest::CheckHealth => ApiResponse::Health(client.health().await),
    }
}
