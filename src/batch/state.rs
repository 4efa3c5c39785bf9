use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::api::ApiError;
use crate::api::types::BatchTranslationResult;

/// Operator-facing message for any failed batch translation.
pub const BATCH_FAILED: &str =
    "Batch translation failed. Make sure the API server is running.";

/// State of the batch translation tab.
pub struct BatchState {
    pub textarea: TextArea<'static>,
    pub results: Option<BatchTranslationResult>,
    pub error: Option<String>,
    pub loading: bool,
    /// Id of the request we are waiting on; responses with any other id are
    /// stale and dropped.
    pub in_flight: Option<u64>,
    pub scroll_offset: u16,
}

impl BatchState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

        Self {
            textarea,
            results: None,
            error: None,
            loading: false,
            in_flight: None,
            scroll_offset: 0,
        }
    }

    /// The items that would be submitted right now.
    pub fn items(&self) -> Vec<String> {
        split_batch_input(&self.textarea.lines().join("\n"))
    }

    pub fn item_count(&self) -> usize {
        self.items().len()
    }

    pub fn start_request(&mut self, request_id: u64) {
        self.loading = true;
        self.error = None;
        self.in_flight = Some(request_id);
    }

    /// Apply a worker response. Returns true when fresh successful results
    /// were stored (the caller then records them to history).
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<BatchTranslationResult, ApiError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            // Stale response from an earlier request
            return false;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(batch) => {
                self.error = None;
                self.results = Some(batch);
                self.scroll_offset = 0;
                true
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                log::debug!("batch translation failed: {e}");
                let _ = e;
                self.error = Some(BATCH_FAILED.to_string());
                false
            }
        }
    }

    /// Reset input, results, and error.
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
        self.results = None;
        self.error = None;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

impl Default for BatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Split batch input into one item per line: trimmed, empties dropped.
pub fn split_batch_input(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
