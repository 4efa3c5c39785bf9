use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::api::ApiError;
use crate::api::types::DictionaryEntry;

/// Shown when the word is missing from the dictionary, and also on lookup
/// errors; the hosted service reports misses both ways.
pub const NOT_IN_DICTIONARY: &str =
    "This word or combination of words is currently not in the Ibani dictionary.";

/// Shown when search is submitted with a blank input.
pub const EMPTY_SEARCH: &str = "Please enter a word to search";

/// State of the dictionary lookup tab.
pub struct DictionaryState {
    pub textarea: TextArea<'static>,
    pub results: Vec<DictionaryEntry>,
    pub error: Option<String>,
    pub loading: bool,
    /// Id of the request we are waiting on; responses with any other id are
    /// stale and dropped.
    pub in_flight: Option<u64>,
    pub scroll_offset: u16,
}

impl DictionaryState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

        Self {
            textarea,
            results: Vec::new(),
            error: None,
            loading: false,
            in_flight: None,
            scroll_offset: 0,
        }
    }

    /// The trimmed search word.
    pub fn search_word(&self) -> String {
        self.textarea
            .lines()
            .first()
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    pub fn start_request(&mut self, request_id: u64) {
        self.loading = true;
        self.error = None;
        self.results.clear();
        self.in_flight = Some(request_id);
    }

    /// Apply a worker response. Empty result arrays and transport errors
    /// surface the same not-in-dictionary message.
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<Vec<DictionaryEntry>, ApiError>,
    ) {
        if self.in_flight != Some(request_id) {
            // Stale response from an earlier request
            return;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(entries) if !entries.is_empty() => {
                self.error = None;
                self.results = entries;
                self.scroll_offset = 0;
            }
            Ok(_) => {
                self.error = Some(NOT_IN_DICTIONARY.to_string());
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                log::debug!("dictionary search failed: {e}");
                let _ = e;
                self.error = Some(NOT_IN_DICTIONARY.to_string());
            }
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

impl Default for DictionaryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ibani: &str) -> DictionaryEntry {
        DictionaryEntry {
            ibani: ibani.to_string(),
            pos: "noun".to_string(),
            meaning: "a meaning".to_string(),
        }
    }

    #[test]
    fn test_search_word_is_trimmed() {
        let mut state = DictionaryState::new();
        state.textarea.insert_str("  morning  ");
        assert_eq!(state.search_word(), "morning");
    }

    #[test]
    fn test_apply_response_with_results() {
        let mut state = DictionaryState::new();
        state.start_request(1);

        state.apply_response(1, Ok(vec![entry("ḅarị"), entry("ịna")]));

        assert!(!state.loading);
        assert_eq!(state.results.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_results_surface_not_found_message() {
        let mut state = DictionaryState::new();
        state.start_request(1);

        state.apply_response(1, Ok(Vec::new()));

        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some(NOT_IN_DICTIONARY));
    }

    #[test]
    fn test_lookup_error_surfaces_same_message() {
        let mut state = DictionaryState::new();
        state.start_request(1);

        state.apply_response(1, Err(ApiError::Network("dns failure".to_string())));

        assert_eq!(state.error.as_deref(), Some(NOT_IN_DICTIONARY));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = DictionaryState::new();
        state.start_request(5);

        state.apply_response(4, Ok(vec![entry("old")]));

        assert!(state.loading);
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_start_request_clears_previous_results() {
        let mut state = DictionaryState::new();
        state.start_request(1);
        state.apply_response(1, Ok(vec![entry("ḅarị")]));

        state.start_request(2);

        assert!(state.results.is_empty());
        assert!(state.loading);
    }
}
