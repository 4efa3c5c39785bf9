use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::api::ApiError;
use crate::api::types::TranslationResult;
use crate::config::TranslationConfig;

/// Bounds for the generation parameters, mirroring the server's accepted
/// ranges.
pub const MIN_MAX_LENGTH: u32 = 64;
pub const MAX_MAX_LENGTH: u32 = 512;
pub const MIN_NUM_BEAMS: u32 = 1;
pub const MAX_NUM_BEAMS: u32 = 10;

/// Step used when adjusting max_length from the options panel.
pub const MAX_LENGTH_STEP: u32 = 16;

/// Operator-facing message for any failed single translation.
pub const TRANSLATION_FAILED: &str =
    "Translation failed. Make sure the API server is running.";

/// Which generation parameter the options panel has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    MaxLength,
    NumBeams,
}

/// State of the single translation tab.
pub struct SingleState {
    pub textarea: TextArea<'static>,
    pub result: Option<TranslationResult>,
    pub error: Option<String>,
    pub loading: bool,
    /// Id of the request we are waiting on; responses with any other id are
    /// stale and dropped.
    pub in_flight: Option<u64>,
    pub max_length: u32,
    pub num_beams: u32,
    pub options_visible: bool,
    pub selected_option: OptionField,
}

impl SingleState {
    pub fn new(defaults: &TranslationConfig) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

        Self {
            textarea,
            result: None,
            error: None,
            loading: false,
            in_flight: None,
            max_length: defaults.max_length.clamp(MIN_MAX_LENGTH, MAX_MAX_LENGTH),
            num_beams: defaults.num_beams.clamp(MIN_NUM_BEAMS, MAX_NUM_BEAMS),
            options_visible: false,
            selected_option: OptionField::MaxLength,
        }
    }

    /// The full input text, lines joined with newlines.
    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn char_count(&self) -> usize {
        self.textarea
            .lines()
            .iter()
            .map(|l| l.chars().count())
            .sum::<usize>()
            + self.textarea.lines().len().saturating_sub(1)
    }

    /// Mark a request as in flight.
    pub fn start_request(&mut self, request_id: u64) {
        self.loading = true;
        self.error = None;
        self.in_flight = Some(request_id);
    }

    /// Apply a worker response. Returns true when a fresh successful result
    /// was stored (the caller then records it to history).
    pub fn apply_response(
        &mut self,
        request_id: u64,
        result: Result<TranslationResult, ApiError>,
    ) -> bool {
        if self.in_flight != Some(request_id) {
            // Stale response from an earlier request
            return false;
        }

        self.in_flight = None;
        self.loading = false;

        match result {
            Ok(translation) => {
                self.error = None;
                self.result = Some(translation);
                true
            }
            Err(e) => {
                #[cfg(debug_assertions)]
                log::debug!("single translation failed: {e}");
                let _ = e;
                self.error = Some(TRANSLATION_FAILED.to_string());
                false
            }
        }
    }

    /// Reset input, result, and error.
    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
        self.result = None;
        self.error = None;
    }

    pub fn toggle_options(&mut self) {
        self.options_visible = !self.options_visible;
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = match self.selected_option {
            OptionField::MaxLength => OptionField::NumBeams,
            OptionField::NumBeams => OptionField::MaxLength,
        };
    }

    /// Bump the selected parameter up or down, clamped to its range.
    pub fn adjust_selected_option(&mut self, increase: bool) {
        match self.selected_option {
            OptionField::MaxLength => {
                self.max_length = if increase {
                    (self.max_length + MAX_LENGTH_STEP).min(MAX_MAX_LENGTH)
                } else {
                    self.max_length.saturating_sub(MAX_LENGTH_STEP).max(MIN_MAX_LENGTH)
                };
            }
            OptionField::NumBeams => {
                self.num_beams = if increase {
                    (self.num_beams + 1).min(MAX_NUM_BEAMS)
                } else {
                    self.num_beams.saturating_sub(1).max(MIN_NUM_BEAMS)
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> SingleState {
        SingleState::new(&TranslationConfig::default())
    }

    fn ok_result(source: &str) -> Result<TranslationResult, ApiError> {
        Ok(TranslationResult {
            source: source.to_string(),
            translation: format!("{source} (ibani)"),
            model: "marian-ibani".to_string(),
        })
    }

    #[test]
    fn test_defaults_from_config() {
        let state = test_state();
        assert_eq!(state.max_length, 128);
        assert_eq!(state.num_beams, 4);
        assert!(!state.loading);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_out_of_range_config_is_clamped() {
        let config = TranslationConfig {
            max_length: 10_000,
            num_beams: 0,
        };
        let state = SingleState::new(&config);
        assert_eq!(state.max_length, MAX_MAX_LENGTH);
        assert_eq!(state.num_beams, MIN_NUM_BEAMS);
    }

    #[test]
    fn test_char_count_includes_newlines() {
        let mut state = test_state();
        state.textarea.insert_str("ab");
        state.textarea.insert_newline();
        state.textarea.insert_str("cd");
        assert_eq!(state.char_count(), 5);
        assert_eq!(state.input_text(), "ab\ncd");
    }

    #[test]
    fn test_apply_response_success() {
        let mut state = test_state();
        state.start_request(7);
        assert!(state.loading);

        let applied = state.apply_response(7, ok_result("hello"));

        assert!(applied);
        assert!(!state.loading);
        assert!(state.in_flight.is_none());
        assert_eq!(state.result.as_ref().unwrap().source, "hello");
        assert!(state.error.is_none());
    }

    #[test]
    fn test_apply_response_failure_sets_fixed_message() {
        let mut state = test_state();
        state.start_request(7);

        let applied = state.apply_response(7, Err(ApiError::Network("refused".to_string())));

        assert!(!applied);
        assert_eq!(state.error.as_deref(), Some(TRANSLATION_FAILED));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = test_state();
        state.start_request(2);

        let applied = state.apply_response(1, ok_result("old"));

        assert!(!applied);
        assert!(state.loading, "a stale response must not end the newer request");
        assert!(state.result.is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = test_state();
        state.textarea.insert_str("hello");
        state.start_request(1);
        state.apply_response(1, ok_result("hello"));
        state.error = Some("stale error".to_string());

        state.clear();

        assert_eq!(state.input_text(), "");
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_adjust_max_length_clamps_at_bounds() {
        let mut state = test_state();
        state.selected_option = OptionField::MaxLength;

        for _ in 0..100 {
            state.adjust_selected_option(true);
        }
        assert_eq!(state.max_length, MAX_MAX_LENGTH);

        for _ in 0..100 {
            state.adjust_selected_option(false);
        }
        assert_eq!(state.max_length, MIN_MAX_LENGTH);
    }

    #[test]
    fn test_adjust_num_beams_clamps_at_bounds() {
        let mut state = test_state();
        state.selected_option = OptionField::NumBeams;

        for _ in 0..20 {
            state.adjust_selected_option(true);
        }
        assert_eq!(state.num_beams, MAX_NUM_BEAMS);

        for _ in 0..20 {
            state.adjust_selected_option(false);
        }
        assert_eq!(state.num_beams, MIN_NUM_BEAMS);
    }

    #[test]
    fn test_option_selection_cycles() {
        let mut state = test_state();
        assert_eq!(state.selected_option, OptionField::MaxLength);
        state.select_next_option();
        assert_eq!(state.selected_option, OptionField::NumBeams);
        state.select_next_option();
        assert_eq!(state.selected_option, OptionField::MaxLength);
    }
}
