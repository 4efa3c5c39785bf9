//! Tests for app/events

use super::super::state::{App, Tab};
use crate::api::types::{BatchTranslationResult, TranslationResult};
use crate::api::{ApiError, ApiResponse};
use crate::config::Config;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn test_app() -> App {
    App::new_for_tests(&Config::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn translation(source: &str) -> TranslationResult {
    TranslationResult {
        source: source.to_string(),
        translation: format!("{source} (ibani)"),
        model: "marian-ibani".to_string(),
    }
}

#[test]
fn test_ctrl_c_quits_from_every_tab() {
    for tab in Tab::ALL {
        let mut app = test_app();
        app.tab = tab;
        app.handle_key_event(ctrl('c'));
        assert!(app.should_quit(), "Ctrl+C should quit from {tab:?}");
    }
}

#[test]
fn test_tab_key_cycles_tabs() {
    let mut app = test_app();
    assert_eq!(app.tab, Tab::Single);

    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.tab, Tab::Batch);

    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.tab, Tab::Single);
}

#[test]
fn test_f1_toggles_help_and_swallows_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    // Keys other than the close keys are swallowed
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.tab, Tab::Single);
    assert!(app.help.visible);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_typed_chars_reach_single_input() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('h')));
    app.handle_key_event(key(KeyCode::Char('i')));
    assert_eq!(app.single.input_text(), "hi");
}

#[test]
fn test_successful_translation_is_recorded_to_history() {
    let mut app = test_app();
    app.single.start_request(1);

    app.process_response(ApiResponse::Translated {
        result: Ok(translation("hello")),
        request_id: 1,
    });

    assert_eq!(app.history.total_count(), 1);
    assert_eq!(app.single.result.as_ref().unwrap().source, "hello");
}

#[test]
fn test_failed_translation_is_not_recorded() {
    let mut app = test_app();
    app.single.start_request(1);

    app.process_response(ApiResponse::Translated {
        result: Err(ApiError::Network("refused".to_string())),
        request_id: 1,
    });

    assert_eq!(app.history.total_count(), 0);
    assert!(app.single.error.is_some());
}

#[test]
fn test_batch_results_recorded_in_order() {
    let mut app = test_app();
    app.batch.start_request(1);

    let translations = vec![translation("one"), translation("two")];
    app.process_response(ApiResponse::BatchTranslated {
        result: Ok(BatchTranslationResult {
            count: translations.len(),
            translations,
        }),
        request_id: 1,
    });

    assert_eq!(app.history.total_count(), 2);
    // record() prepends, so the last batch item sits at the head
    let sources: Vec<String> = app
        .history
        .filtered_entries()
        .map(|e| e.source.clone())
        .collect();
    assert_eq!(sources, vec!["two", "one"]);
}

#[test]
fn test_stale_single_response_not_recorded() {
    let mut app = test_app();
    app.single.start_request(2);

    app.process_response(ApiResponse::Translated {
        result: Ok(translation("old")),
        request_id: 1,
    });

    assert_eq!(app.history.total_count(), 0);
    assert!(app.single.loading);
}

#[test]
fn test_health_response_updates_status() {
    use crate::health::ServerStatus;

    let mut app = test_app();
    app.process_response(ApiResponse::Health(Err(ApiError::Network(
        "refused".to_string(),
    ))));
    assert_eq!(app.health.status, ServerStatus::Offline);
}

#[test]
fn test_paste_into_batch_keeps_newlines() {
    let mut app = test_app();
    app.tab = Tab::Batch;
    app.handle_paste_event("one\ntwo");
    assert_eq!(app.batch.item_count(), 2);
}

#[test]
fn test_paste_into_dictionary_is_flattened() {
    let mut app = test_app();
    app.tab = Tab::Dictionary;
    app.handle_paste_event("good\nmorning");
    assert_eq!(app.dictionary.search_word(), "good morning");
}
