use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::state::TRANSLATION_FAILED;
use crate::api::ApiRequest;
use crate::api::types::TranslationRequest;
use crate::app::App;
use crate::clipboard;

/// Handle keys while the Single tab is active.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('t') if ctrl => submit(app),
        KeyCode::Char('o') if ctrl => app.single.toggle_options(),
        KeyCode::Char('l') if ctrl => app.single.clear(),
        KeyCode::Char('y') if ctrl => copy_translation(app),
        _ if app.single.options_visible => handle_options_key(app, key),
        _ => {
            app.single.textarea.input(Input::from(key));
        }
    }
}

/// Navigation inside the generation options panel.
fn handle_options_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Two fields, so up and down both flip the selection
        KeyCode::Up | KeyCode::Down => app.single.select_next_option(),
        KeyCode::Left => app.single.adjust_selected_option(false),
        KeyCode::Right => app.single.adjust_selected_option(true),
        KeyCode::Esc => app.single.options_visible = false,
        _ => {}
    }
}

/// Send the current input to the translation server.
///
/// Blank input and re-submission while a request is in flight are ignored.
fn submit(app: &mut App) {
    if app.single.loading {
        return;
    }

    let text = app.single.input_text();
    if text.trim().is_empty() {
        return;
    }

    let request_id = app.next_request_id();
    let request = TranslationRequest {
        text,
        max_length: Some(app.single.max_length),
        num_beams: Some(app.single.num_beams),
    };

    if app.send_request(ApiRequest::Translate {
        request,
        request_id,
    }) {
        app.single.start_request(request_id);
    } else {
        app.single.error = Some(TRANSLATION_FAILED.to_string());
    }
}

/// Copy the current translation to the clipboard.
fn copy_translation(app: &mut App) {
    let Some(result) = &app.single.result else {
        return;
    };
    if result.translation.is_empty() {
        return;
    }

    let text = result.translation.clone();
    if clipboard::copy_to_clipboard(&text, app.clipboard_backend).is_ok() {
        app.notification.show("Copied translation!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::TranslationResult;
    use crate::config::Config;

    fn test_app() -> App {
        App::new_for_tests(&Config::default())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submit_blank_input_is_ignored() {
        let mut app = test_app();
        app.single.textarea.insert_str("   ");

        handle_key(&mut app, ctrl('t'));

        assert!(!app.single.loading);
        assert!(app.single.error.is_none());
    }

    #[test]
    fn test_submit_without_worker_sets_error() {
        let mut app = test_app();
        app.single.textarea.insert_str("hello");

        handle_key(&mut app, ctrl('t'));

        assert_eq!(app.single.error.as_deref(), Some(TRANSLATION_FAILED));
    }

    #[test]
    fn test_submit_sends_request_with_params() {
        let mut app = test_app();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (_response_tx, response_rx) = std::sync::mpsc::channel();
        app.set_channels(request_tx, response_rx);

        app.single.textarea.insert_str("Good morning");
        handle_key(&mut app, ctrl('t'));

        assert!(app.single.loading);
        match request_rx.try_recv().unwrap() {
            ApiRequest::Translate {
                request,
                request_id,
            } => {
                assert_eq!(request.text, "Good morning");
                assert_eq!(request.max_length, Some(128));
                assert_eq!(request.num_beams, Some(4));
                assert_eq!(app.single.in_flight, Some(request_id));
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn test_resubmit_while_loading_is_ignored() {
        let mut app = test_app();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (_response_tx, response_rx) = std::sync::mpsc::channel();
        app.set_channels(request_tx, response_rx);

        app.single.textarea.insert_str("hello");
        handle_key(&mut app, ctrl('t'));
        handle_key(&mut app, ctrl('t'));

        assert!(request_rx.try_recv().is_ok());
        assert!(request_rx.try_recv().is_err(), "second submit must not send");
    }

    #[test]
    fn test_options_panel_adjusts_params() {
        let mut app = test_app();

        handle_key(&mut app, ctrl('o'));
        assert!(app.single.options_visible);

        handle_key(&mut app, plain(KeyCode::Right));
        assert_eq!(app.single.max_length, 128 + super::super::state::MAX_LENGTH_STEP);

        handle_key(&mut app, plain(KeyCode::Down));
        handle_key(&mut app, plain(KeyCode::Right));
        assert_eq!(app.single.num_beams, 5);

        handle_key(&mut app, plain(KeyCode::Esc));
        assert!(!app.single.options_visible);
    }

    #[test]
    fn test_typing_goes_to_textarea_when_options_closed() {
        let mut app = test_app();
        handle_key(&mut app, plain(KeyCode::Char('h')));
        handle_key(&mut app, plain(KeyCode::Char('i')));
        assert_eq!(app.single.input_text(), "hi");
    }

    #[test]
    fn test_typing_blocked_while_options_open() {
        let mut app = test_app();
        handle_key(&mut app, ctrl('o'));
        handle_key(&mut app, plain(KeyCode::Char('x')));
        assert_eq!(app.single.input_text(), "");
    }

    #[test]
    fn test_clear_key() {
        let mut app = test_app();
        app.single.textarea.insert_str("hello");
        handle_key(&mut app, ctrl('l'));
        assert_eq!(app.single.input_text(), "");
    }

    #[test]
    fn test_copy_without_result_shows_nothing() {
        let mut app = test_app();
        handle_key(&mut app, ctrl('y'));
        assert!(app.notification.current().is_none());
    }

    #[test]
    fn test_copy_with_result_notifies() {
        let mut app = test_app();
        app.clipboard_backend = crate::config::ClipboardBackend::Osc52;
        app.single.result = Some(TranslationResult {
            source: "hello".to_string(),
            translation: "nua".to_string(),
            model: "marian-ibani".to_string(),
        });

        handle_key(&mut app, ctrl('y'));

        assert!(app.notification.current().is_some());
    }
}
