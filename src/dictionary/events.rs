use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use super::state::{EMPTY_SEARCH, NOT_IN_DICTIONARY};
use crate::api::ApiRequest;
use crate::app::App;

/// Handle keys while the Dictionary tab is active.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit(app),
        KeyCode::Up => app.dictionary.scroll_up(),
        KeyCode::Down => app.dictionary.scroll_down(),
        _ => {
            app.dictionary.textarea.input(Input::from(key));
        }
    }
}

/// Look the current word up in the external dictionary.
fn submit(app: &mut App) {
    if app.dictionary.loading {
        return;
    }

    let word = app.dictionary.search_word();
    if word.is_empty() {
        app.dictionary.error = Some(EMPTY_SEARCH.to_string());
        return;
    }

    let request_id = app.next_request_id();
    if app.send_request(ApiRequest::SearchDictionary { word, request_id }) {
        app.dictionary.start_request(request_id);
    } else {
        app.dictionary.error = Some(NOT_IN_DICTIONARY.to_string());
    }
}
