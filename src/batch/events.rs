use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::export;
use super::state::BATCH_FAILED;
use crate::api::ApiRequest;
use crate::api::types::BatchTranslationRequest;
use crate::app::App;

/// Handle keys while the Batch tab is active.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('t') if ctrl => submit(app),
        KeyCode::Char('e') if ctrl => export_results(app),
        KeyCode::Char('l') if ctrl => app.batch.clear(),
        KeyCode::Up => app.batch.scroll_up(),
        KeyCode::Down => app.batch.scroll_down(),
        _ => {
            app.batch.textarea.input(Input::from(key));
        }
    }
}

/// Send every non-empty line to the server in one batch call.
fn submit(app: &mut App) {
    if app.batch.loading {
        return;
    }

    let texts = app.batch.items();
    if texts.is_empty() {
        return;
    }

    let request_id = app.next_request_id();
    let request = BatchTranslationRequest {
        texts,
        max_length: None,
        num_beams: None,
    };

    if app.send_request(ApiRequest::BatchTranslate {
        request,
        request_id,
    }) {
        app.batch.start_request(request_id);
    } else {
        app.batch.error = Some(BATCH_FAILED.to_string());
    }
}

/// Write the current results to a CSV file in the working directory.
fn export_results(app: &mut App) {
    let Some(results) = &app.batch.results else {
        return;
    };

    match export::write_csv(&results.translations) {
        Ok(path) => {
            app.notification
                .show(&format!("Exported to {}", path.display()));
        }
        Err(e) => {
            app.notification.show_warning(&format!("Export failed: {e}"));
        }
    }
}
