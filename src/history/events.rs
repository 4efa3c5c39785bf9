use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use crate::app::App;
use crate::clipboard;

/// Handle keys while the History tab is active.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // An armed clear-all waits for its confirmation keystroke
    if app.history.confirm_clear {
        handle_confirm_clear_key(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Up => app.history.select_previous(),
        KeyCode::Down => app.history.select_next(),
        KeyCode::Char('d') if ctrl => delete_selected(app),
        KeyCode::Char('y') if ctrl => copy_selected(app),
        KeyCode::Char('l') if ctrl => {
            if app.history.total_count() > 0 {
                app.history.confirm_clear = true;
            }
        }
        KeyCode::Enter => {}
        _ => {
            if app.history.search_textarea_mut().input(Input::from(key)) {
                app.history.on_search_input_changed();
            }
        }
    }
}

/// Second keystroke of the clear-all flow: `y` wipes, anything else cancels.
fn handle_confirm_clear_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('y') {
        if let Err(e) = app.history.clear() {
            app.notification.show_warning(&format!(
                "History cleared for this session, but the file could not be updated: {e}"
            ));
        } else {
            app.notification.show("History cleared");
        }
    } else {
        app.history.confirm_clear = false;
    }
}

fn delete_selected(app: &mut App) {
    match app.history.delete_selected() {
        Ok(true) => app.notification.show("Entry deleted"),
        Ok(false) => {}
        Err(e) => {
            app.notification.show_warning(&format!(
                "Entry deleted for this session, but the file could not be updated: {e}"
            ));
        }
    }
}

fn copy_selected(app: &mut App) {
    let Some(entry) = app.history.selected_entry() else {
        return;
    };

    let text = entry.translation.clone();
    if clipboard::copy_to_clipboard(&text, app.clipboard_backend).is_ok() {
        app.notification.show("Copied translation!");
    }
}
