use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

use super::state::{App, Tab};
use crate::api::{ApiRequest, ApiResponse};
use crate::{batch, dictionary, history, single};

/// Timeout for event polling - allows periodic UI refresh for notifications
/// and the background health poll.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Apply worker responses before processing new input so results
        // render on the next frame.
        self.poll_api_responses();
        self.poll_health();
        self.notification.clear_if_expired();

        // Poll with timeout to allow periodic refresh
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Drain the response channel and apply everything that arrived.
    fn poll_api_responses(&mut self) {
        let mut responses = Vec::new();
        let mut disconnected = false;

        if let Some(ref rx) = self.response_rx {
            loop {
                match rx.try_recv() {
                    Ok(response) => responses.push(response),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            }
        }

        for response in responses {
            self.process_response(response);
        }

        if disconnected {
            self.response_rx = None;
            self.notification
                .show_error("API worker disconnected unexpectedly");
        }
    }

    pub(crate) fn process_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Translated { result, request_id } => {
                if self.single.apply_response(request_id, result)
                    && let Some(translation) = self.single.result.clone()
                {
                    self.record_history(&translation.source, &translation.translation);
                }
            }
            ApiResponse::BatchTranslated { result, request_id } => {
                if self.batch.apply_response(request_id, result)
                    && let Some(results) = self.batch.results.clone()
                {
                    for translation in &results.translations {
                        self.record_history(&translation.source, &translation.translation);
                    }
                }
            }
            ApiResponse::DictionaryResults { result, request_id } => {
                self.dictionary.apply_response(request_id, result);
            }
            ApiResponse::Health(result) => {
                self.health.apply(result);
            }
        }
    }

    /// Send a health poll whenever one is due and a worker is connected.
    fn poll_health(&mut self) {
        if self.health.should_poll() && self.send_request(ApiRequest::CheckHealth) {
            self.health.mark_polled();
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The help popup swallows keys while visible
        if self.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                self.help.close();
            }
            return;
        }

        // Try global keys first
        if self.handle_global_key(key) {
            return;
        }

        // Not a global key, delegate to the active tab
        match self.tab {
            Tab::Single => single::handle_key(self, key),
            Tab::Batch => batch::handle_key(self, key),
            Tab::Dictionary => dictionary::handle_key(self, key),
            Tab::History => history::handle_key(self, key),
        }
    }

    /// Keys that work on every tab. Returns true if the key was handled.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Tab => {
                self.tab = self.tab.next();
                true
            }
            KeyCode::BackTab => {
                self.tab = self.tab.previous();
                true
            }
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            _ => false,
        }
    }

    /// Bracketed paste goes into the active tab's text input.
    fn handle_paste_event(&mut self, text: &str) {
        match self.tab {
            Tab::Single => {
                self.single.textarea.insert_str(text);
            }
            Tab::Batch => {
                self.batch.textarea.insert_str(text);
            }
            Tab::Dictionary => {
                // Keep the search input single-line
                self.dictionary.textarea.insert_str(text.replace('\n', " "));
            }
            Tab::History => {
                self.history
                    .search_textarea_mut()
                    .insert_str(text.replace('\n', " "));
                self.history.on_search_input_changed();
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
