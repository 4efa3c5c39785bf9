use std::sync::mpsc::{Receiver, Sender};

use crate::api::{ApiRequest, ApiResponse};
use crate::batch::BatchState;
use crate::config::{ClipboardBackend, Config};
use crate::dictionary::DictionaryState;
use crate::health::HealthState;
use crate::help::HelpState;
use crate::history::HistoryState;
use crate::notification::NotificationState;
use crate::single::SingleState;

/// Which tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Single,
    Batch,
    Dictionary,
    History,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Single, Tab::Batch, Tab::Dictionary, Tab::History];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Single => "Single",
            Tab::Batch => "Batch",
            Tab::Dictionary => "Dictionary",
            Tab::History => "History",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Single => 0,
            Tab::Batch => 1,
            Tab::Dictionary => 2,
            Tab::History => 3,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn previous(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Application state
pub struct App {
    pub tab: Tab,
    pub single: SingleState,
    pub batch: BatchState,
    pub dictionary: DictionaryState,
    pub history: HistoryState,
    pub health: HealthState,
    pub notification: NotificationState,
    pub help: HelpState,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    /// Channel to send requests to the API worker thread
    request_tx: Option<Sender<ApiRequest>>,
    /// Channel to receive responses from the API worker thread
    pub(crate) response_rx: Option<Receiver<ApiResponse>>,
    /// Last issued request id; incremented for each user-initiated request
    request_id: u64,
}

impl App {
    /// Create a new App from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            tab: Tab::Single,
            single: SingleState::new(&config.translation),
            batch: BatchState::new(),
            dictionary: DictionaryState::new(),
            history: HistoryState::new(),
            health: HealthState::new(),
            notification: NotificationState::new(),
            help: HelpState::new(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Create an App with an empty, non-persisting history (for tests)
    #[cfg(test)]
    pub fn new_for_tests(config: &Config) -> Self {
        let mut app = Self::new(config);
        app.history = HistoryState::empty();
        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Issue a fresh request id for a user-initiated request
    pub fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    /// Send a request to the worker. Returns false when no worker is
    /// connected (the channels were never set or the worker died).
    pub fn send_request(&mut self, request: ApiRequest) -> bool {
        match self.request_tx {
            Some(ref tx) => tx.send(request).is_ok(),
            None => false,
        }
    }

    /// Append a completed translation to the history log, surfacing a
    /// warning when the log could not be persisted.
    pub fn record_history(&mut self, source: &str, translation: &str) {
        if let Err(e) = self.history.record(source, translation) {
            self.notification.show_warning(&format!(
                "Failed to save history: {e}. History will work for this session only."
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new_for_tests(&Config::default())
    }

    #[test]
    fn test_app_initialization() {
        let app = test_app();
        assert_eq!(app.tab, Tab::Single);
        assert!(!app.should_quit());
        assert!(app.single.result.is_none());
        assert_eq!(app.history.total_count(), 0);
    }

    #[test]
    fn test_tab_cycle_forward() {
        let mut tab = Tab::Single;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(tab);
            tab = tab.next();
        }
        assert_eq!(seen, Tab::ALL.to_vec());
        assert_eq!(tab, Tab::Single);
    }

    #[test]
    fn test_tab_cycle_backward() {
        assert_eq!(Tab::Single.previous(), Tab::History);
        assert_eq!(Tab::History.previous(), Tab::Dictionary);
    }

    #[test]
    fn test_next_previous_are_inverse() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().previous(), tab);
            assert_eq!(tab.previous().next(), tab);
        }
    }

    #[test]
    fn test_request_ids_increase() {
        let mut app = test_app();
        let a = app.next_request_id();
        let b = app.next_request_id();
        assert!(b > a);
    }

    #[test]
    fn test_send_request_without_worker_fails() {
        let mut app = test_app();
        assert!(!app.send_request(crate::api::ApiRequest::CheckHealth));
    }

    #[test]
    fn test_send_request_with_worker_channel() {
        let mut app = test_app();
        let (request_tx, request_rx) = std::sync::mpsc::channel();
        let (_response_tx, response_rx) = std::sync::mpsc::channel();
        app.set_channels(request_tx, response_rx);

        assert!(app.send_request(crate::api::ApiRequest::CheckHealth));
        assert!(matches!(
            request_rx.try_recv(),
            Ok(crate::api::ApiRequest::CheckHealth)
        ));
    }

    #[test]
    fn test_record_history_updates_log() {
        let mut app = test_app();
        app.record_history("hello", "nua");
        assert_eq!(app.history.total_count(), 1);
    }
}
