use std::time::{Duration, Instant};

use crate::api::ApiError;
use crate::api::types::HealthResponse;

/// How often the server is polled in the background.
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Last known state of the translation server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    /// No response received yet
    Checking,
    Online(HealthResponse),
    Offline,
}

/// State behind the server status indicator.
pub struct HealthState {
    pub status: ServerStatus,
    last_polled: Option<Instant>,
}

impl HealthState {
    pub fn new() -> Self {
        Self {
            status: ServerStatus::Checking,
            last_polled: None,
        }
    }

    /// True when a poll is due: immediately on startup, then every 30s.
    pub fn should_poll(&self) -> bool {
        match self.last_polled {
            None => true,
            Some(at) => at.elapsed() >= HEALTH_POLL_INTERVAL,
        }
    }

    pub fn mark_polled(&mut self) {
        self.last_polled = Some(Instant::now());
    }

    /// The latest response always wins; health polls carry no request id.
    pub fn apply(&mut self, result: Result<HealthResponse, ApiError>) {
        self.status = match result {
            Ok(health) => ServerStatus::Online(health),
            Err(e) => {
                #[cfg(debug_assertions)]
                log::debug!("health check failed: {e}");
                let _ = e;
                ServerStatus::Offline
            }
        };
    }
}

impl Default for HealthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_response() -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            model_loaded: true,
            model_path: "/models/marian_ibani".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_checking_and_due() {
        let state = HealthState::new();
        assert_eq!(state.status, ServerStatus::Checking);
        assert!(state.should_poll());
    }

    #[test]
    fn test_mark_polled_defers_next_poll() {
        let mut state = HealthState::new();
        state.mark_polled();
        assert!(!state.should_poll());
    }

    #[test]
    fn test_apply_success_goes_online() {
        let mut state = HealthState::new();
        state.apply(Ok(online_response()));
        assert!(matches!(state.status, ServerStatus::Online(_)));
    }

    #[test]
    fn test_apply_error_goes_offline() {
        let mut state = HealthState::new();
        state.apply(Ok(online_response()));
        state.apply(Err(ApiError::Network("refused".to_string())));
        assert_eq!(state.status, ServerStatus::Offline);
    }

    #[test]
    fn test_recovery_after_offline() {
        let mut state = HealthState::new();
        state.apply(Err(ApiError::Network("refused".to_string())));
        state.apply(Ok(online_response()));
        assert!(matches!(state.status, ServerStatus::Online(_)));
    }
}
