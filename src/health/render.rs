use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use super::state::{HealthState, ServerStatus};

/// Render the one-line server status indicator.
pub fn render(state: &HealthState, frame: &mut Frame, area: Rect) {
    let line = match &state.status {
        ServerStatus::Checking => Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Checking server status...",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        ServerStatus::Online(health) => {
            let mut spans = vec![
                Span::styled("● ", Style::default().fg(Color::Green)),
                Span::styled("API Server Online", Style::default().fg(Color::Green)),
            ];
            if health.model_loaded {
                spans.push(Span::styled(
                    " * Model Loaded",
                    Style::default().fg(Color::Green),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", health.model_path),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        }
        ServerStatus::Offline => Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("API Server Offline", Style::default().fg(Color::Red)),
            Span::styled(
                "  Make sure to start the API server",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    };

    frame.render_widget(line, area);
}
