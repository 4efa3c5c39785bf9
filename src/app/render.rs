use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
};

use super::state::{App, Tab};
use crate::{batch, dictionary, health, help, history, notification, single};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Fixed chrome around a flexible content area
        let layout = Layout::vertical([
            Constraint::Length(1), // Server status
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Active tab content
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        health::render(&self.health, frame, layout[0]);
        self.render_tab_bar(frame, layout[1]);

        match self.tab {
            Tab::Single => single::render(self, frame, layout[2]),
            Tab::Batch => batch::render(self, frame, layout[2]),
            Tab::Dictionary => dictionary::render(self, frame, layout[2]),
            Tab::History => history::render(self, frame, layout[2]),
        }

        self.render_hint_line(frame, layout[3]);

        // Overlays render last
        if let Some(current) = self.notification.current() {
            notification::render(frame, current);
        }
        if self.help.visible {
            help::render(frame);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let titles = Tab::ALL.iter().map(|t| Line::raw(format!(" {} ", t.title())));
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }

    fn render_hint_line(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let hints = match self.tab {
            Tab::Single => " Ctrl+T translate | Ctrl+O options | Ctrl+Y copy | Ctrl+L clear | F1 help",
            Tab::Batch => " Ctrl+T translate all | Ctrl+E export CSV | Ctrl+L clear | F1 help",
            Tab::Dictionary => " Enter search | Up/Down scroll | F1 help",
            Tab::History => {
                if self.history.confirm_clear {
                    " Press y to clear ALL history, any other key to cancel"
                } else {
                    " Type to filter | Ctrl+D delete | Ctrl+Y copy | Ctrl+L clear all | F1 help"
                }
            }
        };

        let style = if self.history.confirm_clear && self.tab == Tab::History {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        frame.render_widget(Line::styled(hints, style), area);
    }
}
