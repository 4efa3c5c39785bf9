use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::state::Notification;

const MAX_WIDTH: u16 = 60;

/// Render the current notification as a small box in the bottom-right
/// corner, above the help line.
pub fn render(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();

    let text_width = notification.message.chars().count() as u16 + 4;
    let width = text_width.min(MAX_WIDTH).min(area.width);
    let height = 3u16.min(area.height);

    let popup = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let (fg, bg) = notification.notification_type.colors();
    let style = Style::default().fg(fg).bg(bg);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(notification.message.as_str())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        popup,
    );
}
