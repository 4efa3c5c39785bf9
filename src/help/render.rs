use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::content::{HELP_SECTIONS, line_count};

const POPUP_WIDTH: u16 = 56;
const KEY_COLUMN_WIDTH: usize = 18;

/// Render the help popup centered over the whole frame.
pub fn render(frame: &mut Frame) {
    // Borders plus a footer line
    let height = line_count() as u16 + 3;
    let area = centered(frame.area(), POPUP_WIDTH, height);

    let mut lines = Vec::new();
    for (i, section) in HELP_SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, action) in section.bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {key:<KEY_COLUMN_WIDTH$}"),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(*action),
            ]));
        }
    }

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_bottom(" Esc or F1 to close ")
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}

/// A rect of the given size centered in the frame, clamped to fit.
fn centered(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);

    Rect {
        x: (frame_area.width - width) / 2,
        y: (frame_area.height - height) / 2,
        width,
        height,
    }
}
