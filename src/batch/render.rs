use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the Batch tab: line-per-item input on top, numbered results below.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let layout =
        Layout::vertical([Constraint::Percentage(40), Constraint::Min(4)]).split(area);

    render_input(app, frame, layout[0]);
    render_results(app, frame, layout[1]);
}

fn render_input(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!(
        " Source Texts, one per line ({} items) ",
        app.batch.item_count()
    );

    app.batch.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(&app.batch.textarea, area);
}

fn render_results(app: &App, frame: &mut Frame, area: Rect) {
    let title = match &app.batch.results {
        Some(results) => format!(" Results ({}) ", results.count),
        None => " Results ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = if app.batch.loading {
        Paragraph::new("Bulk processing...").style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = &app.batch.error {
        Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
    } else if let Some(results) = &app.batch.results {
        let mut lines = Vec::with_capacity(results.translations.len() * 2);
        for (index, translation) in results.translations.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", index + 1),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    translation.source.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("     "),
                Span::styled(
                    translation.translation.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        Paragraph::new(lines).scroll((app.batch.scroll_offset, 0))
    } else {
        Paragraph::new("Enter one text per line and press Ctrl+T to translate all")
            .style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
