use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

/// Render the Dictionary tab: a one-line search input over the entry list.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let layout = Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).split(area);

    render_search(app, frame, layout[0]);
    render_entries(app, frame, layout[1]);
}

fn render_search(app: &mut App, frame: &mut Frame, area: Rect) {
    app.dictionary.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" English Word ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(&app.dictionary.textarea, area);
}

fn render_entries(app: &App, frame: &mut Frame, area: Rect) {
    let title = if app.dictionary.results.is_empty() {
        " Ibani Dictionary ".to_string()
    } else {
        format!(" Search Results ({}) ", app.dictionary.results.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = if app.dictionary.loading {
        Paragraph::new("Searching...").style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = &app.dictionary.error {
        Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
    } else if app.dictionary.results.is_empty() {
        Paragraph::new("Enter an English word and press Enter to search the Ibani dictionary")
            .style(Style::default().fg(Color::DarkGray))
    } else {
        let mut lines = Vec::with_capacity(app.dictionary.results.len() * 3);
        for entry in &app.dictionary.results {
            lines.push(Line::from(vec![
                Span::styled(
                    entry.ibani.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", entry.pos),
                    Style::default().fg(Color::Magenta),
                ),
            ]));
            lines.push(Line::raw(format!("  {}", entry.meaning)));
            lines.push(Line::raw(""));
        }
        Paragraph::new(lines).scroll((app.dictionary.scroll_offset, 0))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
