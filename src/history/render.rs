use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

/// Render the History tab: a search filter over the selectable log.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let layout = Layout::vertical([Constraint::Length(3), Constraint::Min(4)]).split(area);

    render_search(app, frame, layout[0]);
    render_entries(app, frame, layout[1]);
}

fn render_search(app: &mut App, frame: &mut Frame, area: Rect) {
    app.history.search_textarea_mut().set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search history ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(app.history.search_textarea(), area);
}

fn render_entries(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!(" Translation History ({}) ", app.history.total_count());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.history.total_count() == 0 {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "No translation history yet",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                "Your translations will appear here",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered();
        frame.render_widget(empty.block(block), area);
        return;
    }

    if app.history.filtered_count() == 0 {
        let message = format!("No results found for \"{}\"", app.history.search_query());
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(block),
            area,
        );
        return;
    }

    let dim = Style::default().fg(Color::DarkGray);
    let items: Vec<ListItem> = app
        .history
        .filtered_entries()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![Span::styled("English: ", dim), Span::raw(entry.source.clone())]),
                Line::from(vec![
                    Span::styled("Ibani:   ", dim),
                    Span::styled(
                        entry.translation.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(
                    entry
                        .timestamp
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                    dim,
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut list_state = ListState::default().with_selected(Some(app.history.selected_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
