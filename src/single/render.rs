use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::OptionField;
use crate::app::App;

const OPTIONS_PANEL_HEIGHT: u16 = 4;

/// Render the Single tab: input on top, result below, with the generation
/// options panel squeezed between them when open.
pub fn render(app: &mut App, frame: &mut Frame, area: Rect) {
    let constraints = if app.single.options_visible {
        vec![
            Constraint::Percentage(40),
            Constraint::Length(OPTIONS_PANEL_HEIGHT),
            Constraint::Min(4),
        ]
    } else {
        vec![Constraint::Percentage(40), Constraint::Min(4)]
    };
    let layout = Layout::vertical(constraints).split(area);

    render_input(app, frame, layout[0]);
    if app.single.options_visible {
        render_options(app, frame, layout[1]);
        render_result(app, frame, layout[2]);
    } else {
        render_result(app, frame, layout[1]);
    }
}

fn render_input(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!(" English Text ({} chars) ", app.single.char_count());
    let border_color = if app.single.options_visible {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    app.single.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(&app.single.textarea, area);
}

fn render_options(app: &App, frame: &mut Frame, area: Rect) {
    let selected = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::REVERSED);
    let unselected = Style::default();

    let max_length_style = if app.single.selected_option == OptionField::MaxLength {
        selected
    } else {
        unselected
    };
    let num_beams_style = if app.single.selected_option == OptionField::NumBeams {
        selected
    } else {
        unselected
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" Max Length: {:>3} ", app.single.max_length),
            max_length_style,
        )),
        Line::from(vec![
            Span::styled(
                format!(" Num Beams:  {:>3} ", app.single.num_beams),
                num_beams_style,
            ),
            Span::styled(
                "  higher is better quality but slower",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Generation Options ")
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        area,
    );
}

fn render_result(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ibani Translation ")
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = if app.single.loading {
        Paragraph::new("Translating...").style(Style::default().fg(Color::Yellow))
    } else if let Some(error) = &app.single.error {
        Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
    } else if let Some(result) = &app.single.result {
        let lines = vec![
            Line::styled(
                result.translation.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Source: ", Style::default().fg(Color::DarkGray)),
                Span::raw(result.source.clone()),
            ]),
            Line::from(vec![
                Span::styled("Model: ", Style::default().fg(Color::DarkGray)),
                Span::styled(result.model.clone(), Style::default().fg(Color::DarkGray)),
            ]),
        ];
        Paragraph::new(lines)
    } else {
        Paragraph::new("Enter English text and press Ctrl+T to translate")
            .style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
