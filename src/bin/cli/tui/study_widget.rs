use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use flashdeck_lib::study::Face;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(nav) = state.session.navigator() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(if state.config.study.show_progress { 3 } else { 0 }),
        ])
        .split(area);

    let (label, text, color) = match nav.visible_face() {
        Ok(Face::Question(text)) => ("Question", text, Color::White),
        Ok(Face::Answer(text)) => ("Answer", text, Color::Green),
        // Empty decks never enter the study view
        Err(_) => return,
    };

    let left = if nav.has_previous() { "\u{2190} " } else { "  " };
    let right = if nav.has_next() { " \u{2192}" } else { "  " };
    let flip_hint = if nav.is_revealed() { "Space: show question" } else { "Space: show answer" };

    let card_text = vec![
        Line::from(""),
        Line::from(Span::styled(label, Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}{}{}", left, flip_hint, right),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let title = state.session.selected_deck()
        .map(|d| format!(" Studying: {} ", d.title))
        .unwrap_or_else(|| " Studying ".to_string());

    let card = Paragraph::new(card_text)
        .block(Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(card, rows[0]);

    if state.config.study.show_progress {
        if let Some(progress) = nav.progress() {
            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL))
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(progress.fraction())
                .label(progress.to_string());
            f.render_widget(gauge, rows[1]);
        }
    }
}
