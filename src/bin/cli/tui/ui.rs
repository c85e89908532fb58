use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use flashdeck_lib::View;

use super::app_state::TuiState;
use super::{list_widget, status_bar, study_widget};

const HELP_LINES: &[&str] = &[
    "Decks:  j/k move  Enter open  n new  e rename  d delete",
    "Cards:  j/k move  a add  e edit  d delete  s study  Esc back",
    "Study:  Space flip  h/l previous/next  Esc back",
    "",
    "?: close help  q: quit",
];

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    match state.session.view() {
        View::Decks => list_widget::draw_decks(f, main_area, state),
        View::Cards { .. } => list_widget::draw_cards(f, main_area, state),
        View::Study { .. } => study_widget::draw(f, main_area, state),
    }

    status_bar::draw(f, status_area, state);

    if state.show_help {
        draw_help(f, main_area);
    }
}

fn draw_help(f: &mut Frame, area: Rect) {
    let width = area.width.min(66);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = HELP_LINES.iter().map(|l| Line::from(format!(" {}", l))).collect();
    let help = Paragraph::new(lines)
        .block(Block::default().title(" Keys ").borders(Borders::ALL));

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
