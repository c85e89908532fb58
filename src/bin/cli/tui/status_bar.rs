use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use flashdeck_lib::notify::NoticeKind;
use flashdeck_lib::View;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref notice) = state.flash_message {
        let bg = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let flash = Paragraph::new(format!(" {}", notice))
            .style(Style::default().bg(bg).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    if let Some(ref prompt) = state.prompt {
        let text = format!(" {}: {}\u{2588}", prompt.label(), state.input_text);
        let input = Paragraph::new(text)
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(input, area);
        return;
    }

    let hints = match state.session.view() {
        View::Decks => {
            " j/k: navigate  Enter: open  n: new deck  e: rename  d: delete  ?: help  q: quit "
        }
        View::Cards { .. } => {
            " Esc: back  j/k: navigate  a: add card  e: edit  d: delete  s: study  q: quit "
        }
        View::Study { .. } => {
            " Space: flip  h/l: previous/next  Esc: back to cards  q: quit "
        }
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}
