use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app_state::TuiState;

fn list_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn draw_placeholder(f: &mut Frame, area: Rect, block: Block, hint: &'static str) {
    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(help_text).block(block), area);
}

fn draw_list(f: &mut Frame, area: Rect, block: Block, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

pub fn draw_decks(f: &mut Frame, area: Rect, state: &TuiState) {
    let decks = state.decks();
    let block = list_block(" Decks ".to_string());

    if decks.is_empty() {
        draw_placeholder(f, area, block, "  No decks yet. Press n to create one.");
        return;
    }

    let items: Vec<ListItem> = decks.iter().map(|deck| {
        let count = match deck.card_count {
            1 => "1 card".to_string(),
            n => format!("{} cards", n),
        };
        ListItem::new(Line::from(vec![
            Span::styled(deck.title.clone(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(count, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(
                deck.created_at.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
    }).collect();

    draw_list(f, area, block, items, state.deck_selected);
}

pub fn draw_cards(f: &mut Frame, area: Rect, state: &TuiState) {
    let title = state.session.selected_deck()
        .map(|d| format!(" {} ", d.title))
        .unwrap_or_else(|| " Cards ".to_string());
    let block = list_block(title);
    let cards = state.cards();

    if cards.is_empty() {
        draw_placeholder(f, area, block, "  No cards in this deck. Press a to add one.");
        return;
    }

    let items: Vec<ListItem> = cards.iter().enumerate().map(|(i, card)| {
        ListItem::new(Line::from(vec![
            Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(card.question.clone(), Style::default().fg(Color::White)),
            Span::raw("  \u{2192}  "),
            Span::styled(card.answer.clone(), Style::default().fg(Color::Cyan)),
        ]))
    }).collect();

    draw_list(f, area, block, items, state.card_selected);
}
