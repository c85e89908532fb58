use crossterm::event::{KeyCode, KeyEvent};

use flashdeck_lib::View;

use super::app_state::TuiState;

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if state.prompt.is_some() {
        handle_input_key(state, key);
        return;
    }

    if key.code == KeyCode::Char('?') {
        state.show_help = !state.show_help;
        return;
    }

    match state.session.view() {
        View::Decks => handle_decks_key(state, key),
        View::Cards { .. } => handle_cards_key(state, key),
        View::Study { .. } => handle_study_key(state, key),
    }
}

fn handle_decks_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => state.open_selected_deck(),
        KeyCode::Char('n') => state.begin_new_deck(),
        KeyCode::Char('e') => state.begin_rename_deck(),
        KeyCode::Char('d') => state.delete_selected_deck(),
        _ => {}
    }
}

fn handle_cards_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => state.back_to_decks(),
        KeyCode::Char('a') => state.begin_add_card(),
        KeyCode::Char('e') => state.begin_edit_card(),
        KeyCode::Char('d') => state.delete_selected_card(),
        KeyCode::Char('s') | KeyCode::Enter => state.start_study(),
        _ => {}
    }
}

fn handle_study_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Esc => state.back_to_cards(),
        KeyCode::Char(' ') | KeyCode::Enter => state.flip(),
        KeyCode::Char('l') | KeyCode::Right => state.next_card(),
        KeyCode::Char('h') | KeyCode::Left => state.previous_card(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use flashdeck_lib::flashcards::{seed_sample_decks, FlashcardRepository};
    use flashdeck_lib::FlashdeckConfig;

    use crate::app::App;
    use crate::tui::app_state::Prompt;

    fn state() -> TuiState {
        let mut repo = FlashcardRepository::new();
        seed_sample_decks(&mut repo).unwrap();
        TuiState::new(App { config: FlashdeckConfig::default(), repo })
    }

    fn press(state: &mut TuiState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_open_and_study_deck() {
        let mut state = state();

        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert!(matches!(state.session.view(), View::Cards { .. }));

        press(&mut state, KeyCode::Char('s'));
        press(&mut state, KeyCode::Char(' '));
        assert!(state.session.navigator().unwrap().is_revealed());

        press(&mut state, KeyCode::Right);
        let nav = state.session.navigator().unwrap();
        assert_eq!(nav.position(), Some(1));
        assert!(!nav.is_revealed());

        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Esc);
        assert!(matches!(state.session.view(), View::Decks));
    }

    #[test]
    fn test_typing_into_prompt() {
        let mut state = state();

        press(&mut state, KeyCode::Char('n'));
        for c in "Artz".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.prompt, Some(Prompt::NewDeck));
        assert_eq!(state.input_text, "Art");

        // 'q' is text while a prompt is open
        press(&mut state, KeyCode::Char('q'));
        assert!(!state.quit);

        press(&mut state, KeyCode::Esc);
        assert!(state.prompt.is_none());
        assert_eq!(state.decks().len(), 3);
    }
}
