use flashdeck_lib::flashcards::{FlashcardError, FlashcardRepository};
use flashdeck_lib::notify::{Notice, NoticeKind};
use flashdeck_lib::study::StudyNavigator;
use flashdeck_lib::{StudySession, View};

#[test]
fn test_card_lifecycle_keeps_deck_count_in_sync() {
    let mut repo = FlashcardRepository::new();
    let math = repo.create_deck("Math").unwrap();

    let card = repo.create_card(math.id, "1+1", "2").unwrap();
    assert_eq!(repo.get_deck(math.id).unwrap().card_count, 1);

    repo.delete_card(card.id).unwrap();
    assert_eq!(repo.get_deck(math.id).unwrap().card_count, 0);
    assert!(repo.list_cards(math.id).unwrap().is_empty());
    assert_eq!(repo.list_decks().len(), 1);
}

#[test]
fn test_deleting_a_deck_removes_its_cards() {
    let mut repo = FlashcardRepository::new();
    let deck = repo.create_deck("Spanish").unwrap();
    let card = repo.create_card(deck.id, "Hello", "Hola").unwrap();

    repo.delete_deck(deck.id).unwrap();

    let err = repo.list_cards(deck.id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(repo.update_card(card.id, "q", "a"), Err(FlashcardError::CardNotFound(card.id)));
    assert!(repo.list_decks().is_empty());
}

#[test]
fn test_blank_deck_titles_are_rejected() {
    let mut repo = FlashcardRepository::new();

    assert!(matches!(repo.create_deck(""), Err(FlashcardError::Validation { .. })));
    assert!(matches!(repo.create_deck("   "), Err(FlashcardError::Validation { .. })));

    let spanish = repo.create_deck("Spanish").unwrap();
    assert_eq!(repo.list_decks(), vec![spanish]);
}

#[test]
fn test_navigator_over_three_cards() {
    let mut repo = FlashcardRepository::new();
    let deck = repo.create_deck("Capitals").unwrap();
    for (q, a) in [("France", "Paris"), ("Spain", "Madrid"), ("Italy", "Rome")] {
        repo.create_card(deck.id, q, a).unwrap();
    }

    let mut nav = repo.start_study(deck.id).unwrap();
    nav.previous();
    assert_eq!(nav.position(), Some(0));

    nav.flip();
    for _ in 0..4 {
        nav.next();
    }
    assert_eq!(nav.position(), Some(2));
    assert!(!nav.is_revealed());
    assert_eq!(nav.current_card().unwrap().answer, "Rome");
}

#[test]
fn test_empty_navigator_signals_empty_deck() {
    let mut nav = StudyNavigator::new(Vec::new());

    nav.flip();
    nav.next();
    nav.previous();

    assert_eq!(nav.current_card(), Err(FlashcardError::EmptyDeck));
    assert!(!nav.is_revealed());
}

#[test]
fn test_session_reports_every_operation() {
    let mut session = StudySession::new(FlashcardRepository::new(), Vec::<Notice>::new());

    let deck = session.save_deck(None, "Math").unwrap();
    session.select_deck(deck.id).unwrap();
    assert!(session.save_card(None, "", "2").is_err());
    let card = session.save_card(None, "1+1", "2").unwrap().unwrap();
    assert_eq!(session.start_studying(), Ok(true));
    assert!(matches!(session.view(), View::Study { .. }));
    session.back_to_cards();
    session.delete_card(card.id).unwrap();
    assert_eq!(session.start_studying(), Err(FlashcardError::EmptyDeck));

    let kinds: Vec<_> = session.notifier().iter().map(|n| (n.kind, n.title.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (NoticeKind::Success, "Deck created"),
            (NoticeKind::Error, "Missing information"),
            (NoticeKind::Success, "Card added"),
            (NoticeKind::Success, "Card deleted"),
            (NoticeKind::Error, "Nothing to study"),
        ]
    );
}
