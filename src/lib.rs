pub mod config;
pub mod flashcards;
pub mod notify;
pub mod session;
pub mod study;

pub use config::FlashdeckConfig;
pub use flashcards::{Deck, Flashcard, FlashcardError, FlashcardRepository};
pub use notify::{LogNotifier, Notice, NoticeKind, Notifier};
pub use session::{StudySession, View};
pub use study::StudyNavigator;
