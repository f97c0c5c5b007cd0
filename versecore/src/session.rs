//! Reading session - the object the reader window drives
//!
//! Owns the catalog, the progress store and the navigation state. Every
//! transition that moves the reader saves progress; failures are logged and
//! leave the previous state in place.

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::library::Catalog;
use crate::navigation::{NavigationState, Phase};
use crate::progress::ProgressStore;

pub struct Session {
    catalog: Catalog,
    store: ProgressStore,
    state: NavigationState,
    books: Vec<String>,
}

impl Session {
    pub fn new(config: &ReaderConfig) -> Self {
        Self::with_parts(config.catalog(), config.progress_store())
    }

    pub fn with_parts(catalog: Catalog, store: ProgressStore) -> Self {
        let mut session = Self {
            catalog,
            store,
            state: NavigationState::new(),
            books: Vec::new(),
        };
        session.refresh_books();
        session
    }

    /// Book names from the last catalog scan
    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rescan the data directory. A failed scan empties the list.
    pub fn refresh_books(&mut self) {
        self.books = match self.catalog.list() {
            Ok(books) => books,
            Err(e) => {
                tracing::error!(error = %e, "could not list books");
                Vec::new()
            }
        };
    }

    /// Load `name` and open its first chapter.
    pub fn select_book(&mut self, name: &str) -> Result<()> {
        let book = self.catalog.open(name).map_err(|e| {
            tracing::error!(book = name, error = %e, "could not open book");
            e
        })?;

        let first = book.first_chapter();
        self.state.select_book(book);
        if let Some(chapter) = first {
            self.state.select_chapter(chapter);
        } else {
            tracing::warn!(book = name, "book has no chapters");
        }
        tracing::info!(book = name, "opened book");
        self.save();
        Ok(())
    }

    /// Picker choice of a book. Choosing the open book again keeps the
    /// current position; returns whether anything changed.
    pub fn choose_book(&mut self, name: &str) -> Result<bool> {
        if self.state.book() == Some(name) {
            return Ok(false);
        }
        self.select_book(name)?;
        Ok(true)
    }

    /// Picker choice of a chapter. Choosing the current chapter is a no-op.
    pub fn choose_chapter(&mut self, chapter: u32) -> bool {
        if self.state.chapter() == Some(chapter) {
            return false;
        }
        self.select_chapter(chapter)
    }

    pub fn select_chapter(&mut self, chapter: u32) -> bool {
        let moved = self.state.select_chapter(chapter);
        if moved {
            self.save();
        }
        moved
    }

    pub fn next(&mut self) -> bool {
        let moved = self.state.next();
        if moved {
            self.save();
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.state.previous();
        if moved {
            self.save();
        }
        moved
    }

    /// Return to the saved position, if there is one. Returns true when a
    /// book was reopened.
    pub fn restore_saved(&mut self) -> bool {
        let Some(record) = self.store.load() else {
            return false;
        };

        match self.catalog.open(&record.book) {
            Ok(book) => {
                self.state.restore(book, record.chapter, record.verse);
                tracing::info!(
                    book = %record.book,
                    chapter = record.chapter,
                    verse = record.verse,
                    "restored reading position"
                );
                true
            }
            Err(e) => {
                tracing::warn!(book = %record.book, error = %e, "saved book is unavailable");
                false
            }
        }
    }

    pub fn current_verse(&self) -> &str {
        self.state.current_verse()
    }

    /// One-line summary for the status bar
    pub fn status_line(&self) -> String {
        let book = self.state.book().unwrap_or_default();
        match self.state.phase() {
            Phase::NoBook => format!("{} books", self.books.len()),
            Phase::BookSelected => format!("{}  |  no chapter", book),
            Phase::ChapterSelected { chapter, verse } => {
                let count = self.state.verse_count();
                if count == 0 {
                    format!("{} {}  |  no verses", book, chapter)
                } else {
                    format!("{} {}  |  verse {} of {}", book, chapter, verse + 1, count)
                }
            }
        }
    }

    fn save(&self) {
        let Some(record) = self.state.progress_record() else {
            return;
        };
        if let Err(e) = self.store.save(&record) {
            tracing::warn!(error = %e, "could not save progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VerseError;
    use crate::navigation::VERSE_NOT_FOUND;
    use crate::progress::ProgressRecord;
    use tempfile::TempDir;

    struct Fixture {
        _dir: TempDir,
        catalog: Catalog,
        store: ProgressStore,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        std::fs::write(
            data.join("genesis.txt"),
            "Genesis 1\nIn the beginning\nAnd the earth\nGenesis 2\nThus the heavens\n",
        )
        .unwrap();
        std::fs::write(data.join("exodus.txt"), "Exodus 1\nNow these are the names\n").unwrap();
        std::fs::write(data.join("notes.md"), "ignored").unwrap();

        Fixture {
            catalog: Catalog::new(&data, "txt"),
            store: ProgressStore::new(dir.path().join("progress.txt")),
            _dir: dir,
        }
    }

    impl Fixture {
        fn session(&self) -> Session {
            Session::with_parts(self.catalog.clone(), self.store.clone())
        }
    }

    #[test]
    fn test_lists_books_on_start() {
        let fx = fixture();
        let session = fx.session();
        assert_eq!(session.books(), ["exodus", "genesis"]);
        assert_eq!(session.state().phase(), Phase::NoBook);
        assert_eq!(session.status_line(), "2 books");
    }

    #[test]
    fn test_select_book_opens_first_chapter_and_saves() {
        let fx = fixture();
        let mut session = fx.session();
        session.select_book("genesis").unwrap();

        assert_eq!(session.state().phase(), Phase::ChapterSelected { chapter: 1, verse: 0 });
        assert_eq!(session.current_verse(), "In the beginning");
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 1, 0)));
    }

    #[test]
    fn test_failed_book_keeps_state() {
        let fx = fixture();
        let mut session = fx.session();
        session.select_book("genesis").unwrap();
        session.next();
        let before = session.state().clone();

        let err = session.select_book("leviticus").unwrap_err();
        assert!(matches!(err, VerseError::Io { .. }));
        assert!(err.is_missing());
        assert_eq!(session.state(), &before);
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 1, 1)));
    }

    #[test]
    fn test_unreadable_book_keeps_state() {
        let fx = fixture();
        std::fs::write(fx.catalog.path_for("broken"), b"B 1\n\xff\xfe\n").unwrap();
        let mut session = fx.session();
        assert_eq!(session.books(), ["broken", "exodus", "genesis"]);

        session.select_book("exodus").unwrap();
        let before = session.state().clone();

        let err = session.select_book("broken").unwrap_err();
        assert!(matches!(err, VerseError::Io { .. }));
        assert!(!err.is_missing());
        assert_eq!(session.state(), &before);
        assert_eq!(session.current_verse(), "Now these are the names");
    }

    #[test]
    fn test_navigation_saves_every_move() {
        let fx = fixture();
        let mut session = fx.session();
        session.select_book("genesis").unwrap();

        assert!(session.next());
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 1, 1)));
        assert!(!session.next());
        assert_eq!(session.status_line(), "genesis 1  |  verse 2 of 2");

        assert!(session.select_chapter(2));
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 2, 0)));

        assert!(session.select_chapter(1));
        assert!(session.next());
        assert!(session.previous());
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 1, 0)));
    }

    #[test]
    fn test_choosing_current_selection_keeps_place() {
        let fx = fixture();
        let mut session = fx.session();
        assert!(session.choose_book("genesis").unwrap());
        session.next();

        assert!(!session.choose_book("genesis").unwrap());
        assert!(!session.choose_chapter(1));
        assert_eq!(session.state().phase(), Phase::ChapterSelected { chapter: 1, verse: 1 });
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("genesis", 1, 1)));

        assert!(session.choose_chapter(2));
        assert_eq!(session.state().phase(), Phase::ChapterSelected { chapter: 2, verse: 0 });
        assert!(session.choose_book("exodus").unwrap());
        assert_eq!(fx.store.load(), Some(ProgressRecord::new("exodus", 1, 0)));
    }

    #[test]
    fn test_restore_saved_position() {
        let fx = fixture();
        {
            let mut session = fx.session();
            session.select_book("genesis").unwrap();
            session.next();
        }

        let mut session = fx.session();
        assert!(session.restore_saved());
        assert_eq!(session.state().phase(), Phase::ChapterSelected { chapter: 1, verse: 1 });
        assert_eq!(session.current_verse(), "And the earth");
    }

    #[test]
    fn test_restore_without_progress() {
        let fx = fixture();
        let mut session = fx.session();
        assert!(!session.restore_saved());
        assert_eq!(session.state().phase(), Phase::NoBook);
        assert_eq!(session.current_verse(), VERSE_NOT_FOUND);
    }

    #[test]
    fn test_restore_with_corrupt_progress() {
        let fx = fixture();
        std::fs::write(fx.store.path(), "genesis\ntwo\n0").unwrap();
        let mut session = fx.session();
        assert!(!session.restore_saved());
        assert_eq!(session.state().phase(), Phase::NoBook);
    }

    #[test]
    fn test_restore_missing_book() {
        let fx = fixture();
        fx.store.save(&ProgressRecord::new("numbers", 1, 0)).unwrap();
        let mut session = fx.session();
        assert!(!session.restore_saved());
        assert_eq!(session.state().phase(), Phase::NoBook);
    }

    #[test]
    fn test_missing_data_dir_gives_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let session = Session::with_parts(
            Catalog::new(dir.path().join("absent"), "txt"),
            ProgressStore::new(dir.path().join("progress.txt")),
        );
        assert!(session.books().is_empty());
    }
}
