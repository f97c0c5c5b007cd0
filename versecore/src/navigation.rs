//! Navigation - which book, chapter and verse the reader is on
//!
//! `NavigationState` is a plain value: it knows nothing about files or
//! windows. Loading a book happens elsewhere; a book only reaches
//! [`NavigationState::select_book`] once it parsed successfully, so a failed
//! load leaves the state untouched.

use crate::book::{Book, ChapterMap};
use crate::progress::ProgressRecord;

/// Shown when there is no verse at the current position
pub const VERSE_NOT_FOUND: &str = "verse not found.";

/// Coarse state of the reader
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NoBook,
    BookSelected,
    ChapterSelected { chapter: u32, verse: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    book: Option<String>,
    chapters: ChapterMap,
    chapter: Option<u32>,
    verse: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.book, self.chapter) {
            (None, _) => Phase::NoBook,
            (Some(_), None) => Phase::BookSelected,
            (Some(_), Some(chapter)) => Phase::ChapterSelected {
                chapter,
                verse: self.verse,
            },
        }
    }

    pub fn book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    pub fn chapter(&self) -> Option<u32> {
        self.chapter
    }

    pub fn verse_index(&self) -> usize {
        self.verse
    }

    /// Chapter numbers of the selected book, ascending
    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.keys().copied().collect()
    }

    /// Verses of the selected chapter
    pub fn verses(&self) -> &[String] {
        self.chapter
            .and_then(|c| self.chapters.get(&c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn verse_count(&self) -> usize {
        self.verses().len()
    }

    /// Replace the current book. No chapter is selected afterwards.
    pub fn select_book(&mut self, book: Book) {
        self.book = Some(book.name);
        self.chapters = book.chapters;
        self.chapter = None;
        self.verse = 0;
    }

    /// Move to the start of `chapter`. Returns false if the book has no such
    /// chapter or no book is selected.
    pub fn select_chapter(&mut self, chapter: u32) -> bool {
        if self.book.is_none() || !self.chapters.contains_key(&chapter) {
            return false;
        }
        self.chapter = Some(chapter);
        self.verse = 0;
        true
    }

    /// Step to the next verse, stopping at the last one.
    pub fn next(&mut self) -> bool {
        if self.chapter.is_none() || self.verse + 1 >= self.verse_count() {
            return false;
        }
        self.verse += 1;
        true
    }

    /// Step to the previous verse, stopping at the first one.
    pub fn previous(&mut self) -> bool {
        if self.chapter.is_none() || self.verse == 0 {
            return false;
        }
        self.verse -= 1;
        true
    }

    /// Set the verse index, clamped into the selected chapter.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.chapter.is_none() {
            return false;
        }
        let clamped = index.min(self.verse_count().saturating_sub(1));
        let changed = clamped != self.verse;
        self.verse = clamped;
        changed
    }

    /// Put the reader back where a saved record says. A chapter the book no
    /// longer has leaves only the book selected.
    pub fn restore(&mut self, book: Book, chapter: u32, index: usize) {
        self.select_book(book);
        if self.select_chapter(chapter) {
            self.jump_to(index);
        }
    }

    /// Text of the current verse, or [`VERSE_NOT_FOUND`].
    pub fn current_verse(&self) -> &str {
        self.verses()
            .get(self.verse)
            .map(String::as_str)
            .unwrap_or(VERSE_NOT_FOUND)
    }

    /// A record to persist, once both book and chapter are known
    pub fn progress_record(&self) -> Option<ProgressRecord> {
        let book = self.book.as_ref()?;
        let chapter = self.chapter?;
        Some(ProgressRecord::new(book.clone(), chapter, self.verse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis() -> Book {
        Book::from_text(
            "genesis",
            "Genesis 1\none\ntwo\nthree\nGenesis 2\nfour\nGenesis 3\n",
        )
    }

    fn at_chapter(chapter: u32) -> NavigationState {
        let mut nav = NavigationState::new();
        nav.select_book(genesis());
        assert!(nav.select_chapter(chapter));
        nav
    }

    #[test]
    fn test_starts_with_no_book() {
        let nav = NavigationState::new();
        assert_eq!(nav.phase(), Phase::NoBook);
        assert_eq!(nav.current_verse(), VERSE_NOT_FOUND);
        assert!(nav.progress_record().is_none());
    }

    #[test]
    fn test_select_book_clears_chapter() {
        let mut nav = at_chapter(1);
        nav.next();
        nav.select_book(Book::from_text("ruth", "Ruth 1\nx\n"));

        assert_eq!(nav.phase(), Phase::BookSelected);
        assert_eq!(nav.book(), Some("ruth"));
        assert_eq!(nav.verse_index(), 0);
        assert_eq!(nav.chapter_numbers(), vec![1]);
        assert!(nav.progress_record().is_none());
    }

    #[test]
    fn test_select_chapter_resets_verse() {
        let mut nav = at_chapter(1);
        nav.next();
        nav.next();
        assert!(nav.select_chapter(2));
        assert_eq!(nav.phase(), Phase::ChapterSelected { chapter: 2, verse: 0 });
        assert_eq!(nav.current_verse(), "four");
    }

    #[test]
    fn test_select_missing_chapter_is_noop() {
        let mut nav = at_chapter(1);
        nav.next();
        let before = nav.clone();
        assert!(!nav.select_chapter(9));
        assert_eq!(nav, before);
    }

    #[test]
    fn test_select_chapter_without_book() {
        let mut nav = NavigationState::new();
        assert!(!nav.select_chapter(1));
        assert_eq!(nav.phase(), Phase::NoBook);
    }

    #[test]
    fn test_next_clamps_at_last_verse() {
        let mut nav = at_chapter(1);
        for _ in 0..10 {
            nav.next();
        }
        assert_eq!(nav.verse_index(), 2);
        assert_eq!(nav.current_verse(), "three");
        assert!(!nav.next());
    }

    #[test]
    fn test_previous_clamps_at_first_verse() {
        let mut nav = at_chapter(1);
        nav.next();
        for _ in 0..10 {
            nav.previous();
        }
        assert_eq!(nav.verse_index(), 0);
        assert!(!nav.previous());
    }

    #[test]
    fn test_transitions_need_a_chapter() {
        let mut nav = NavigationState::new();
        nav.select_book(genesis());
        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.jump_to(2));
        assert_eq!(nav.phase(), Phase::BookSelected);
    }

    #[test]
    fn test_empty_chapter_shows_placeholder() {
        let mut nav = at_chapter(3);
        assert_eq!(nav.verse_count(), 0);
        assert_eq!(nav.current_verse(), VERSE_NOT_FOUND);
        assert!(!nav.next());
        assert!(!nav.jump_to(5));
        assert_eq!(nav.verse_index(), 0);
        assert_eq!(nav.current_verse(), VERSE_NOT_FOUND);
    }

    #[test]
    fn test_jump_clamps() {
        let mut nav = at_chapter(1);
        assert!(nav.jump_to(100));
        assert_eq!(nav.verse_index(), 2);
        assert!(nav.jump_to(1));
        assert_eq!(nav.current_verse(), "two");
        assert!(!nav.jump_to(1));
    }

    #[test]
    fn test_restore() {
        let mut nav = NavigationState::new();
        nav.restore(genesis(), 1, 2);
        assert_eq!(nav.phase(), Phase::ChapterSelected { chapter: 1, verse: 2 });
        assert_eq!(nav.progress_record(), Some(ProgressRecord::new("genesis", 1, 2)));
    }

    #[test]
    fn test_restore_clamps_index() {
        let mut nav = NavigationState::new();
        nav.restore(genesis(), 2, 40);
        assert_eq!(nav.phase(), Phase::ChapterSelected { chapter: 2, verse: 0 });
    }

    #[test]
    fn test_restore_missing_chapter() {
        let mut nav = NavigationState::new();
        nav.restore(genesis(), 50, 1);
        assert_eq!(nav.phase(), Phase::BookSelected);
        assert_eq!(nav.verse_index(), 0);
    }
}
