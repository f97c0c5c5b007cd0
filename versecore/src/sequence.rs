//! Sequential reading through a whole book, verse after verse

use crate::book::Book;
use std::fmt;

/// One verse with its place in the book
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerseRef<'a> {
    pub book: &'a str,
    pub chapter: u32,
    /// One-based within the chapter
    pub number: usize,
    pub text: &'a str,
}

impl fmt::Display for VerseRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.number)
    }
}

/// A cursor over every verse of a book in chapter order
#[derive(Clone, Debug)]
pub struct VerseSequence {
    book: Book,
    /// (chapter, index within chapter) for every verse
    order: Vec<(u32, usize)>,
    cursor: usize,
}

impl VerseSequence {
    pub fn new(book: Book) -> Self {
        let order = book
            .chapters
            .iter()
            .flat_map(|(&chapter, verses)| (0..verses.len()).map(move |i| (chapter, i)))
            .collect();
        Self {
            book,
            order,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zero-based position in the whole book
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.order.len()
    }

    pub fn current(&self) -> Option<VerseRef<'_>> {
        let &(chapter, index) = self.order.get(self.cursor)?;
        let text = self.book.verses(chapter)?.get(index)?;
        Some(VerseRef {
            book: &self.book.name,
            chapter,
            number: index + 1,
            text,
        })
    }

    /// Advance one verse, crossing chapter boundaries. Stays on the last verse.
    pub fn next(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}
