//! Book representation and plain-text chapter parsing
//!
//! A book file is a sequence of lines. A line whose trimmed form ends in
//! whitespace followed by digits (`Genesis 12`) opens a chapter; every other
//! line is a verse of the most recent chapter, kept verbatim. Lines before the
//! first header are dropped.
//!
//! A verse that happens to end in a number (`... in the year 1500`) is read as
//! a chapter header. This matches the files the reader was built for and is a
//! known limitation of the format.

use crate::error::{Result, VerseError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Chapter number to verses, in file order. Keys iterate ascending.
pub type ChapterMap = BTreeMap<u32, Vec<String>>;

/// A loaded book
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub name: String,
    pub path: PathBuf,
    pub chapters: ChapterMap,
}

impl Book {
    /// Load and parse a book file. The name is the file stem.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| VerseError::io(path, e))?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let book = Book {
            path: path.to_path_buf(),
            ..Book::from_text(name, &content)
        };
        tracing::debug!(
            book = %book.name,
            chapters = book.chapter_count(),
            "parsed book"
        );
        Ok(book)
    }

    /// Build a book from text already in memory.
    pub fn from_text(name: impl Into<String>, content: &str) -> Self {
        Book {
            name: name.into(),
            path: PathBuf::new(),
            chapters: parse_chapters(content.lines()),
        }
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Chapter numbers in ascending order
    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters.keys().copied().collect()
    }

    /// The lowest chapter number, if the book has any chapters
    pub fn first_chapter(&self) -> Option<u32> {
        self.chapters.keys().next().copied()
    }

    pub fn verses(&self, chapter: u32) -> Option<&[String]> {
        self.chapters.get(&chapter).map(Vec::as_slice)
    }

    /// Total verses across all chapters
    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(Vec::len).sum()
    }
}

/// Group lines into chapters.
pub fn parse_chapters<'a, I>(lines: I) -> ChapterMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chapters = ChapterMap::new();
    let mut current: Option<u32> = None;

    for line in lines {
        if let Some(number) = chapter_header(line) {
            chapters.insert(number, Vec::new());
            current = Some(number);
        } else if let Some(number) = current {
            chapters.entry(number).or_default().push(line.to_string());
        }
    }

    chapters
}

/// Chapter number if `line` is a chapter header.
///
/// The trimmed line must be `<text><whitespace><digits>`. A trailing number
/// too large for `u32` is not a header.
pub fn chapter_header(line: &str) -> Option<u32> {
    let trimmed = line.trim();
    let (head, digits) = trimmed.rsplit_once(char::is_whitespace)?;
    if head.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
