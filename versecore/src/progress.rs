//! Reading progress persistence
//!
//! The progress file holds three lines: book name, chapter number, verse
//! index. It is overwritten on every save and read once at startup.

use crate::error::{Result, VerseError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the reader left off
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: usize,
}

impl ProgressRecord {
    pub fn new(book: impl Into<String>, chapter: u32, verse: usize) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Parse the three-line form. Lines after the third are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let (Some(book), Some(chapter), Some(verse)) = (lines.next(), lines.next(), lines.next())
        else {
            return Err(VerseError::Parse("expected three lines".to_string()));
        };

        let chapter: u32 = chapter
            .parse()
            .map_err(|_| VerseError::Parse(format!("bad chapter number {:?}", chapter)))?;
        let verse: usize = verse
            .parse()
            .map_err(|_| VerseError::Parse(format!("bad verse index {:?}", verse)))?;

        Ok(Self::new(book, chapter, verse))
    }
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.book, self.chapter, self.verse)
    }
}

/// Reads and writes the progress file
#[derive(Clone, Debug)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the progress file with `record`.
    pub fn save(&self, record: &ProgressRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| VerseError::io(parent, e))?;
        }
        std::fs::write(&self.path, record.to_string()).map_err(|e| VerseError::io(&self.path, e))?;
        tracing::trace!(
            book = %record.book,
            chapter = record.chapter,
            verse = record.verse,
            "saved progress"
        );
        Ok(())
    }

    /// The saved record, or `None` if there is nothing usable on disk.
    pub fn load(&self) -> Option<ProgressRecord> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved progress");
                return None;
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read progress");
                return None;
            }
        };

        match ProgressRecord::parse(&text) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring saved progress");
                None
            }
        }
    }
}
