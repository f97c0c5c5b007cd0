//! Library - the catalog of book files in the data directory

use crate::book::Book;
use crate::error::{Result, VerseError};
use std::path::{Path, PathBuf};

/// Default extension for book files
pub const BOOK_EXTENSION: &str = "txt";

/// Books available in one directory
#[derive(Clone, Debug)]
pub struct Catalog {
    dir: PathBuf,
    extension: String,
}

impl Catalog {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Book names (file stems) sorted ascending.
    ///
    /// Only files (or links to files) with the catalog's extension are
    /// listed. Any error while reading the directory fails the whole listing.
    pub fn list(&self) -> Result<Vec<String>> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|e| VerseError::io(&self.dir, e))?;

        let mut books = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| VerseError::io(&self.dir, e))?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => books.push(stem.to_string()),
                None => tracing::debug!(path = %path.display(), "skipping book with non-UTF-8 name"),
            }
        }

        books.sort();
        tracing::debug!(dir = %self.dir.display(), count = books.len(), "listed books");
        Ok(books)
    }

    /// Where the file for `name` lives
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    /// Load and parse the named book
    pub fn open(&self, name: &str) -> Result<Book> {
        Book::open(self.path_for(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_lists_sorted_text_books() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "genesis.txt", "Genesis 1\n");
        touch(dir.path(), "exodus.txt", "Exodus 1\n");
        touch(dir.path(), "readme.md", "# notes\n");

        let catalog = Catalog::new(dir.path(), BOOK_EXTENSION);
        assert_eq!(catalog.list().unwrap(), vec!["exodus", "genesis"]);
    }

    #[test]
    fn test_skips_directories_and_other_case() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("psalms.txt")).unwrap();
        touch(dir.path(), "LEVITICUS.TXT", "");
        touch(dir.path(), "ruth.txt", "");

        let catalog = Catalog::new(dir.path(), "txt");
        assert_eq!(catalog.list().unwrap(), vec!["ruth"]);
    }

    #[test]
    fn test_native_ordering() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "C.txt", "1 kings.txt"] {
            touch(dir.path(), name, "");
        }
        let catalog = Catalog::new(dir.path(), "txt");
        assert_eq!(catalog.list().unwrap(), vec!["1 kings", "C", "a", "b"]);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path().join("absent"), "txt");
        let err = catalog.list().unwrap_err();
        assert!(err.is_missing());
    }

    #[test]
    fn test_open_by_name() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "jude.txt", "Jude 1\nverse one\nverse two\n");

        let catalog = Catalog::new(dir.path(), "txt");
        assert_eq!(catalog.path_for("jude"), dir.path().join("jude.txt"));

        let book = catalog.open("jude").unwrap();
        assert_eq!(book.name, "jude");
        assert_eq!(book.verses(1).map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_open_missing_book_is_io_error() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new(dir.path(), "txt");

        let err = catalog.open("obadiah").unwrap_err();
        assert!(err.is_missing());
        match err {
            VerseError::Io { path, .. } => assert_eq!(path, dir.path().join("obadiah.txt")),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
        if std::fs::write(&odd, "").is_err() {
            // some filesystems refuse non-UTF-8 names outright
            return;
        }
        touch(dir.path(), "ruth.txt", "");

        let catalog = Catalog::new(dir.path(), "txt");
        assert_eq!(catalog.list().unwrap(), vec!["ruth"]);
    }
}
