//! versecore — shared library for the slowVerse readers
//!
//! The reading model (books, catalog, navigation, progress) has no UI types
//! in it; `theme` and `widgets` hold the egui pieces both apps share.

pub mod book;
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod navigation;
pub mod progress;
pub mod sequence;
pub mod session;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use book::{Book, ChapterMap};
pub use config::ReaderConfig;
pub use error::{Result, VerseError};
pub use navigation::{NavigationState, Phase, VERSE_NOT_FOUND};
pub use progress::{ProgressRecord, ProgressStore};
pub use session::Session;
pub use theme::SlowTheme;
