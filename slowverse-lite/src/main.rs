//! slowVerse lite - read one book from start to finish, one verse at a time
//!
//! Opens the book given as the first argument, or else the first book in the
//! configured data folder. Nothing is saved between runs.

mod app;

use app::VerseLiteApp;
use eframe::NativeOptions;
use std::path::PathBuf;
use versecore::{Book, ReaderConfig, SlowTheme};

/// The book named on the command line, or the first one in the catalog
fn pick_book(config: &ReaderConfig) -> Option<Book> {
    let path = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => path,
        None => {
            let catalog = config.catalog();
            let first = match catalog.list() {
                Ok(books) => books.into_iter().next(),
                Err(e) => {
                    tracing::error!(error = %e, "could not list books");
                    None
                }
            }?;
            catalog.path_for(&first)
        }
    };

    match Book::open(&path) {
        Ok(book) => Some(book),
        Err(e) => {
            tracing::error!(error = %e, "could not open book");
            None
        }
    }
}

fn main() -> eframe::Result<()> {
    let config = ReaderConfig::load();
    versecore::logging::init(&config.log_level);

    let book = pick_book(&config);
    if let Some(book) = &book {
        tracing::info!(book = %book.name, verses = book.verse_count(), "starting slowVerse lite");
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 440.0])
            .with_title("slowVerse lite"),
        ..Default::default()
    };

    eframe::run_native(
        "slowVerse lite",
        options,
        Box::new(move |cc| {
            SlowTheme::default()
                .with_verse_size(config.verse_font_size)
                .apply(&cc.egui_ctx);
            Box::new(VerseLiteApp::new(book))
        }),
    )
}
