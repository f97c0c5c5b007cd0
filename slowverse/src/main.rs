//! slowVerse - a verse-by-verse scripture reader for the Slow Computer
//!
//! Reads one text file per book from the data folder and remembers where you
//! stopped.

mod app;

use app::SlowVerseApp;
use eframe::NativeOptions;
use versecore::{ReaderConfig, SlowTheme};

fn main() -> eframe::Result<()> {
    let config = ReaderConfig::load();
    versecore::logging::init(&config.log_level);
    tracing::info!(
        data_dir = %config.data_dir.display(),
        progress = %config.progress_file.display(),
        "starting slowVerse"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 800.0])
            .with_title("slowVerse"),
        ..Default::default()
    };

    eframe::run_native(
        "slowVerse",
        options,
        Box::new(move |cc| {
            SlowTheme::default()
                .with_verse_size(config.verse_font_size)
                .apply(&cc.egui_ctx);
            Box::new(SlowVerseApp::new(&config))
        }),
    )
}
