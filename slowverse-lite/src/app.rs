//! slowVerse lite window

use egui::{Context, Key, RichText};
use versecore::sequence::VerseSequence;
use versecore::theme::SlowColors;
use versecore::widgets::{status_bar, SlowButton};
use versecore::{Book, SlowTheme, VERSE_NOT_FOUND};

pub struct VerseLiteApp {
    sequence: Option<VerseSequence>,
}

impl VerseLiteApp {
    pub fn new(book: Option<Book>) -> Self {
        Self {
            sequence: book.map(VerseSequence::new),
        }
    }

    fn advance(&mut self) {
        if let Some(seq) = &mut self.sequence {
            seq.next();
        }
    }

    fn restart(&mut self) {
        if let Some(seq) = &mut self.sequence {
            seq.restart();
        }
    }
}

impl eframe::App for VerseLiteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(Key::Space) || i.key_pressed(Key::ArrowRight)) {
            self.advance();
        }
        if ctx.input(|i| i.key_pressed(Key::Home)) {
            self.restart();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = match &self.sequence {
                Some(seq) if !seq.is_empty() => {
                    format!("verse {} of {}", seq.position() + 1, seq.len())
                }
                Some(_) => "this book has no verses".to_string(),
                None => "no book to read".to_string(),
            };
            status_bar(ui, &status);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(20.0)))
            .show(ctx, |ui| {
                let current = self.sequence.as_ref().and_then(|s| s.current());
                let reference = current.map(|v| v.to_string()).unwrap_or_default();
                let text = current.map(|v| v.text).unwrap_or(VERSE_NOT_FOUND).to_string();
                let at_end = self.sequence.as_ref().map_or(true, |s| s.is_at_end());

                ui.heading(reference);
                ui.add_space(10.0);
                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - 48.0).max(80.0))
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(
                                RichText::new(text)
                                    .text_style(SlowTheme::verse_style())
                                    .color(SlowColors::BLACK),
                            )
                            .wrap(true),
                        );
                    });
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.add(SlowButton::new("next").enabled(!at_end)).clicked() {
                        self.advance();
                    }
                    if at_end && ui.add(SlowButton::new("start over")).clicked() {
                        self.restart();
                    }
                });
            });
    }
}
