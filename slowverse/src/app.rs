//! slowVerse application window

use egui::{Context, Key, RichText};
use versecore::theme::{menu_bar, SlowColors};
use versecore::widgets::{status_bar, SlowButton};
use versecore::{Phase, ReaderConfig, Session, SlowTheme};

pub struct SlowVerseApp {
    session: Session,
    show_about: bool,
    /// Last failure worth telling the user about, shown in the status bar
    notice: Option<String>,
}

impl SlowVerseApp {
    pub fn new(config: &ReaderConfig) -> Self {
        let mut session = Session::new(config);
        session.restore_saved();
        Self {
            session,
            show_about: false,
            notice: None,
        }
    }

    fn open_book(&mut self, name: &str) {
        match self.session.choose_book(name) {
            Ok(_) => self.notice = None,
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        let (forward, back) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowRight) || i.key_pressed(Key::PageDown),
                i.key_pressed(Key::ArrowLeft) || i.key_pressed(Key::PageUp),
            )
        });
        if forward {
            self.session.next();
        }
        if back {
            self.session.previous();
        }
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        menu_bar(ui, |ui| {
            ui.menu_button("file", |ui| {
                if ui.button("refresh books").clicked() {
                    self.session.refresh_books();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
            ui.menu_button("go", |ui| {
                if ui.button("next verse      →").clicked() {
                    self.session.next();
                    ui.close_menu();
                }
                if ui.button("previous verse  ←").clicked() {
                    self.session.previous();
                    ui.close_menu();
                }
            });
            ui.menu_button("help", |ui| {
                if ui.button("about slowVerse").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
            });
        });
    }

    fn render_selectors(&mut self, ui: &mut egui::Ui) {
        let mut book_to_open: Option<String> = None;
        let mut chapter_to_open: Option<u32> = None;

        let state = self.session.state();
        let current_book = state.book().unwrap_or("choose a book").to_string();
        let current_chapter = state.chapter();

        ui.label("book:");
        egui::ComboBox::from_id_source("book")
            .width(260.0)
            .selected_text(&current_book)
            .show_ui(ui, |ui| {
                for name in self.session.books() {
                    let selected = state.book() == Some(name.as_str());
                    if ui.selectable_label(selected, name).clicked() && !selected {
                        book_to_open = Some(name.clone());
                    }
                }
            });

        ui.add_space(4.0);
        ui.label("chapter:");
        let chapters = state.chapter_numbers();
        egui::ComboBox::from_id_source("chapter")
            .width(120.0)
            .selected_text(current_chapter.map(|c| c.to_string()).unwrap_or_default())
            .show_ui(ui, |ui| {
                for chapter in chapters {
                    let selected = current_chapter == Some(chapter);
                    if ui.selectable_label(selected, chapter.to_string()).clicked() && !selected {
                        chapter_to_open = Some(chapter);
                    }
                }
            });

        if let Some(name) = book_to_open {
            self.open_book(&name);
        }
        if let Some(chapter) = chapter_to_open {
            self.session.choose_chapter(chapter);
        }
    }

    fn render_verse(&mut self, ui: &mut egui::Ui) {
        let height = (ui.available_height() - 48.0).max(80.0);
        egui::Frame::none()
            .fill(SlowColors::WHITE)
            .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.set_min_height(height);
                ui.set_width(ui.available_width());
                egui::ScrollArea::vertical()
                    .max_height(height)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let text = match self.session.state().phase() {
                            Phase::NoBook => "choose a book to begin.",
                            _ => self.session.current_verse(),
                        };
                        ui.add(
                            egui::Label::new(
                                RichText::new(text)
                                    .text_style(SlowTheme::verse_style())
                                    .color(SlowColors::BLACK),
                            )
                            .wrap(true),
                        );
                    });
            });
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        let state = self.session.state();
        let (can_go_back, can_go_forward) = match state.phase() {
            Phase::ChapterSelected { verse, .. } => (verse > 0, verse + 1 < state.verse_count()),
            _ => (false, false),
        };

        ui.horizontal(|ui| {
            if ui.add(SlowButton::new("previous").enabled(can_go_back)).clicked() {
                self.session.previous();
            }
            ui.add_space(8.0);
            if ui.add(SlowButton::new("next").enabled(can_go_forward)).clicked() {
                self.session.next();
            }
        });
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about slowVerse")
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("slowVerse");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    ui.label("one verse at a time");
                });
                ui.add_space(8.0);
                ui.separator();
                ui.label("books are read from:");
                ui.label(format!("  {}", self.session.catalog().dir().display()));
                ui.add_space(4.0);
                ui.label("keys:");
                ui.label("  ←/→ or page up/down to turn verses");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SlowVerseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        if let Some(book) = self.session.state().book() {
            let title = match self.session.state().chapter() {
                Some(chapter) => format!("{} {}", book, chapter),
                None => book.to_string(),
            };
            egui::TopBottomPanel::top("title").show(ctx, |ui| {
                SlowTheme::title_bar_frame().show(ui, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(title);
                    });
                });
            });
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let status = match &self.notice {
                Some(notice) => notice.clone(),
                None => self.session.status_line(),
            };
            status_bar(ui, &status);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(20.0)))
            .show(ctx, |ui| {
                self.render_selectors(ui);
                ui.add_space(10.0);
                self.render_verse(ui);
                ui.add_space(10.0);
                self.render_navigation(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
