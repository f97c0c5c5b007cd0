//! Custom widgets: pure black and white, dithered overlays

use crate::theme::SlowColors;
use egui::{Color32, Painter, Pos2, Rect, Response, Ui, Widget};

/// Draw a checkerboard dither over `rect`. `density` 1 fills every other
/// pixel; larger values space the dots further apart.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let density = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let x_step = density * 2;
    let pixel = egui::Vec2::splat(1.0);

    let mut y = y0;
    while y < y1 {
        let row_offset = if ((y - y0) / density) % 2 == 0 { 0 } else { density };
        let mut x = x0 + row_offset;
        while x < x1 {
            painter.rect_filled(Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel), 0.0, color);
            x += x_step;
        }
        y += density;
    }
}

/// Tight dither for pressed buttons
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, SlowColors::BLACK, 1);
}

/// Lighter dither for hover
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, SlowColors::BLACK, 2);
}

/// A button: white bg, 1px outline, dithered when hovered or pressed.
/// Disabled buttons draw a dotted outline and ignore clicks.
pub struct SlowButton<'a> {
    text: &'a str,
    enabled: bool,
}

impl<'a> SlowButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, enabled: true }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for SlowButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let font = egui::FontId::proportional(14.0);
        let text_width = ui.fonts(|f| {
            self.text.chars().map(|c| f.glyph_width(&font, c)).sum::<f32>()
        });
        let desired_size = egui::vec2(text_width + 32.0, ui.spacing().interact_size.y);
        let sense = if self.enabled { egui::Sense::click() } else { egui::Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(desired_size, sense);

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, SlowColors::WHITE);

            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, SlowColors::BLACK));

            let pressed = self.enabled && response.is_pointer_button_down_on();
            if pressed {
                draw_dither_selection(painter, rect);
            } else if self.enabled && response.hovered() {
                draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                font,
                if pressed { SlowColors::WHITE } else { SlowColors::BLACK },
            );

            // wash out the label of a disabled button
            if !self.enabled {
                draw_dither_rect(painter, rect.shrink(2.0), SlowColors::WHITE, 1);
            }
        }

        response
    }
}

/// Status bar: white bg, 1px black border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
