use egui::{CentralPanel, Context, Frame, Label, RichText, Sense, Ui, Visuals};
use crate::app::QuizApp;
use crate::view::Surface;
use crate::view_models::ViewMode;
use super::HEADER_TEXT;

pub const BACK_LABEL: &str = "⬅ Back to quizzes";

pub fn top_panel(app: &mut QuizApp<Surface>, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let header = ui.add(Label::new(RichText::new(HEADER_TEXT).heading()).sense(Sense::click()));
            if !app.is_ready() {
                return;
            }
            if header.on_hover_text("Back to the quiz list").clicked() {
                app.reset_to_menu();
                return;
            }

            if app.view.mode == ViewMode::Play && ui.button(BACK_LABEL).clicked() {
                app.reset_to_menu();
            }
        });
    });
}

/// Etiqueta del conmutador y tema al que lleva.
pub fn theme_toggle(dark_mode: bool) -> (&'static str, Visuals) {
    if dark_mode {
        ("☀ Light mode", Visuals::light())
    } else {
        ("🌙 Dark mode", Visuals::dark())
    }
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("theme_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (label, next) = theme_toggle(ui.visuals().dark_mode);
            if ui.small_button(label).clicked() {
                ctx.set_visuals(next);
            }
        });
    });
}

/// Panel central con anchura máxima y margen fijo.
pub fn simple_panel(
    ctx: &Context,
    max_width: f32,
    margin: egui::Margin,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(margin)
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}
