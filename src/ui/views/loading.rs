use egui::{Color32, Context, RichText};
use crate::ui::layout::simple_panel;

pub fn ui_loading(ctx: &Context) {
    simple_panel(ctx, 400.0, egui::Margin::symmetric(24, 24), |ui| {
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label("Loading quizzes…");
        });
    });
}

pub fn ui_load_failed(ctx: &Context, message: &str) {
    simple_panel(ctx, 400.0, egui::Margin::symmetric(24, 24), |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("Could not load quizzes: {message}"))
                    .color(Color32::LIGHT_RED)
                    .strong(),
            );
        });
    });
}
