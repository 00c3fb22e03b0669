use egui::{Button, Context, RichText, ScrollArea, Vec2};
use crate::app::QuizApp;
use crate::ui::layout::simple_panel;
use crate::view::Surface;

pub fn ui_menu(app: &mut QuizApp<Surface>, ctx: &Context) {
    let mut start: Option<String> = None;

    simple_panel(ctx, 500.0, egui::Margin::symmetric(24, 16), |ui| {
        let content_width = ui.available_width();
        ScrollArea::vertical().show(ui, |ui| {
            for item in &app.view.menu {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(content_width);
                    ui.heading(&item.title);
                    ui.label(&item.description);
                    ui.add_space(6.0);
                    if ui
                        .add(Button::new(item.start_label).min_size(Vec2::new(120.0, 30.0)))
                        .clicked()
                    {
                        start = Some(item.quiz_id.clone());
                    }
                });
                ui.add_space(8.0);
            }

            if app.view.menu.is_empty() {
                ui.label(RichText::new("No quizzes available.").weak());
            }
        });
    });

    // Fuera del pintado para no mantener el préstamo del menú
    if let Some(quiz_id) = start {
        app.start_quiz_session(&quiz_id);
    }
}
