use egui::{Button, Color32, Context, RichText, ScrollArea, Stroke, Vec2};
use crate::app::QuizApp;
use crate::ui::helpers::option_label_job;
use crate::ui::layout::simple_panel;
use crate::view::Surface;

pub const SUBMIT_LABEL: &str = "Submit";

pub fn ui_play(app: &mut QuizApp<Surface>, ctx: &Context) {
    let mut submit = false;

    simple_panel(ctx, 650.0, egui::Margin::symmetric(24, 16), |ui| {
        let surface = &mut app.view;
        ui.heading(&surface.title);
        ui.add_space(10.0);

        ScrollArea::vertical()
            .max_height((ui.available_height() - 90.0).max(120.0))
            .show(ui, |ui| {
                for group in surface.form.iter_mut() {
                    let stroke = if group.incomplete {
                        Stroke::new(1.5, Color32::from_rgb(207, 34, 46))
                    } else {
                        ui.visuals().widgets.noninteractive.bg_stroke
                    };

                    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&group.legend).strong());
                        for option in &group.options {
                            ui.horizontal(|ui| {
                                ui.radio_value(&mut group.selected, Some(option.value), "");
                                ui.label(option_label_job(ui, option));
                            });
                        }
                    });
                    ui.add_space(8.0);
                }
            });

        ui.add_space(8.0);
        if ui
            .add(Button::new(SUBMIT_LABEL).min_size(Vec2::new(120.0, 32.0)))
            .clicked()
        {
            submit = true;
        }

        if !surface.result.is_empty() {
            ui.add_space(8.0);
            ui.label(RichText::new(&surface.result).strong());
        }
    });

    if submit {
        app.evaluate();
    }
}
