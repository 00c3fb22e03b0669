// src/ui/helpers.rs
use egui::text::{LayoutJob, TextFormat};
use egui::{Align, Color32, FontId, TextStyle, Ui};
use crate::formula::Span;
use crate::view_models::{OptionEntry, OptionLabel};

const CORRECT_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
const INCORRECT_COLOR: Color32 = Color32::from_rgb(207, 34, 46);

/// Etiqueta de opción con color según la corrección y subíndices si es fórmula.
pub fn option_label_job(ui: &Ui, option: &OptionEntry) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(ui.style());
    let color = if option.marks.incorrect {
        INCORRECT_COLOR
    } else if option.marks.correct {
        CORRECT_COLOR
    } else {
        ui.visuals().text_color()
    };

    let text_format = TextFormat::simple(font_id.clone(), color);
    let sub_format = TextFormat {
        font_id: FontId::new(font_id.size * 0.7, font_id.family.clone()),
        color,
        valign: Align::BOTTOM,
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    match &option.label {
        OptionLabel::Plain(text) => job.append(text, 0.0, text_format.clone()),
        OptionLabel::Markup(spans) => {
            for span in spans {
                match span {
                    Span::Text(t) => job.append(t, 0.0, text_format.clone()),
                    Span::Subscript(d) => job.append(d, 0.0, sub_format.clone()),
                }
            }
        }
    }

    if option.marks.incorrect {
        job.append("✘", 6.0, text_format);
    } else if option.marks.correct {
        job.append("✔", 6.0, text_format);
    }
    job
}
