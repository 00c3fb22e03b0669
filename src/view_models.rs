// src/view_models.rs

use crate::formula::{Span, to_markup};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Menu,
    Play,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub quiz_id: String,
    pub title: String,
    pub description: String,
    pub start_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionLabel {
    Plain(String),
    Markup(Vec<Span>), // solo en preguntas de fórmula química
}

impl OptionLabel {
    /// Texto tal y como acabaría en el documento.
    pub fn as_markup(&self) -> String {
        match self {
            OptionLabel::Plain(text) => text.clone(),
            OptionLabel::Markup(spans) => to_markup(spans),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OptionMarks {
    pub correct: bool,
    pub incorrect: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub input_id: String, // "{quiz}-{pregunta}-option-{i}"
    pub value: usize,
    pub label: OptionLabel,
    pub marks: OptionMarks,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionGroup {
    pub question_id: String, // nombre del grupo exclusivo
    pub legend: String,
    pub options: Vec<OptionEntry>,
    pub selected: Option<usize>,
    pub incomplete: bool,
}
