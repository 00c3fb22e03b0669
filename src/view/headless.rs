//! Doble de pruebas sin superficie gráfica.

use super::{QuizView, Surface};
use crate::view_models::{MenuItem, OptionMarks, QuestionGroup, ViewMode};

/// Vista sin pantalla: guarda el estado como `Surface` y registra las llamadas de render.
#[derive(Debug, Default)]
pub struct HeadlessView {
    pub surface: Surface,
    pub menu_renders: usize,
    pub question_renders: usize,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simula que el usuario marca una opción.
    pub fn select(&mut self, question_id: &str, option_index: usize) {
        self.surface.select(question_id, option_index);
    }

    pub fn result_text(&self) -> &str {
        &self.surface.result
    }

    pub fn mode(&self) -> ViewMode {
        self.surface.mode
    }

    pub fn marks(&self, question_id: &str, option_index: usize) -> Option<OptionMarks> {
        self.surface
            .group(question_id)
            .and_then(|g| g.options.get(option_index))
            .map(|o| o.marks)
    }

    pub fn is_incomplete(&self, question_id: &str) -> bool {
        self.surface
            .group(question_id)
            .map(|g| g.incomplete)
            .unwrap_or(false)
    }
}

impl QuizView for HeadlessView {
    fn render_menu(&mut self, items: Vec<MenuItem>) {
        self.menu_renders += 1;
        self.surface.render_menu(items);
    }

    fn render_questions(&mut self, groups: Vec<QuestionGroup>) {
        self.question_renders += 1;
        self.surface.render_questions(groups);
    }

    fn clear_form(&mut self) {
        self.surface.clear_form();
    }

    fn set_title(&mut self, title: &str) {
        self.surface.set_title(title);
    }

    fn set_result_text(&mut self, text: &str) {
        self.surface.set_result_text(text);
    }

    fn set_view_visibility(&mut self, mode: ViewMode) {
        self.surface.set_view_visibility(mode);
    }

    fn selected_option(&self, question_id: &str) -> Option<usize> {
        self.surface.selected_option(question_id)
    }

    fn set_incomplete(&mut self, question_id: &str, incomplete: bool) {
        self.surface.set_incomplete(question_id, incomplete);
    }

    fn mark_option(&mut self, question_id: &str, option_index: usize, marks: OptionMarks) {
        self.surface.mark_option(question_id, option_index, marks);
    }
}
