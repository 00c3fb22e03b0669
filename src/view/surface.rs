use super::QuizView;
use crate::view_models::{MenuItem, OptionMarks, QuestionGroup, ViewMode};

/// Estado retenido que pinta la interfaz egui.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    pub menu: Vec<MenuItem>,
    pub mode: ViewMode,
    pub title: String,
    pub form: Vec<QuestionGroup>,
    pub result: String,
}

impl Surface {
    pub fn group(&self, question_id: &str) -> Option<&QuestionGroup> {
        self.form.iter().find(|g| g.question_id == question_id)
    }

    pub fn group_mut(&mut self, question_id: &str) -> Option<&mut QuestionGroup> {
        self.form.iter_mut().find(|g| g.question_id == question_id)
    }

    /// Marca una opción del grupo; el resto queda desmarcado.
    pub fn select(&mut self, question_id: &str, option_index: usize) {
        if let Some(group) = self.group_mut(question_id) {
            if option_index < group.options.len() {
                group.selected = Some(option_index);
            }
        }
    }
}

impl QuizView for Surface {
    fn render_menu(&mut self, items: Vec<MenuItem>) {
        self.menu = items;
    }

    fn render_questions(&mut self, groups: Vec<QuestionGroup>) {
        self.form = groups;
    }

    fn clear_form(&mut self) {
        self.form.clear();
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn set_result_text(&mut self, text: &str) {
        self.result = text.to_owned();
    }

    fn set_view_visibility(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    fn selected_option(&self, question_id: &str) -> Option<usize> {
        self.group(question_id).and_then(|g| g.selected)
    }

    fn set_incomplete(&mut self, question_id: &str, incomplete: bool) {
        if let Some(group) = self.group_mut(question_id) {
            group.incomplete = incomplete;
        }
    }

    fn mark_option(&mut self, question_id: &str, option_index: usize, marks: OptionMarks) {
        if let Some(option) = self
            .group_mut(question_id)
            .and_then(|g| g.options.get_mut(option_index))
        {
            option.marks = marks;
        }
    }
}
