use super::*;
use crate::render::render_questions;
use crate::view_models::ViewMode;

impl<V: QuizView> QuizApp<V> {
    /// Menu -> Playing. Un id desconocido no cambia nada.
    pub fn start_quiz_session(&mut self, quiz_id: &str) {
        let Some(idx) = self.quizzes.iter().position(|q| q.id == quiz_id) else {
            log::debug!("No quiz with id {quiz_id}; staying on the menu");
            return;
        };

        self.active_quiz = Some(idx);
        self.state = AppState::Playing;

        let quiz = &self.quizzes[idx];
        self.view.set_title(&quiz.title);
        self.view.clear_form();
        self.view.set_result_text("");
        self.view.set_view_visibility(ViewMode::Play);
        render_questions(&mut self.view, quiz);

        log::info!("Started quiz {} ({} questions)", quiz.id, quiz.questions.len());
    }
}
