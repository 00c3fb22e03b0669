use super::*;
use crate::scoring::{self, Outcome};

impl<V: QuizView> QuizApp<V> {
    /// Corrige el formulario del quiz activo. Sin quiz activo no hace nada.
    pub fn evaluate(&mut self) -> Option<Outcome> {
        let idx = self.active_quiz?;
        let quiz = self.quizzes.get(idx)?;
        let outcome = scoring::evaluate(&mut self.view, quiz);

        match &outcome {
            Outcome::Incomplete(missing) => {
                log::debug!("Quiz {} submitted with {} unanswered", quiz.id, missing.len())
            }
            Outcome::Scored(score) => log::info!("Quiz {}: {}", quiz.id, score.summary()),
        }
        Some(outcome)
    }
}
