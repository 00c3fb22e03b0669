use crate::model::Quiz;
use crate::view::QuizView;
use crate::view_models::MenuItem;

pub const START_LABEL: &str = "Start quiz";

pub fn menu_items(quizzes: &[Quiz]) -> Vec<MenuItem> {
    quizzes
        .iter()
        .map(|quiz| MenuItem {
            quiz_id: quiz.id.clone(),
            title: quiz.title.clone(),
            description: quiz.description.clone(),
            start_label: START_LABEL,
        })
        .collect()
}

/// Repuebla el menú; cada entrada arranca el quiz con su `id`.
pub fn render_menu<V: QuizView + ?Sized>(view: &mut V, quizzes: &[Quiz]) {
    view.render_menu(menu_items(quizzes));
}
