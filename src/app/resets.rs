use super::*;
use crate::render::render_menu;
use crate::view_models::ViewMode;

impl<V: QuizView> QuizApp<V> {
    /// Playing -> Menu: suelta el quiz activo y repinta el menú completo.
    pub fn reset_to_menu(&mut self) {
        if let Some(quiz) = self.active_quiz() {
            log::info!("Leaving quiz {}", quiz.id);
        }
        self.active_quiz = None;
        self.state = AppState::Menu;

        self.view.set_title("");
        self.view.clear_form();
        self.view.set_result_text("");
        self.view.set_view_visibility(ViewMode::Menu);
        render_menu(&mut self.view, &self.quizzes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HeadlessView;

    fn quiz(id: &str) -> Quiz {
        Quiz {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            questions: vec![],
        }
    }

    #[test]
    fn reset_clears_session_and_rerenders_full_menu() {
        let mut app = QuizApp::new(HeadlessView::new());
        app.load_quizzes(vec![quiz("a"), quiz("b"), quiz("c")]);
        app.start_quiz_session("b");
        app.evaluate();
        assert_eq!(app.view.result_text(), "You scored 0 out of 0 (0%)");

        app.reset_to_menu();
        assert!(app.active_quiz().is_none());
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.view.mode(), ViewMode::Menu);
        assert_eq!(app.view.result_text(), "");
        assert_eq!(app.view.surface.title, "");
        assert!(app.view.surface.form.is_empty());
        assert_eq!(app.view.surface.menu.len(), 3);
        assert_eq!(app.view.menu_renders, 2);
    }

    #[test]
    fn reset_from_menu_just_rerenders() {
        let mut app = QuizApp::new(HeadlessView::new());
        app.load_quizzes(vec![quiz("a")]);
        app.reset_to_menu();
        assert_eq!(app.view.mode(), ViewMode::Menu);
        assert_eq!(app.view.surface.menu.len(), 1);
    }
}
