//! Capacidad de vista: todo lo que el núcleo necesita de la superficie renderizada.

pub mod headless;
mod surface;

pub use headless::HeadlessView;
pub use surface::Surface;

use crate::view_models::{MenuItem, OptionMarks, QuestionGroup, ViewMode};

pub trait QuizView {
    /// Vacía el contenedor del menú y lo vuelve a poblar.
    fn render_menu(&mut self, items: Vec<MenuItem>);

    /// Vacía el formulario y lo vuelve a poblar con un grupo por pregunta.
    fn render_questions(&mut self, groups: Vec<QuestionGroup>);

    fn clear_form(&mut self);
    fn set_title(&mut self, title: &str);
    fn set_result_text(&mut self, text: &str);

    /// Solo una vista (menú o juego) visible a la vez.
    fn set_view_visibility(&mut self, mode: ViewMode);

    /// Índice de la opción marcada en el grupo `question_id`, si la hay.
    fn selected_option(&self, question_id: &str) -> Option<usize>;

    fn set_incomplete(&mut self, question_id: &str, incomplete: bool);

    /// Sustituye las marcas de corrección de una opción.
    fn mark_option(&mut self, question_id: &str, option_index: usize, marks: OptionMarks);
}
