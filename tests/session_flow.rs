use std::cell::Cell;

use quiz_app::QuizApp;
use quiz_app::data::{KeyValueStore, LOCAL_STORAGE_KEY, MemoryStore, RemoteResponse, RemoteSource};
use quiz_app::error::LoadError;
use quiz_app::model::AppState;
use quiz_app::view::{HeadlessView, QuizView};
use quiz_app::view_models::{OptionLabel, OptionMarks, ViewMode};

const QUIZZES_JSON: &str = r#"[
  {
    "id": "chemistry",
    "title": "Chemistry basics",
    "description": "Formulas and elements",
    "questions": [
      {"id": "water", "text": "What is the chemical formula of water?", "options": ["CO2", "H2O", "O2", "NaCl"], "correctIndex": 1},
      {"id": "symbol", "text": "Which symbol stands for gold?", "options": ["Ag", "Au", "Gd"], "correctIndex": 1},
      {"id": "gas", "text": "Which gas do plants absorb?", "options": ["O2", "N2", "CO2"], "correctIndex": 2}
    ]
  },
  {
    "id": "geography",
    "title": "Capitals",
    "description": "European capitals",
    "questions": [
      {"id": "fr", "text": "Capital of France?", "options": ["Paris", "Lyon"], "correctIndex": 0}
    ]
  }
]"#;

struct DocumentSource {
    calls: Cell<usize>,
}

impl RemoteSource for DocumentSource {
    fn fetch(&self, url: &str) -> Result<RemoteResponse, LoadError> {
        assert_eq!(url, "quizzes.json");
        self.calls.set(self.calls.get() + 1);
        Ok(RemoteResponse {
            status: 200,
            body: QUIZZES_JSON.to_string(),
        })
    }
}

fn loaded_app(store: &mut MemoryStore, source: &DocumentSource) -> QuizApp<HeadlessView> {
    let mut app = QuizApp::new(HeadlessView::new());
    app.initialize(store, source, "quizzes.json").unwrap();
    app
}

#[test]
fn first_load_fetches_and_second_load_uses_cache() {
    let mut store = MemoryStore::new();
    let source = DocumentSource { calls: Cell::new(0) };

    let first = loaded_app(&mut store, &source);
    assert_eq!(source.calls.get(), 1);
    assert!(store.get_item(LOCAL_STORAGE_KEY).is_some());

    let second = loaded_app(&mut store, &source);
    assert_eq!(source.calls.get(), 1);
    assert_eq!(first.quizzes, second.quizzes);
    assert_eq!(second.view.surface.menu.len(), 2);
}

#[test]
fn full_session_from_menu_to_score_and_back() {
    let mut store = MemoryStore::new();
    let source = DocumentSource { calls: Cell::new(0) };
    let mut app = loaded_app(&mut store, &source);

    assert_eq!(app.view.mode(), ViewMode::Menu);
    app.start_quiz_session("chemistry");
    assert_eq!(app.state, AppState::Playing);
    assert_eq!(app.view.mode(), ViewMode::Play);

    let form = &app.view.surface.form;
    assert_eq!(form.len(), 3);
    assert_eq!(form[0].options[1].label.as_markup(), "H<sub>2</sub>O");
    assert_eq!(form[2].options[2].label, OptionLabel::Plain("CO2".into()));

    // Sin respuestas
    app.evaluate();
    assert_eq!(
        app.view.result_text(),
        "Please answer all questions before submitting."
    );

    app.view.select("water", 1);
    app.view.select("symbol", 0);
    app.view.select("gas", 2);
    app.evaluate();
    assert_eq!(app.view.result_text(), "You scored 2 out of 3 (67%)");
    assert_eq!(
        app.view.marks("symbol", 0),
        Some(OptionMarks { correct: false, incorrect: true })
    );
    assert_eq!(
        app.view.marks("symbol", 1),
        Some(OptionMarks { correct: true, incorrect: false })
    );

    app.reset_to_menu();
    assert_eq!(app.state, AppState::Menu);
    assert_eq!(app.view.mode(), ViewMode::Menu);
    assert_eq!(app.view.result_text(), "");
    assert_eq!(app.view.surface.menu.len(), 2);
    assert_eq!(app.evaluate(), None);
}

#[test]
fn restarting_a_quiz_starts_from_a_clean_form() {
    let mut store = MemoryStore::new();
    let source = DocumentSource { calls: Cell::new(0) };
    let mut app = loaded_app(&mut store, &source);

    app.start_quiz_session("geography");
    app.view.select("fr", 0);
    app.evaluate();
    assert_eq!(app.view.result_text(), "You scored 1 out of 1 (100%)");

    app.reset_to_menu();
    app.start_quiz_session("geography");
    assert_eq!(app.view.selected_option("fr"), None);
    assert_eq!(app.view.result_text(), "");
}
