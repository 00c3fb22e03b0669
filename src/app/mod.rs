use crate::model::{AppState, LoadPhase, Quiz};
use crate::view::QuizView;
use crate::{data::RemoteResponse, error::LoadError};
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod navigation;
pub mod resets;

/// Controlador de la app: colección cargada, quiz activo y la vista que los pinta.
pub struct QuizApp<V: QuizView> {
    pub quizzes: Vec<Quiz>,
    pub active_quiz: Option<usize>, // índice en `quizzes`
    pub state: AppState,
    pub load: LoadPhase,
    pub view: V,
    pub(crate) started: bool,
    pub(crate) remote_rx: Option<Receiver<Result<RemoteResponse, LoadError>>>,
}

impl<V: QuizView> QuizApp<V> {
    pub fn new(view: V) -> Self {
        Self {
            quizzes: Vec::new(),
            active_quiz: None,
            state: AppState::Menu,
            load: LoadPhase::Loading,
            view,
            started: false,
            remote_rx: None,
        }
    }

    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.active_quiz.and_then(|idx| self.quizzes.get(idx))
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadPhase::Ready
    }
}
