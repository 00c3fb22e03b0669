use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String, // Enunciado
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn has_valid_correct_index(&self) -> bool {
        self.correct_index < self.options.len()
    }

    /// Las preguntas de formulación química muestran subíndices en sus opciones.
    pub fn asks_for_chemical_formula(&self) -> bool {
        self.text.to_lowercase().contains("chemical formula")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Primera pregunta cuyo `correctIndex` cae fuera de sus opciones.
    pub fn first_invalid_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| !q.has_valid_correct_index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Menu,
    Playing,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}
