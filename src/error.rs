use thiserror::Error;

/// Fallos al cargar la colección de quizzes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// El documento remoto respondió con un estado no 2xx.
    #[error("fetch failed (HTTP {status})")]
    FetchFailed { status: u16 },

    /// No se pudo contactar con el origen remoto.
    #[error("fetch failed: {0}")]
    Transport(String),

    /// El cuerpo no es un array de quizzes válido.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}
