// src/data.rs

use crate::error::LoadError;
use crate::model::Quiz;
use std::collections::HashMap;

pub const LOCAL_STORAGE_KEY: &str = "quizApp_quizzes";

/// Almacén clave-valor persistente (localStorage en web).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.items.insert(key.to_owned(), value);
    }
}

/// Adaptador sobre el almacenamiento de eframe.
pub struct EframeStore<'a>(pub &'a mut (dyn eframe::Storage + 'static));

impl KeyValueStore for EframeStore<'_> {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set_item(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
        self.0.flush();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: String,
}

impl RemoteResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Origen del documento de quizzes por defecto.
pub trait RemoteSource {
    fn fetch(&self, url: &str) -> Result<RemoteResponse, LoadError>;
}

/// Lee la copia cacheada. Un blob ilegible se ignora y se cae a la red.
pub fn read_cached(store: &dyn KeyValueStore) -> Option<Vec<Quiz>> {
    let raw = store.get_item(LOCAL_STORAGE_KEY)?;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<Vec<Quiz>>(&raw) {
        Ok(quizzes) => Some(quizzes),
        Err(err) => {
            log::warn!("Discarding cached quizzes under {LOCAL_STORAGE_KEY}: {err}");
            None
        }
    }
}

pub fn persist_quizzes(store: &mut dyn KeyValueStore, quizzes: &[Quiz]) {
    match serde_json::to_string(quizzes) {
        Ok(json) => store.set_item(LOCAL_STORAGE_KEY, json),
        Err(err) => log::error!("Could not serialize quizzes for caching: {err}"),
    }
}

/// Valida la respuesta remota y, si es correcta, la guarda en caché.
pub fn accept_remote(
    store: &mut dyn KeyValueStore,
    response: RemoteResponse,
) -> Result<Vec<Quiz>, LoadError> {
    if !response.is_success() {
        return Err(LoadError::FetchFailed {
            status: response.status,
        });
    }

    let value: serde_json::Value = serde_json::from_str(&response.body)
        .map_err(|err| LoadError::InvalidFormat(err.to_string()))?;
    if !value.is_array() {
        return Err(LoadError::InvalidFormat("expected a JSON array".into()));
    }

    let quizzes: Vec<Quiz> =
        serde_json::from_value(value).map_err(|err| LoadError::InvalidFormat(err.to_string()))?;

    for quiz in &quizzes {
        if let Some(q) = quiz.first_invalid_question() {
            return Err(LoadError::InvalidFormat(format!(
                "question {} in quiz {} has correctIndex {} out of {} options",
                q.id,
                quiz.id,
                q.correct_index,
                q.options.len()
            )));
        }
    }

    persist_quizzes(store, &quizzes);
    Ok(quizzes)
}

/// Caché primero; si no hay, un único intento contra el documento remoto.
pub fn fetch_quizzes(
    store: &mut dyn KeyValueStore,
    remote: &dyn RemoteSource,
    url: &str,
) -> Result<Vec<Quiz>, LoadError> {
    if let Some(quizzes) = read_cached(store) {
        log::info!("Loaded {} quizzes from cache", quizzes.len());
        return Ok(quizzes);
    }

    let response = remote.fetch(url)?;
    let quizzes = accept_remote(store, response)?;
    log::info!("Loaded {} quizzes from {url}", quizzes.len());
    Ok(quizzes)
}
