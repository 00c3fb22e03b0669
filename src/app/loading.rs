use super::*;
use crate::data::{KeyValueStore, RemoteSource, accept_remote, fetch_quizzes, read_cached};
use crate::error::LoadError;
use crate::render::render_menu;
use crate::view_models::ViewMode;
use std::sync::mpsc::Sender;

impl<V: QuizView> QuizApp<V> {
    /// Carga la colección (caché o remoto) y pinta el menú.
    /// El error se propaga; quien llama decide cómo mostrarlo.
    pub fn initialize(
        &mut self,
        store: &mut dyn KeyValueStore,
        remote: &dyn RemoteSource,
        url: &str,
    ) -> Result<(), LoadError> {
        let quizzes = fetch_quizzes(store, remote, url)?;
        self.load_quizzes(quizzes);
        Ok(())
    }

    pub fn load_quizzes(&mut self, quizzes: Vec<Quiz>) {
        self.quizzes = quizzes;
        self.active_quiz = None;
        self.state = AppState::Menu;
        self.load = LoadPhase::Ready;
        self.view.set_view_visibility(ViewMode::Menu);
        render_menu(&mut self.view, &self.quizzes);
    }

    pub fn fail_loading(&mut self, err: &LoadError) {
        log::error!("Could not load quizzes: {err}");
        self.load = LoadPhase::Failed(err.to_string());
    }
}

impl<V: QuizView> QuizApp<V> {
    /// Si hay copia en caché la carga y pinta el menú; si no, devuelve `false`.
    pub fn load_cached(&mut self, store: &dyn KeyValueStore) -> bool {
        match read_cached(store) {
            Some(quizzes) => {
                log::info!("Loaded {} quizzes from cache", quizzes.len());
                self.load_quizzes(quizzes);
                true
            }
            None => false,
        }
    }

    /// Abre el canal por el que llegará la respuesta remota.
    pub fn remote_channel(&mut self) -> Sender<Result<RemoteResponse, LoadError>> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.remote_rx = Some(rx);
        tx
    }

    pub fn is_remote_pending(&self) -> bool {
        self.remote_rx.is_some()
    }

    /// Recoge la respuesta remota si ya ha llegado; valida y cachea.
    pub fn poll_remote_load(&mut self, store: &mut dyn KeyValueStore) {
        let maybe_result = self.remote_rx.as_ref().and_then(|rx| rx.try_recv().ok());

        if let Some(result) = maybe_result {
            self.remote_rx = None;
            match result.and_then(|response| accept_remote(store, response)) {
                Ok(quizzes) => {
                    log::info!("Loaded {} quizzes from the network", quizzes.len());
                    self.load_quizzes(quizzes);
                }
                Err(err) => self.fail_loading(&err),
            }
        }
    }

    /// Lanza la descarga en segundo plano; el resultado llega por `remote_channel`.
    #[cfg(target_arch = "wasm32")]
    pub fn start_remote_load(&mut self, url: String, ctx: egui::Context) {
        let tx = self.remote_channel();

        wasm_bindgen_futures::spawn_local(async move {
            let result = crate::remote::fetch_document(&url).await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }
}
