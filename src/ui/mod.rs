mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::config::quizzes_url;
use crate::data::{EframeStore, KeyValueStore, MemoryStore};
use crate::model::LoadPhase;
use crate::view::Surface;
use crate::view_models::ViewMode;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

pub const HEADER_TEXT: &str = "Quiz App";

/// Presta el almacenamiento de eframe; sin persistencia se usa uno en memoria.
fn with_store<R>(frame: &mut Frame, f: impl FnOnce(&mut dyn KeyValueStore) -> R) -> R {
    match frame.storage_mut() {
        Some(storage) => f(&mut EframeStore(storage)),
        None => f(&mut MemoryStore::new()),
    }
}

impl QuizApp<Surface> {
    pub fn with_surface() -> Self {
        QuizApp::new(Surface::default())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn boot(&mut self, _ctx: &Context, frame: &mut Frame) {
        let url = quizzes_url();
        let remote = crate::remote::NativeSource::new();
        let result = with_store(frame, |store| self.initialize(store, &remote, &url));
        if let Err(err) = result {
            self.fail_loading(&err);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn boot(&mut self, ctx: &Context, frame: &mut Frame) {
        if !with_store(frame, |store| self.load_cached(&*store)) {
            self.start_remote_load(quizzes_url(), ctx.clone());
        }
    }
}

impl App for QuizApp<Surface> {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        if !self.started {
            self.started = true;
            self.boot(ctx, frame);
        }

        if self.is_remote_pending() {
            with_store(frame, |store| self.poll_remote_load(store));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        // Una sola vista visible a la vez
        match self.load.clone() {
            LoadPhase::Loading => views::loading::ui_loading(ctx),
            LoadPhase::Failed(message) => views::loading::ui_load_failed(ctx, &message),
            LoadPhase::Ready => match self.view.mode {
                ViewMode::Menu => views::menu::ui_menu(self, ctx),
                ViewMode::Play => views::play::ui_play(self, ctx),
            },
        }
    }
}
