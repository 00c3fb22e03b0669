use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::QuizApp;

const CANVAS_ID: &str = "quiz_app_canvas";

/// Equivale al "document ready": arranca la app sobre el canvas.
#[wasm_bindgen(start)]
pub fn start() {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };

        let canvas = match document
            .get_element_by_id(CANVAS_ID)
            .map(|e| e.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("Canvas #{CANVAS_ID} not found");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(QuizApp::with_surface()))),
            )
            .await;

        if let Err(err) = result {
            log::error!("Failed to start eframe: {err:?}");
        }
    });
}
