#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        quiz_app::ui::HEADER_TEXT,
        options,
        Box::new(|_cc| Ok(Box::new(quiz_app::QuizApp::with_surface()))),
    )
}

// En wasm el arranque lo hace `web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
