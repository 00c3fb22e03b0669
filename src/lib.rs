pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod formula;
pub mod model;
pub mod remote;
pub mod render;
pub mod scoring;
pub mod ui;
pub mod view;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
pub use error::LoadError;
