pub mod menu;
pub mod questions;

pub use menu::{menu_items, render_menu};
pub use questions::{question_groups, render_questions};
