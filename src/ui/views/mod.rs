pub mod loading;
pub mod menu;
pub mod play;
