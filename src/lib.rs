pub mod app;
pub mod menu;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod render;
pub mod theme;
pub mod viewport;
