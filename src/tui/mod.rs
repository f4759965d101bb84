pub mod app;
pub mod input;
pub mod list_display;
pub mod render;
pub mod tabs;
pub mod text_entry;
pub mod theme;

pub use app::run;
