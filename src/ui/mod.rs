//! UI-Komponenten: Menü, Status-Bar, Karten-View und Input-Handling.

pub mod input;
pub mod map_view;
pub mod menu;
pub mod status;

pub use input::InputState;
pub use map_view::paint_scene;
pub use menu::render_menu;
pub use status::render_status_bar;
