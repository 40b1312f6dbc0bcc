//! LogoWall Application
//!
//! Desktop shell that loads a manifest (or the built-in demo logos) and
//! shows it as a LogoWall with a small control panel.

mod app;
mod demo;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig};
pub use shortcuts::{action_for_key, Shortcut, ShortcutRegistry};
pub use ui::{load_wall, render_ui, UiAction, UiState};
