//! lore-tui: Terminal monster recall viewer
//!
//! Renders recall through a word-wrapping ratatui sink.

pub mod app;
pub mod input;
pub mod screen;

pub use app::App;
pub use input::{Action, key_to_action};
pub use screen::{ScreenSink, term_color};
