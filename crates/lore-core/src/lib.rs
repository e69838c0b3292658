//! lore-core: Monster recall engine
//!
//! Compiles what the player knows about a monster race into bilingual prose.
//! The crate holds no terminal or file-format coupling: all text leaves
//! through a [`lore::LoreSink`] supplied by the caller.

pub mod data;
pub mod grammar;
pub mod lore;
pub mod monster;
pub mod player;
pub mod spoiler;
pub mod world;

mod consts;

pub use consts::*;
pub use lore::{LoreMode, RecallContext, compile_lore, recall_text};
