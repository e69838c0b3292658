//! Session-wide settings

pub mod options;

pub use options::{LoreOptions, OptionsError};
