//! Static presentation data

pub mod colors;

pub use colors::TermColor;
