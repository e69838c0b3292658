//! Terminal color definitions used to tag recall fragments

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The sixteen terminal colors a recall fragment can carry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TermColor {
    Dark = 0,
    #[default]
    White = 1,
    Slate = 2,
    Orange = 3,
    Red = 4,
    Green = 5,
    Blue = 6,
    Umber = 7,
    LightDark = 8,
    LightWhite = 9,
    Violet = 10,
    Yellow = 11,
    LightRed = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightUmber = 15,
}

impl TermColor {
    /// RGB triple used by graphical front ends
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TermColor::Dark => (0, 0, 0),
            TermColor::White => (255, 255, 255),
            TermColor::Slate => (128, 128, 128),
            TermColor::Orange => (255, 128, 0),
            TermColor::Red => (192, 0, 0),
            TermColor::Green => (0, 128, 64),
            TermColor::Blue => (0, 64, 255),
            TermColor::Umber => (128, 64, 0),
            TermColor::LightDark => (96, 96, 96),
            TermColor::LightWhite => (192, 192, 192),
            TermColor::Violet => (255, 0, 255),
            TermColor::Yellow => (255, 255, 0),
            TermColor::LightRed => (255, 64, 64),
            TermColor::LightGreen => (0, 255, 0),
            TermColor::LightBlue => (0, 255, 255),
            TermColor::LightUmber => (192, 128, 64),
        }
    }

    /// Parse a color name as written in option files
    pub fn from_name(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        let wanted = name.trim().replace(['_', '-', ' '], "").to_lowercase();
        TermColor::iter().find(|c| c.to_string().to_lowercase() == wanted)
    }
}
