//! The character reading the recall
//!
//! Only two things about the viewer matter: its level, which scales the
//! experience value, and its class, which changes how darkness spells
//! look.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Character class of the viewer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum PlayerClass {
    #[default]
    Warrior = 0,
    Mage = 1,
    Priest = 2,
    Rogue = 3,
    Ranger = 4,
    Paladin = 5,
    WarriorMage = 6,
    ChaosWarrior = 7,
    Monk = 8,
    Mindcrafter = 9,
    HighMage = 10,
    Tourist = 11,
    Imitator = 12,
    BeastMaster = 13,
    Sorcerer = 14,
    Archer = 15,
    MagicEater = 16,
    Bard = 17,
    RedMage = 18,
    Samurai = 19,
    ForceTrainer = 20,
    BlueMage = 21,
    Cavalry = 22,
    Berserker = 23,
    Smith = 24,
    MirrorMaster = 25,
    Ninja = 26,
    Sniper = 27,
    Elementalist = 28,
}

impl PlayerClass {
    /// Check if this class perceives magical darkness as light
    pub const fn sees_darkness_as_light(&self) -> bool {
        matches!(self, PlayerClass::Ninja)
    }

    /// Parse a class name, ignoring case, spaces and dashes
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().replace(['_', '-', ' '], "").to_lowercase();
        PlayerClass::iter().find(|c| c.to_string().to_lowercase() == wanted)
    }
}

/// The character a recall is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewer {
    /// Character level, at least 1
    pub level: u8,
    pub class: PlayerClass,
}

impl Viewer {
    pub const fn new(level: u8, class: PlayerClass) -> Self {
        Self {
            level: if level == 0 { 1 } else { level },
            class,
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(1, PlayerClass::Warrior)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_name() {
        assert_eq!(PlayerClass::from_name("ninja"), Some(PlayerClass::Ninja));
        assert_eq!(PlayerClass::from_name("High-Mage"), Some(PlayerClass::HighMage));
        assert_eq!(PlayerClass::from_name("chaos warrior"), Some(PlayerClass::ChaosWarrior));
        assert_eq!(PlayerClass::from_name("bard "), Some(PlayerClass::Bard));
        assert_eq!(PlayerClass::from_name("jester"), None);
    }

    #[test]
    fn test_only_ninja_sees_light() {
        for class in PlayerClass::iter() {
            assert_eq!(class.sees_darkness_as_light(), class == PlayerClass::Ninja);
        }
    }

    #[test]
    fn test_viewer_level_floor() {
        assert_eq!(Viewer::new(0, PlayerClass::Mage).level, 1);
        assert_eq!(Viewer::new(30, PlayerClass::Mage).level, 30);
    }
}
