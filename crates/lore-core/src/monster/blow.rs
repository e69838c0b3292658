//! Melee blow methods and effects
//!
//! A blow is HOW a monster strikes (method) combined with WHAT the strike
//! does (effect), plus the damage dice rolled when it lands.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Dice;

/// How a blow is delivered (RBM_* equivalents)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BlowMethod {
    /// Empty slot
    #[default]
    None = 0,
    Hit = 1,
    Touch = 2,
    Punch = 3,
    Kick = 4,
    Claw = 5,
    Bite = 6,
    Sting = 7,
    Slash = 8,
    Butt = 9,
    Crush = 10,
    Engulf = 11,
    Charge = 12,
    Crawl = 13,
    Drool = 14,
    Spit = 15,
    Explode = 16,
    Gaze = 17,
    Wail = 18,
    Spore = 19,
    Beg = 21,
    Insult = 22,
    Moan = 23,
    Show = 24,
    /// Ranged shot, described with launching abilities instead of melee
    Shoot = 25,
    /// A method this build has no words for
    Unknown = 255,
}

impl BlowMethod {
    /// Check if this slot holds a blow at all
    pub const fn is_active(&self) -> bool {
        !matches!(self, BlowMethod::None)
    }

    /// Check if this blow belongs in the melee listing
    pub const fn is_melee(&self) -> bool {
        !matches!(self, BlowMethod::None | BlowMethod::Shoot)
    }
}

/// What a blow does when it lands (RBE_* equivalents)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BlowEffect {
    /// No described effect
    #[default]
    None = 0,
    Hurt = 1,
    SuperHurt = 2,
    Poison = 3,
    Disenchant = 4,
    DrainCharges = 5,
    EatGold = 6,
    EatItem = 7,
    EatFood = 8,
    EatLight = 9,
    Acid = 10,
    Elec = 11,
    Fire = 12,
    Cold = 13,
    Blind = 14,
    Confuse = 15,
    Terrify = 16,
    Paralyze = 17,
    LoseStr = 18,
    LoseInt = 19,
    LoseWis = 20,
    LoseDex = 21,
    LoseCon = 22,
    LoseChr = 23,
    LoseAll = 24,
    Shatter = 25,
    Exp10 = 26,
    Exp20 = 27,
    Exp40 = 28,
    Exp80 = 29,
    Disease = 30,
    Time = 31,
    DrainLife = 32,
    DrainMana = 33,
    Inertia = 34,
    Stun = 35,
    /// An effect this build has no words for
    Unknown = 255,
}

/// A single blow slot (struct monster_blow equivalent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blow {
    pub method: BlowMethod,
    pub effect: BlowEffect,
    pub dice: Dice,
}

impl Blow {
    pub const NONE: Blow = Blow::new(BlowMethod::None, BlowEffect::None, Dice::ZERO);

    pub const fn new(method: BlowMethod, effect: BlowEffect, dice: Dice) -> Self {
        Self {
            method,
            effect,
            dice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shoot_is_not_melee() {
        assert!(BlowMethod::Shoot.is_active());
        assert!(!BlowMethod::Shoot.is_melee());
        assert!(!BlowMethod::None.is_melee());
        assert!(BlowMethod::Bite.is_melee());
        assert!(BlowMethod::Unknown.is_melee());
    }
}
