//! Monster spell and innate ability flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Abilities a race can use at range (RF_ABILITY_* equivalents)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AbilityFlags: u128 {
        // Launching
        const SHOOT = 1 << 0;
        const ROCKET = 1 << 1;

        // Breath weapons
        const BR_ACID = 1 << 2;
        const BR_ELEC = 1 << 3;
        const BR_FIRE = 1 << 4;
        const BR_COLD = 1 << 5;
        const BR_POIS = 1 << 6;
        const BR_NETH = 1 << 7;
        const BR_LITE = 1 << 8;
        const BR_DARK = 1 << 9;
        const BR_CONF = 1 << 10;
        const BR_SOUN = 1 << 11;
        const BR_CHAO = 1 << 12;
        const BR_DISE = 1 << 13;
        const BR_NEXU = 1 << 14;
        const BR_TIME = 1 << 15;
        const BR_INER = 1 << 16;
        const BR_GRAV = 1 << 17;
        const BR_SHAR = 1 << 18;
        const BR_PLAS = 1 << 19;
        const BR_WALL = 1 << 20;
        const BR_MANA = 1 << 21;
        const BR_NUKE = 1 << 22;
        const BR_DISI = 1 << 23;

        // Balls and storms
        const BA_ACID = 1 << 24;
        const BA_ELEC = 1 << 25;
        const BA_FIRE = 1 << 26;
        const BA_COLD = 1 << 27;
        const BA_POIS = 1 << 28;
        const BA_NETH = 1 << 29;
        const BA_WATE = 1 << 30;
        const BA_NUKE = 1 << 31;
        const BA_MANA = 1 << 32;
        const BA_DARK = 1 << 33;
        const BA_LITE = 1 << 34;
        const BA_CHAO = 1 << 35;

        // Single-target special attacks
        const HAND_DOOM = 1 << 36;
        const PSY_SPEAR = 1 << 37;
        const DRAIN_MANA = 1 << 38;
        const MIND_BLAST = 1 << 39;
        const BRAIN_SMASH = 1 << 40;
        const CAUSE_1 = 1 << 41;
        const CAUSE_2 = 1 << 42;
        const CAUSE_3 = 1 << 43;
        const CAUSE_4 = 1 << 44;

        // Bolts
        const BO_ACID = 1 << 45;
        const BO_ELEC = 1 << 46;
        const BO_FIRE = 1 << 47;
        const BO_COLD = 1 << 48;
        const BO_NETH = 1 << 49;
        const BO_WATE = 1 << 50;
        const BO_MANA = 1 << 51;
        const BO_PLAS = 1 << 52;
        const BO_ICEE = 1 << 53;
        const MISSILE = 1 << 54;

        // Status effects
        const SCARE = 1 << 55;
        const BLIND = 1 << 56;
        const CONF = 1 << 57;
        const SLOW = 1 << 58;
        const HOLD = 1 << 59;
        const HASTE = 1 << 60;
        const HEAL = 1 << 61;
        const INVULNER = 1 << 62;
        const DISPEL = 1 << 63;

        // Teleportation
        const BLINK = 1 << 64;
        const TPORT = 1 << 65;
        const WORLD = 1 << 66;
        const TELE_TO = 1 << 67;
        const TELE_AWAY = 1 << 68;
        const TELE_LEVEL = 1 << 69;

        // Floor and miscellaneous
        const DARKNESS = 1 << 70;
        const TRAPS = 1 << 71;
        const FORGET = 1 << 72;
        const RAISE_DEAD = 1 << 73;

        // Summons
        const S_MONSTER = 1 << 74;
        const S_MONSTERS = 1 << 75;
        const S_KIN = 1 << 76;
        const S_ANT = 1 << 77;
        const S_SPIDER = 1 << 78;
        const S_HOUND = 1 << 79;
        const S_HYDRA = 1 << 80;
        const S_ANGEL = 1 << 81;
        const S_DEMON = 1 << 82;
        const S_UNDEAD = 1 << 83;
        const S_DRAGON = 1 << 84;
        const S_HI_UNDEAD = 1 << 85;
        const S_HI_DRAGON = 1 << 86;
        const S_CYBER = 1 << 87;
        const S_AMBERITES = 1 << 88;
        const S_UNIQUE = 1 << 89;
    }
}

impl AbilityFlags {
    /// Every breath weapon
    pub const BREATH_MASK: Self = Self::from_bits_truncate(((1u128 << 24) - 1) & !0b11);

    /// Launching abilities, rendered apart from spells
    pub const LAUNCH_MASK: Self = Self::SHOOT.union(Self::ROCKET);

    /// Everything that is cast as a spell (not breath, not launching)
    pub const SPELL_MASK: Self = Self::all()
        .difference(Self::BREATH_MASK)
        .difference(Self::LAUNCH_MASK);
}

impl Serialize for AbilityFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AbilityFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u128::deserialize(deserializer)?;
        Ok(AbilityFlags::from_bits_truncate(bits))
    }
}
