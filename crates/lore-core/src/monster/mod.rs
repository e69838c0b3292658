//! Monster race definitions
//!
//! Contains the static race templates the recall engine reads.

mod ability;
mod blow;
mod race;

pub use ability::AbilityFlags;
pub use blow::{Blow, BlowEffect, BlowMethod};
pub use race::{
    Dice, KindFlags, MonraceId, MonsterRace, RaceFlags, RaceTable, Reinforcement, ResistFlags,
    SpellDamage,
};
