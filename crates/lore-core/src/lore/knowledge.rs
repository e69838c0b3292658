//! Knowledge gating
//!
//! Turns a race plus its counters into the set of facts the recall is
//! allowed to speak about.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::MonsterLore;
use crate::grammar::Gender;
use crate::monster::{AbilityFlags, KindFlags, MonsterRace, RaceFlags, ResistFlags};
use crate::{MAX_BLOWS, MAX_UCHAR};

/// How much of a race the recall may reveal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LoreMode {
    /// Only what the player has observed
    #[default]
    Normal,
    /// Everything, as in the monster knowledge menu with full research
    FullKnowledge,
    /// Everything plus wizard fields, for spoiler dumps
    Debug,
}

impl LoreMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "normal" => Some(LoreMode::Normal),
            "full" | "full_knowledge" | "research" => Some(LoreMode::FullKnowledge),
            "debug" | "spoiler" => Some(LoreMode::Debug),
            _ => None,
        }
    }
}

/// Facts currently speakable about one race (lore_type)
///
/// Lives for a single recall. The phase markers are written by the
/// assembler while it walks the categories.
#[derive(Debug, Clone)]
pub struct LoreSnapshot<'a> {
    pub race: &'a MonsterRace,
    pub lore: &'a MonsterLore,
    pub mode: LoreMode,
    pub know_everything: bool,
    pub gender: Gender,

    pub flags: RaceFlags,
    pub kinds: KindFlags,
    pub resists: ResistFlags,
    pub abilities: AbilityFlags,

    /// A sentence has been opened and not yet closed
    pub old: bool,
    /// The ranged sentence opened with a launcher
    pub launched: bool,
    /// The ranged sentence already lists breaths
    pub breath: bool,
}

impl<'a> LoreSnapshot<'a> {
    /// Build the visible fact set; never fails
    pub fn new(race: &'a MonsterRace, lore: &'a MonsterLore, mode: LoreMode, cheat_know: bool) -> Self {
        let know_everything = mode != LoreMode::Normal || cheat_know;

        let (mut flags, resists, abilities) = if know_everything {
            (race.flags, race.resists, race.abilities)
        } else {
            (
                race.flags & lore.flags,
                race.resists & lore.resists,
                race.abilities & lore.abilities,
            )
        };

        flags |= race.flags & RaceFlags::OBVIOUS_MASK;

        // Kind is learned by examining a body, not by watching
        let kinds = if lore.tkills > 0 || know_everything {
            flags |= race.flags & RaceFlags::KILL_MASK;
            race.kinds
        } else {
            KindFlags::empty()
        };

        let gender = if flags.contains(RaceFlags::FEMALE) {
            Gender::Female
        } else if flags.contains(RaceFlags::MALE) {
            Gender::Male
        } else {
            Gender::Neuter
        };

        Self {
            race,
            lore,
            mode,
            know_everything,
            gender,
            flags,
            kinds,
            resists,
            abilities,
            old: false,
            launched: false,
            breath: false,
        }
    }

    pub fn is_unique(&self) -> bool {
        self.flags.contains(RaceFlags::UNIQUE)
    }

    /// Whether armor class and hit dice may be shown
    pub fn know_armor(&self) -> bool {
        if self.know_everything || self.lore.armor_known || self.lore.cast_spell == MAX_UCHAR {
            return true;
        }
        let level = i32::from(self.race.level);
        let kills = i32::from(self.lore.tkills);
        if kills > 304 / (4 + level) {
            return true;
        }
        self.race.is_unique() && kills > 304 / (38 + (5 * level) / 4)
    }

    /// Whether the damage of an ability may be shown
    pub fn know_spell_damage(&self, ability: AbilityFlags) -> bool {
        self.know_everything || self.lore.ability_damage.contains(ability) || self.know_armor()
    }

    /// Whether a blow slot is known to exist
    pub fn know_blow(&self, slot: usize) -> bool {
        slot < MAX_BLOWS && (self.know_everything || self.lore.blows[slot] > 0)
    }

    /// Whether the damage dice of a blow slot may be shown
    pub fn know_damage(&self, slot: usize) -> bool {
        if slot >= MAX_BLOWS {
            return false;
        }
        if self.know_everything || self.lore.blow_damage[slot] {
            return true;
        }
        let level = i64::from(self.race.level);
        let seen = i64::from(self.lore.blows[slot]);
        let dice = self.race.blows[slot].dice;
        let cap = ((4 + level) * i64::from(MAX_UCHAR) - 1) / 80;
        let d = (i64::from(dice.num) * i64::from(dice.sides)).min(cap);
        if (4 + level) * seen > 80 * d {
            return true;
        }
        self.race.is_unique() && (4 + level) * (2 * seen) > 80 * d
    }

    /// Largest gold and item drop the recall may describe
    pub fn drop_counts(&self) -> (u8, u8) {
        if !self.know_everything {
            return (self.lore.drop_gold, self.lore.drop_item);
        }
        let n = self.race.max_drops();
        let gold = if self.race.flags.contains(RaceFlags::ONLY_ITEM) { 0 } else { n };
        let item = if self.race.flags.contains(RaceFlags::ONLY_GOLD) { 0 } else { n };
        (gold, item)
    }

    /// Whether the race's movement and speed may be described
    pub fn know_movement(&self) -> bool {
        self.know_everything || self.lore.sights > 0
    }
}
