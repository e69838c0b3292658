//! Per-race observation counters
//!
//! These are the only mutable inputs of recall. They grow as the player
//! meets, fights and kills monsters, and are persisted between sessions.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::monster::{AbilityFlags, MonraceId, MonsterRace, RaceFlags, ResistFlags};
use crate::{MAX_BLOWS, MAX_UCHAR};

/// What the player has learned about one race (r_* fields)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterLore {
    /// Times a member of the race was seen
    pub sights: u16,
    /// Characters (this one and ancestors) killed by the race
    pub deaths: u16,
    /// Kills by the current character
    pub pkills: u16,
    /// Kills by anyone, across all characters
    pub tkills: u16,
    /// Times a member woke up while watched
    pub wake: u8,
    /// Times a member ignored the player
    pub ignore: u8,
    /// Spells seen cast; 255 means every spell damage is known
    pub cast_spell: u8,
    /// Largest gold drop seen
    pub drop_gold: u8,
    /// Largest item drop seen
    pub drop_item: u8,
    /// Whether the player has seen the race evolve
    pub can_evolve: bool,

    /// Observed flags
    pub flags: RaceFlags,
    pub resists: ResistFlags,
    pub abilities: AbilityFlags,

    /// Abilities whose damage the player has taken
    pub ability_damage: AbilityFlags,

    /// Times each blow slot was seen
    pub blows: [u8; MAX_BLOWS],
    /// Blow slots whose damage the player has taken
    pub blow_damage: [bool; MAX_BLOWS],

    /// Armor and hit dice known by probing
    pub armor_known: bool,

    /// Members still alive for uniques and population-capped races;
    /// `None` until the first kill, meaning the population is full
    pub remaining: Option<u8>,
}

/// Counters of a race nobody has ever seen
pub static UNSEEN: MonsterLore = MonsterLore::new();

impl MonsterLore {
    pub const fn new() -> Self {
        Self {
            sights: 0,
            deaths: 0,
            pkills: 0,
            tkills: 0,
            wake: 0,
            ignore: 0,
            cast_spell: 0,
            drop_gold: 0,
            drop_item: 0,
            can_evolve: false,
            flags: RaceFlags::empty(),
            resists: ResistFlags::empty(),
            abilities: AbilityFlags::empty(),
            ability_damage: AbilityFlags::empty(),
            blows: [0; MAX_BLOWS],
            blow_damage: [false; MAX_BLOWS],
            armor_known: false,
            remaining: None,
        }
    }

    /// Record a sighting
    pub fn record_sighting(&mut self) {
        self.sights = self.sights.saturating_add(1);
    }

    /// Record a kill, by the current character or another
    pub fn record_kill(&mut self, race: &MonsterRace, by_player: bool) {
        self.tkills = self.tkills.saturating_add(1);
        if by_player {
            self.pkills = self.pkills.saturating_add(1);
        }
        if race.max_population().is_some() {
            self.remaining = Some(self.alive(race).saturating_sub(1));
        }
    }

    /// Members of a limited race still alive
    pub fn alive(&self, race: &MonsterRace) -> u8 {
        self.remaining
            .or(race.max_population())
            .unwrap_or(0)
    }

    /// Record the race killing a character
    pub fn record_death(&mut self) {
        self.deaths = self.deaths.saturating_add(1);
    }

    /// Record an ability being used, and whether its damage was felt
    pub fn record_ability(&mut self, ability: AbilityFlags, damaged: bool) {
        self.abilities |= ability;
        if damaged {
            self.ability_damage |= ability;
        }
        if self.cast_spell < MAX_UCHAR - 1 {
            self.cast_spell += 1;
        }
    }

    /// Record a melee blow from a slot
    pub fn record_blow(&mut self, slot: usize, damaged: bool) {
        if slot >= MAX_BLOWS {
            return;
        }
        self.blows[slot] = self.blows[slot].saturating_add(1);
        if damaged {
            self.blow_damage[slot] = true;
        }
    }

    /// Check if nothing at all has been learned
    pub fn is_blank(&self) -> bool {
        self == &UNSEEN
    }
}

impl Default for MonsterLore {
    fn default() -> Self {
        Self::new()
    }
}

/// Lore counters of every race the player has met
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreBook {
    entries: HashMap<MonraceId, MonsterLore>,
}

impl LoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters of a race; unseen races get the empty record
    pub fn get(&self, id: MonraceId) -> &MonsterLore {
        self.entries.get(&id).unwrap_or(&UNSEEN)
    }

    pub fn get_mut(&mut self, id: MonraceId) -> &mut MonsterLore {
        self.entries.entry(id).or_default()
    }

    pub fn insert(&mut self, id: MonraceId, lore: MonsterLore) {
        self.entries.insert(id, lore);
    }

    /// Number of races with any recorded knowledge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Races in id order, for stable iteration
    pub fn known_races(&self) -> Vec<MonraceId> {
        let mut ids: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, lore)| !lore.is_blank())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Forget everything about a race
    pub fn forget(&mut self, id: MonraceId) -> Option<MonsterLore> {
        self.entries.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_default() {
        let book = LoreBook::new();
        let lore = book.get(MonraceId(42));
        assert!(lore.is_blank());
        assert_eq!(lore.sights, 0);
    }

    #[test]
    fn test_record_kill_updates_counts() {
        let unique = MonsterRace {
            flags: RaceFlags::UNIQUE,
            ..MonsterRace::BLANK
        };
        let mut lore = MonsterLore::new();
        assert_eq!(lore.alive(&unique), 1);
        lore.record_kill(&unique, true);
        lore.record_kill(&unique, false);
        assert_eq!(lore.tkills, 2);
        assert_eq!(lore.pkills, 1);
        assert_eq!(lore.alive(&unique), 0);
    }

    #[test]
    fn test_unlimited_race_has_no_population() {
        let mut lore = MonsterLore::new();
        lore.record_kill(&MonsterRace::BLANK, true);
        assert_eq!(lore.remaining, None);
        assert_eq!(lore.alive(&MonsterRace::BLANK), 0);
    }

    #[test]
    fn test_capped_population_counts_down() {
        let capped = MonsterRace {
            population_cap: Some(9),
            ..MonsterRace::BLANK
        };
        let mut lore = MonsterLore::new();
        lore.record_kill(&capped, true);
        assert_eq!(lore.alive(&capped), 8);
    }

    #[test]
    fn test_record_ability_sets_bits() {
        let mut lore = MonsterLore::new();
        lore.record_ability(AbilityFlags::BR_FIRE, false);
        assert!(lore.abilities.contains(AbilityFlags::BR_FIRE));
        assert!(!lore.ability_damage.contains(AbilityFlags::BR_FIRE));
        lore.record_ability(AbilityFlags::BR_FIRE, true);
        assert!(lore.ability_damage.contains(AbilityFlags::BR_FIRE));
        assert_eq!(lore.cast_spell, 2);
    }

    #[test]
    fn test_cast_spell_never_reaches_full_knowledge_marker() {
        let mut lore = MonsterLore::new();
        for _ in 0..400 {
            lore.record_ability(AbilityFlags::BO_FIRE, false);
        }
        assert_eq!(lore.cast_spell, MAX_UCHAR - 1);
    }

    #[test]
    fn test_blow_slot_out_of_range_ignored() {
        let mut lore = MonsterLore::new();
        lore.record_blow(MAX_BLOWS, true);
        assert!(lore.is_blank());
        lore.record_blow(0, true);
        assert_eq!(lore.blows[0], 1);
        assert!(lore.blow_damage[0]);
    }

    #[test]
    fn test_known_races_sorted() {
        let mut book = LoreBook::new();
        book.get_mut(MonraceId(9)).record_sighting();
        book.get_mut(MonraceId(3)).record_sighting();
        book.get_mut(MonraceId(5));
        assert_eq!(book.known_races(), vec![MonraceId(3), MonraceId(9)]);
    }

    #[test]
    fn test_lore_serde_round_trip() {
        let mut book = LoreBook::new();
        let lore = book.get_mut(MonraceId(7));
        lore.sights = 3;
        lore.flags = RaceFlags::UNIQUE | RaceFlags::CAN_FLY;
        lore.abilities = AbilityFlags::BR_FIRE;
        let json = serde_json::to_string(&book).unwrap();
        let back: LoreBook = serde_json::from_str(&json).unwrap();
        assert_eq!(book, back);
    }
}
