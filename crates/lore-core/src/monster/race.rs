//! Monster race templates (monster_race equivalent)
//!
//! A race is the immutable species definition. Everything the recall engine
//! may ever say about a monster is derived from these fields, filtered
//! through the player's [`crate::lore::MonsterLore`] counters.

use core::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{AbilityFlags, Blow};
use crate::data::TermColor;
use crate::grammar::Language;
use crate::{MAX_BLOWS, MAX_REINFORCEMENTS, STANDARD_SPEED};

/// Identifier of a monster race
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct MonraceId(pub u16);

impl MonraceId {
    /// The shapeshifter whose recall stops after its depth
    pub const CHAMELEON: MonraceId = MonraceId(1083);
    /// First of the two final kingpins
    pub const OBERON: MonraceId = MonraceId(1038);
    /// Second of the two final kingpins
    pub const SERPENT: MonraceId = MonraceId(1082);

    /// Check if this is one of the two hardcoded final bosses
    pub const fn is_kingpin(self) -> bool {
        self.0 == Self::OBERON.0 || self.0 == Self::SERPENT.0
    }
}

impl fmt::Display for MonraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dice expression `NdS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dice {
    pub num: u16,
    pub sides: u16,
}

impl Dice {
    pub const ZERO: Dice = Dice::new(0, 0);

    pub const fn new(num: u16, sides: u16) -> Self {
        Self { num, sides }
    }

    /// Check if both dice count and sides are non-zero
    pub const fn is_rollable(&self) -> bool {
        self.num > 0 && self.sides > 0
    }

    /// Maximum value the expression can roll
    pub const fn max(&self) -> u32 {
        self.num as u32 * self.sides as u32
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

/// Damage formula of one ability: `base + NdS * mult / div`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellDamage {
    pub ability: AbilityFlags,
    pub base: i32,
    pub dice: Dice,
    pub mult: i32,
    pub div: i32,
}

impl SpellDamage {
    /// Plain `NdS` damage
    pub const fn dice(ability: AbilityFlags, num: u16, sides: u16) -> Self {
        Self {
            ability,
            base: 0,
            dice: Dice::new(num, sides),
            mult: 1,
            div: 1,
        }
    }

    /// Fixed damage without dice
    pub const fn fixed(ability: AbilityFlags, base: i32) -> Self {
        Self {
            ability,
            base,
            dice: Dice::ZERO,
            mult: 1,
            div: 1,
        }
    }

    /// `base + NdS`
    pub const fn with_base(ability: AbilityFlags, base: i32, num: u16, sides: u16) -> Self {
        Self {
            ability,
            base,
            dice: Dice::new(num, sides),
            mult: 1,
            div: 1,
        }
    }

    /// Scale the dice part by `mult / div`
    pub const fn scaled(mut self, mult: i32, div: i32) -> Self {
        self.mult = mult;
        self.div = div;
        self
    }
}

/// One escort group entry: `dice` members of `race`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reinforcement {
    pub race: MonraceId,
    pub dice: Dice,
}

impl Reinforcement {
    pub const fn new(race: MonraceId, num: u16, sides: u16) -> Self {
        Self {
            race,
            dice: Dice::new(num, sides),
        }
    }
}

bitflags! {
    /// Kind and alignment flags, learned only by examining a corpse
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KindFlags: u16 {
        const DRAGON = 0x0001;
        const DEMON = 0x0002;
        const GIANT = 0x0004;
        const TROLL = 0x0008;
        const ORC = 0x0010;
        const ANGEL = 0x0020;
        const HUMAN = 0x0040;
        const QUANTUM = 0x0080;
        const ANIMAL = 0x0100;
        const EVIL = 0x0200;
        const GOOD = 0x0400;
        const UNDEAD = 0x0800;
        const AMBERITE = 0x1000;
        const ELDRITCH_HORROR = 0x2000;
    }
}

bitflags! {
    /// Behavior, movement, constitution and drop flags (RF1/RF2/RF3/RF7 subset)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RaceFlags: u64 {
        // Obvious flags
        const UNIQUE = 1 << 0;
        const QUESTOR = 1 << 1;
        const MALE = 1 << 2;
        const FEMALE = 1 << 3;
        const ESCORT = 1 << 4;
        const ESCORTS = 1 << 5;
        const FRIENDS = 1 << 6;
        const GUARDIAN = 1 << 7;

        // Movement
        const NEVER_MOVE = 1 << 8;
        const NEVER_BLOW = 1 << 9;
        const RAND_25 = 1 << 10;
        const RAND_50 = 1 << 11;
        const FORCE_DEPTH = 1 << 12;
        const FORCE_MAXHP = 1 << 13;

        // Mind and body
        const SMART = 1 << 14;
        const REFLECTING = 1 << 15;
        const INVISIBLE = 1 << 16;
        const COLD_BLOOD = 1 << 17;
        const EMPTY_MIND = 1 << 18;
        const WEIRD_MIND = 1 << 19;
        const MULTIPLY = 1 << 20;
        const REGENERATE = 1 << 21;
        const AQUATIC = 1 << 22;
        const SELF_LITE = 1 << 23;
        const SELF_DARK = 1 << 24;
        const HAS_LITE = 1 << 25;
        const HAS_DARK = 1 << 26;
        const RIDING = 1 << 27;

        // Capabilities
        const OPEN_DOOR = 1 << 28;
        const BASH_DOOR = 1 << 29;
        const CAN_FLY = 1 << 30;
        const CAN_SWIM = 1 << 31;
        const PASS_WALL = 1 << 32;
        const KILL_WALL = 1 << 33;
        const MOVE_BODY = 1 << 34;
        const KILL_BODY = 1 << 35;
        const TAKE_ITEM = 1 << 36;
        const KILL_ITEM = 1 << 37;

        // Auras
        const AURA_FIRE = 1 << 38;
        const AURA_ELEC = 1 << 39;
        const AURA_COLD = 1 << 40;

        // Weaknesses
        const HURT_ROCK = 1 << 41;
        const HURT_LITE = 1 << 42;
        const HURT_FIRE = 1 << 43;
        const HURT_COLD = 1 << 44;

        // Status immunities
        const NO_STUN = 1 << 45;
        const NO_FEAR = 1 << 46;
        const NO_CONF = 1 << 47;
        const NO_SLEEP = 1 << 48;

        // Drops
        const DROP_60 = 1 << 49;
        const DROP_90 = 1 << 50;
        const DROP_1D2 = 1 << 51;
        const DROP_2D2 = 1 << 52;
        const DROP_3D2 = 1 << 53;
        const DROP_4D2 = 1 << 54;
        const DROP_GOOD = 1 << 55;
        const DROP_GREAT = 1 << 56;
        const ONLY_GOLD = 1 << 57;
        const ONLY_ITEM = 1 << 58;
    }
}

impl RaceFlags {
    /// Flags anyone who has seen the race knows about
    pub const OBVIOUS_MASK: Self = Self::UNIQUE
        .union(Self::QUESTOR)
        .union(Self::MALE)
        .union(Self::FEMALE)
        .union(Self::ESCORT)
        .union(Self::ESCORTS)
        .union(Self::FRIENDS)
        .union(Self::GUARDIAN);

    /// Flags revealed by a kill, together with the kind flags
    pub const KILL_MASK: Self = Self::FORCE_DEPTH.union(Self::FORCE_MAXHP);

    /// Drop-quantity flags
    pub const DROP_QUANTITY_MASK: Self = Self::DROP_60
        .union(Self::DROP_90)
        .union(Self::DROP_1D2)
        .union(Self::DROP_2D2)
        .union(Self::DROP_3D2)
        .union(Self::DROP_4D2);
}

bitflags! {
    /// Elemental immunities and resistances
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResistFlags: u32 {
        const IM_ACID = 1 << 0;
        const IM_ELEC = 1 << 1;
        const IM_FIRE = 1 << 2;
        const IM_COLD = 1 << 3;
        const IM_POIS = 1 << 4;
        const RES_LITE = 1 << 5;
        const RES_DARK = 1 << 6;
        const RES_NETH = 1 << 7;
        const RES_WATE = 1 << 8;
        const RES_PLAS = 1 << 9;
        const RES_SHAR = 1 << 10;
        const RES_SOUN = 1 << 11;
        const RES_CHAO = 1 << 12;
        const RES_NEXU = 1 << 13;
        const RES_DISE = 1 << 14;
        const RES_WALL = 1 << 15;
        const RES_INER = 1 << 16;
        const RES_TIME = 1 << 17;
        const RES_GRAV = 1 << 18;
        const RES_ALL = 1 << 19;
        const RES_TELE = 1 << 20;
    }
}

macro_rules! bits_serde {
    ($flags:ty, $bits:ty) => {
        impl Serialize for $flags {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.bits().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $flags {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bits = <$bits>::deserialize(deserializer)?;
                Ok(<$flags>::from_bits_truncate(bits))
            }
        }
    };
}

bits_serde!(KindFlags, u16);
bits_serde!(RaceFlags, u64);
bits_serde!(ResistFlags, u32);

/// Monster race template (static data for each race)
#[derive(Debug, Clone)]
pub struct MonsterRace {
    pub id: MonraceId,

    /// English name
    pub name: &'static str,

    /// Japanese name, when the build carries one
    pub japanese_name: Option<&'static str>,

    /// Flavor description
    pub text: &'static str,

    /// Japanese flavor description
    pub japanese_text: Option<&'static str>,

    /// Display symbol and color
    pub symbol: char,
    pub color: TermColor,

    /// Native dungeon level (0 = town)
    pub level: u8,

    /// Generation rarity (1 in N)
    pub rarity: u8,

    /// Speed, 110 is normal
    pub speed: i16,

    pub armor_class: i16,

    pub hit_dice: Dice,

    /// Inactivity; higher sleeps deeper
    pub sleep: u16,

    /// Detection range in tens of feet
    pub aaf: u8,

    /// Base experience per level of the monster
    pub exp: u32,

    /// Spell frequency as a percentage (1 in 100/freq)
    pub freq_spell: u8,

    pub kinds: KindFlags,
    pub flags: RaceFlags,
    pub resists: ResistFlags,
    pub abilities: AbilityFlags,

    /// Damage formulas for damaging abilities
    pub spell_damage: &'static [SpellDamage],

    pub blows: [Blow; MAX_BLOWS],

    /// Escort composition
    pub reinforcements: &'static [Reinforcement],

    /// Race this one evolves into
    pub next_race: Option<MonraceId>,
    pub next_exp: u32,

    /// Maximum number alive at once for population-capped races
    pub population_cap: Option<u8>,
}

impl MonsterRace {
    /// Template used with struct update syntax when defining races
    pub const BLANK: MonsterRace = MonsterRace {
        id: MonraceId(0),
        name: "",
        japanese_name: None,
        text: "",
        japanese_text: None,
        symbol: '?',
        color: TermColor::White,
        level: 0,
        rarity: 1,
        speed: STANDARD_SPEED,
        armor_class: 0,
        hit_dice: Dice::new(1, 1),
        sleep: 0,
        aaf: 20,
        exp: 0,
        freq_spell: 0,
        kinds: KindFlags::empty(),
        flags: RaceFlags::empty(),
        resists: ResistFlags::empty(),
        abilities: AbilityFlags::empty(),
        spell_damage: &[],
        blows: [Blow::NONE; MAX_BLOWS],
        reinforcements: &[],
        next_race: None,
        next_exp: 0,
        population_cap: None,
    };

    /// Check if the race is a unique monster
    pub const fn is_unique(&self) -> bool {
        self.flags.contains(RaceFlags::UNIQUE)
    }

    /// Name in the requested language, falling back to the English name
    pub fn name_in(&self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.japanese_name.unwrap_or(self.name),
            Language::English => self.name,
        }
    }

    /// Description in the requested language, falling back to English
    pub fn text_in(&self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.japanese_text.unwrap_or(self.text),
            Language::English => self.text,
        }
    }

    /// Damage formula of an ability, if it has one
    pub fn spell_damage(&self, ability: AbilityFlags) -> Option<&SpellDamage> {
        self.spell_damage.iter().find(|d| d.ability == ability)
    }

    /// Escort entries that actually produce monsters
    pub fn reinforcements(&self) -> impl Iterator<Item = &Reinforcement> {
        self.reinforcements
            .iter()
            .take(MAX_REINFORCEMENTS)
            .filter(|r| r.race.0 > 0 && r.dice.is_rollable())
    }

    /// Largest number of objects a single kill can drop
    pub fn max_drops(&self) -> u8 {
        let f = self.flags;
        let mut n = 0;
        if f.contains(RaceFlags::DROP_4D2) {
            n += 8;
        }
        if f.contains(RaceFlags::DROP_3D2) {
            n += 6;
        }
        if f.contains(RaceFlags::DROP_2D2) {
            n += 4;
        }
        if f.contains(RaceFlags::DROP_1D2) {
            n += 2;
        }
        if f.contains(RaceFlags::DROP_90) {
            n += 1;
        }
        if f.contains(RaceFlags::DROP_60) {
            n += 1;
        }
        n
    }

    /// Population limit: the cap for capped races, one for uniques
    pub fn max_population(&self) -> Option<u8> {
        match self.population_cap {
            Some(cap) => Some(cap),
            None if self.is_unique() => Some(1),
            None => None,
        }
    }

    /// Slot of the ranged shot blow, if the race has one
    pub fn shoot_slot(&self) -> Option<usize> {
        self.blows
            .iter()
            .position(|b| b.method == super::BlowMethod::Shoot)
    }
}

/// Read-only table of every race, ordered by id
#[derive(Debug, Clone, Default)]
pub struct RaceTable {
    races: Vec<MonsterRace>,
}

impl RaceTable {
    /// Build a table; later duplicates of an id replace earlier ones
    pub fn new(mut races: Vec<MonsterRace>) -> Self {
        races.sort_by_key(|r| r.id);
        races.reverse();
        races.dedup_by_key(|r| r.id);
        races.reverse();
        Self { races }
    }

    pub fn get(&self, id: MonraceId) -> Option<&MonsterRace> {
        self.races
            .binary_search_by_key(&id, |r| r.id)
            .ok()
            .map(|i| &self.races[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonsterRace> {
        self.races.iter()
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }

    /// Find a race by English or Japanese name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&MonsterRace> {
        let wanted = name.trim().to_lowercase();
        self.races.iter().find(|r| {
            r.name.to_lowercase() == wanted || r.japanese_name.is_some_and(|j| j == name.trim())
        })
    }

    /// Races whose display symbol matches
    pub fn with_symbol(&self, symbol: char) -> impl Iterator<Item = &MonsterRace> {
        self.races.iter().filter(move |r| r.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn race(id: u16, name: &'static str) -> MonsterRace {
        MonsterRace {
            id: MonraceId(id),
            name,
            ..MonsterRace::BLANK
        }
    }

    #[test]
    fn test_table_lookup_and_dedup() {
        let table = RaceTable::new(vec![race(5, "kobold"), race(2, "newt"), race(5, "large kobold")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(MonraceId(2)).map(|r| r.name), Some("newt"));
        assert_eq!(table.get(MonraceId(5)).map(|r| r.name), Some("large kobold"));
        assert!(table.get(MonraceId(7)).is_none());
    }

    #[test]
    fn test_find_by_name() {
        let table = RaceTable::new(vec![race(1, "Grip, Farmer Maggot's Dog")]);
        assert!(table.find_by_name("grip, farmer maggot's dog").is_some());
        assert!(table.find_by_name("Fang").is_none());
    }

    #[test]
    fn test_name_fallback() {
        let r = race(1, "newt");
        assert_eq!(r.name_in(Language::Japanese), "newt");
        let jr = MonsterRace {
            japanese_name: Some("イモリ"),
            ..r
        };
        assert_eq!(jr.name_in(Language::Japanese), "イモリ");
        assert_eq!(jr.name_in(Language::English), "newt");
    }

    #[test]
    fn test_max_drops() {
        let mut r = race(1, "orc");
        r.flags = RaceFlags::DROP_60 | RaceFlags::DROP_90;
        assert_eq!(r.max_drops(), 2);
        r.flags |= RaceFlags::DROP_4D2;
        assert_eq!(r.max_drops(), 10);
    }

    #[test]
    fn test_kingpin_ids() {
        assert!(MonraceId::OBERON.is_kingpin());
        assert!(MonraceId::SERPENT.is_kingpin());
        assert!(!MonraceId::CHAMELEON.is_kingpin());
    }
}
