//! Monster race definitions

use lore_core::data::TermColor;
use lore_core::monster::{
    AbilityFlags, Blow, BlowEffect, BlowMethod, Dice, KindFlags, MonraceId, MonsterRace, RaceFlags,
    RaceTable, Reinforcement, ResistFlags, SpellDamage,
};

/// `flags!(RaceFlags: A | B)` in const context
macro_rules! flags {
    ($ty:ident: $($flag:ident)|+) => {
        $ty::empty()$(.union($ty::$flag))+
    };
}

const fn blow(method: BlowMethod, effect: BlowEffect, num: u16, sides: u16) -> Blow {
    Blow::new(method, effect, Dice::new(num, sides))
}

const NO_BLOW: Blow = Blow::NONE;

const SNAGA: MonraceId = MonraceId(118);
const CAVE_ORC: MonraceId = MonraceId(87);
const LARGE_KOBOLD: MonraceId = MonraceId(23);
const YOUNG_RED_DRAGON: MonraceId = MonraceId(560);

pub static MONSTER_RACES: &[MonsterRace] = &[
    MonsterRace {
        id: MonraceId(21),
        name: "Scruffy little dog",
        japanese_name: Some("みすぼらしい小型犬"),
        text: "A thin flea-ridden mutt, growling as you get close.",
        japanese_text: Some("ノミのたかった痩せた雑種犬だ。近づくとうなり声をあげる。"),
        symbol: 'C',
        color: TermColor::Umber,
        level: 0,
        speed: 110,
        hit_dice: Dice::new(1, 3),
        armor_class: 1,
        sleep: 10,
        aaf: 5,
        kinds: flags!(KindFlags: ANIMAL),
        flags: flags!(RaceFlags: RAND_25),
        blows: [blow(BlowMethod::Bite, BlowEffect::Hurt, 1, 3), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(3),
        name: "Grey mold",
        japanese_name: Some("灰色カビ"),
        text: "A small strange grey growth.",
        symbol: 'm',
        color: TermColor::Slate,
        level: 1,
        hit_dice: Dice::new(28, 1),
        armor_class: 1,
        exp: 3,
        aaf: 2,
        flags: flags!(RaceFlags: NEVER_MOVE | EMPTY_MIND | HURT_LITE | NO_FEAR | NO_CONF | NO_SLEEP),
        resists: flags!(ResistFlags: IM_POIS),
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 4),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 4),
            NO_BLOW,
            NO_BLOW,
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(31),
        name: "Floating eye",
        japanese_name: Some("浮遊眼"),
        text: "A disembodied eye, floating a few feet above the ground.",
        japanese_text: Some("地上数フィートの所に浮かんでいる目玉だ。"),
        symbol: 'e',
        color: TermColor::Orange,
        level: 1,
        hit_dice: Dice::new(11, 8),
        armor_class: 7,
        exp: 1,
        sleep: 10,
        aaf: 2,
        flags: flags!(RaceFlags: NEVER_MOVE | HURT_LITE | NO_FEAR),
        blows: [blow(BlowMethod::Gaze, BlowEffect::Paralyze, 0, 0), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(24),
        name: "Jackal",
        japanese_name: Some("ジャッカル"),
        text: "It is a yapping snarling dog, dangerous when in a pack.",
        symbol: 'C',
        color: TermColor::Umber,
        level: 1,
        hit_dice: Dice::new(1, 8),
        armor_class: 3,
        exp: 1,
        sleep: 10,
        aaf: 10,
        kinds: flags!(KindFlags: ANIMAL),
        flags: flags!(RaceFlags: FRIENDS),
        blows: [blow(BlowMethod::Bite, BlowEffect::Hurt, 1, 3), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(23),
        name: "Large kobold",
        japanese_name: Some("大型コボルド"),
        text: "It is a man-sized figure with the all too recognizable face of a kobold.",
        symbol: 'k',
        color: TermColor::Blue,
        level: 13,
        hit_dice: Dice::new(12, 9),
        armor_class: 32,
        exp: 100,
        sleep: 30,
        aaf: 20,
        kinds: flags!(KindFlags: EVIL),
        flags: flags!(RaceFlags: MALE | OPEN_DOOR | BASH_DOOR | DROP_60),
        resists: flags!(ResistFlags: IM_POIS),
        blows: [blow(BlowMethod::Hit, BlowEffect::Hurt, 3, 8), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(54),
        name: "Grip, Farmer Maggot's Dog",
        japanese_name: Some("農夫マゴットの飼い犬グリップ"),
        text: "A rather vicious dog belonging to Farmer Maggot.",
        symbol: 'C',
        color: TermColor::LightWhite,
        level: 2,
        rarity: 1,
        speed: 120,
        hit_dice: Dice::new(5, 1),
        armor_class: 20,
        exp: 30,
        aaf: 30,
        kinds: flags!(KindFlags: ANIMAL),
        flags: flags!(RaceFlags: UNIQUE | FORCE_MAXHP | RAND_25),
        blows: [blow(BlowMethod::Bite, BlowEffect::Hurt, 1, 6), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(60),
        name: "Cave spider",
        japanese_name: Some("洞窟蜘蛛"),
        text: "It is a black spider that moves in fits and starts.",
        symbol: 'S',
        color: TermColor::LightDark,
        level: 2,
        speed: 120,
        hit_dice: Dice::new(1, 4),
        armor_class: 19,
        exp: 1,
        aaf: 8,
        kinds: flags!(KindFlags: ANIMAL),
        flags: flags!(RaceFlags: FRIENDS | WEIRD_MIND | HURT_LITE | KILL_BODY),
        blows: [blow(BlowMethod::Bite, BlowEffect::Hurt, 1, 4), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(118),
        name: "Snaga",
        japanese_name: Some("スナガ"),
        text: "He is one of the many weaker 'slave' orcs, often mistakenly known as a goblin.",
        symbol: 'o',
        color: TermColor::Umber,
        level: 3,
        hit_dice: Dice::new(8, 8),
        armor_class: 38,
        exp: 10,
        sleep: 30,
        aaf: 20,
        kinds: flags!(KindFlags: ORC | EVIL),
        flags: flags!(RaceFlags: MALE | FRIENDS | OPEN_DOOR | BASH_DOOR | HURT_LITE | DROP_60),
        blows: [blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(87),
        name: "Cave orc",
        japanese_name: Some("洞窟オーク"),
        text: "He is often found in huge numbers in deep caves.",
        symbol: 'o',
        color: TermColor::Green,
        level: 7,
        hit_dice: Dice::new(11, 10),
        armor_class: 36,
        exp: 30,
        sleep: 30,
        aaf: 20,
        kinds: flags!(KindFlags: ORC | EVIL),
        flags: flags!(RaceFlags: MALE | FRIENDS | OPEN_DOOR | BASH_DOOR | HURT_LITE | DROP_60),
        blows: [blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 8), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(131),
        name: "Bullroarer the Hobbit",
        japanese_name: Some("ホビットのブルローラー"),
        text: "He is a sturdy hobbit who is renowned for his unusual strength and vigour.",
        symbol: 'h',
        color: TermColor::Blue,
        level: 10,
        rarity: 3,
        speed: 120,
        hit_dice: Dice::new(20, 10),
        armor_class: 12,
        exp: 90,
        sleep: 10,
        aaf: 16,
        flags: flags!(
            RaceFlags: UNIQUE | MALE | FORCE_MAXHP | ESCORT | OPEN_DOOR | BASH_DOOR | DROP_90 | DROP_GOOD
        ),
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            NO_BLOW,
            NO_BLOW,
        ],
        reinforcements: &[Reinforcement::new(SNAGA, 2, 3), Reinforcement::new(CAVE_ORC, 1, 1)],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(163),
        name: "Baby red dragon",
        japanese_name: Some("ベビー・レッド・ドラゴン"),
        text: "This large dragon is red, with a crest of fire running down its back.",
        symbol: 'd',
        color: TermColor::Red,
        level: 11,
        rarity: 2,
        hit_dice: Dice::new(29, 10),
        armor_class: 36,
        exp: 88,
        sleep: 70,
        aaf: 20,
        freq_spell: 12,
        kinds: flags!(KindFlags: DRAGON | EVIL),
        flags: flags!(RaceFlags: FORCE_MAXHP | BASH_DOOR | DROP_60 | DROP_90),
        resists: flags!(ResistFlags: IM_FIRE),
        abilities: flags!(AbilityFlags: BR_FIRE | SCARE),
        spell_damage: &[SpellDamage::dice(AbilityFlags::BR_FIRE, 6, 10)],
        blows: [
            blow(BlowMethod::Claw, BlowEffect::Hurt, 1, 8),
            blow(BlowMethod::Claw, BlowEffect::Hurt, 1, 8),
            blow(BlowMethod::Bite, BlowEffect::Hurt, 1, 10),
            NO_BLOW,
        ],
        next_race: Some(YOUNG_RED_DRAGON),
        next_exp: 1500,
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(560),
        name: "Young red dragon",
        japanese_name: Some("ヤング・レッド・ドラゴン"),
        text: "It is a dragon growing into its fierce red scales.",
        symbol: 'd',
        color: TermColor::Red,
        level: 36,
        rarity: 1,
        hit_dice: Dice::new(30, 27),
        armor_class: 72,
        exp: 640,
        sleep: 50,
        aaf: 20,
        freq_spell: 9,
        kinds: flags!(KindFlags: DRAGON | EVIL),
        flags: flags!(RaceFlags: FORCE_MAXHP | BASH_DOOR | DROP_1D2 | DROP_90 | DROP_GOOD),
        resists: flags!(ResistFlags: IM_FIRE),
        abilities: flags!(AbilityFlags: BR_FIRE | SCARE | CONF),
        spell_damage: &[SpellDamage::dice(AbilityFlags::BR_FIRE, 12, 20)],
        blows: [
            blow(BlowMethod::Claw, BlowEffect::Hurt, 1, 9),
            blow(BlowMethod::Claw, BlowEffect::Hurt, 1, 9),
            blow(BlowMethod::Bite, BlowEffect::Fire, 2, 10),
            NO_BLOW,
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(180),
        name: "Wormtongue, Agent of Saruman",
        japanese_name: Some("サルマンの手先、蛇の舌"),
        text: "He's been spying for Saruman. He is a snivelling wretch with no morals.",
        symbol: 'p',
        color: TermColor::Blue,
        level: 16,
        rarity: 1,
        hit_dice: Dice::new(28, 10),
        armor_class: 24,
        exp: 150,
        sleep: 20,
        aaf: 20,
        freq_spell: 20,
        kinds: flags!(KindFlags: HUMAN | EVIL),
        flags: flags!(
            RaceFlags: UNIQUE | MALE | FORCE_MAXHP | SMART | OPEN_DOOR | BASH_DOOR | DROP_1D2 | DROP_90
                | DROP_GOOD | DROP_GREAT
        ),
        abilities: flags!(AbilityFlags: BA_POIS | BO_COLD | SLOW | HEAL | TRAPS),
        spell_damage: &[
            SpellDamage::dice(AbilityFlags::BA_POIS, 12, 2),
            SpellDamage::with_base(AbilityFlags::BO_COLD, 16, 6, 8),
        ],
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 5),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 5),
            blow(BlowMethod::Touch, BlowEffect::EatGold, 0, 0),
            blow(BlowMethod::Insult, BlowEffect::None, 0, 0),
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(230),
        name: "Dark elven priest",
        japanese_name: Some("ダークエルフの僧侶"),
        text: "A dark elven figure, dressed all in black, chanting curses and waiting for your death.",
        symbol: 'h',
        color: TermColor::Green,
        level: 12,
        hit_dice: Dice::new(7, 10),
        armor_class: 45,
        exp: 50,
        sleep: 30,
        aaf: 20,
        freq_spell: 20,
        kinds: flags!(KindFlags: EVIL),
        flags: flags!(RaceFlags: MALE | OPEN_DOOR | BASH_DOOR | HURT_LITE | DROP_1D2),
        abilities: flags!(AbilityFlags: CAUSE_2 | BLIND | CONF | HEAL | DARKNESS | S_MONSTER),
        spell_damage: &[SpellDamage::dice(AbilityFlags::CAUSE_2, 8, 8)],
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 9),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            NO_BLOW,
            NO_BLOW,
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(320),
        name: "Orc archer",
        japanese_name: Some("オークの弓兵"),
        text: "An orc with a longbow, looking for something to shoot.",
        symbol: 'o',
        color: TermColor::LightUmber,
        level: 13,
        hit_dice: Dice::new(11, 10),
        armor_class: 36,
        exp: 45,
        sleep: 20,
        aaf: 20,
        freq_spell: 4,
        kinds: flags!(KindFlags: ORC | EVIL),
        flags: flags!(RaceFlags: MALE | FRIENDS | OPEN_DOOR | BASH_DOOR | HURT_LITE | DROP_60),
        abilities: flags!(AbilityFlags: SHOOT),
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 9),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 9),
            blow(BlowMethod::Shoot, BlowEffect::None, 4, 8),
            NO_BLOW,
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(240),
        name: "Mughash the Kobold Lord",
        japanese_name: Some("コボルドの族長ムガッシュ"),
        text: "Strong and powerful, for a kobold. He rules his dungeon with an iron fist.",
        symbol: 'k',
        color: TermColor::Violet,
        level: 15,
        rarity: 3,
        hit_dice: Dice::new(15, 100),
        armor_class: 25,
        exp: 100,
        sleep: 20,
        aaf: 20,
        kinds: flags!(KindFlags: EVIL),
        flags: flags!(
            RaceFlags: UNIQUE | MALE | GUARDIAN | FORCE_MAXHP | ESCORTS | OPEN_DOOR | BASH_DOOR | DROP_90
                | DROP_GOOD | NO_CONF | NO_SLEEP
        ),
        resists: flags!(ResistFlags: IM_POIS),
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            blow(BlowMethod::Hit, BlowEffect::Hurt, 1, 10),
            NO_BLOW,
        ],
        reinforcements: &[Reinforcement::new(LARGE_KOBOLD, 3, 4)],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId(480),
        name: "Ringwraith",
        japanese_name: Some("指輪の幽鬼"),
        text: "A shadow of a king of old, bound forever to a ring of power.",
        symbol: 'W',
        color: TermColor::LightDark,
        level: 40,
        rarity: 4,
        speed: 120,
        hit_dice: Dice::new(40, 30),
        armor_class: 90,
        exp: 2000,
        sleep: 10,
        aaf: 90,
        freq_spell: 25,
        kinds: flags!(KindFlags: UNDEAD | EVIL),
        flags: flags!(
            RaceFlags: MALE | FORCE_MAXHP | COLD_BLOOD | INVISIBLE | OPEN_DOOR | BASH_DOOR | DROP_1D2
                | DROP_GOOD | NO_CONF | NO_SLEEP | NO_FEAR
        ),
        resists: flags!(ResistFlags: IM_COLD | IM_POIS | RES_NETH | RES_TELE),
        abilities: flags!(AbilityFlags: BO_NETH | SCARE | HOLD | BLINK),
        spell_damage: &[SpellDamage::with_base(AbilityFlags::BO_NETH, 30, 5, 5).scaled(3, 2)],
        blows: [
            blow(BlowMethod::Hit, BlowEffect::Hurt, 4, 6),
            blow(BlowMethod::Touch, BlowEffect::Exp40, 0, 0),
            blow(BlowMethod::Wail, BlowEffect::Terrify, 0, 0),
            NO_BLOW,
        ],
        population_cap: Some(9),
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId::CHAMELEON,
        name: "Chameleon",
        japanese_name: Some("カメレオン"),
        text: "A strange lizard whose form flows from one shape to another.",
        symbol: 'R',
        color: TermColor::LightGreen,
        level: 20,
        hit_dice: Dice::new(14, 100),
        armor_class: 30,
        exp: 100,
        aaf: 20,
        kinds: flags!(KindFlags: ANIMAL),
        flags: flags!(RaceFlags: FORCE_MAXHP),
        blows: [blow(BlowMethod::Bite, BlowEffect::Hurt, 2, 8), NO_BLOW, NO_BLOW, NO_BLOW],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId::OBERON,
        name: "Oberon, King of Amber",
        japanese_name: Some("アンバーの王オベロン"),
        text: "Oberon is the father of the royal line of Amber, a master of magic and the sword.",
        symbol: 'p',
        color: TermColor::Violet,
        level: 99,
        speed: 140,
        hit_dice: Dice::new(100, 100),
        armor_class: 160,
        exp: 30000,
        aaf: 100,
        freq_spell: 50,
        kinds: flags!(KindFlags: HUMAN | AMBERITE),
        flags: flags!(
            RaceFlags: UNIQUE | MALE | QUESTOR | FORCE_MAXHP | SMART | REFLECTING | OPEN_DOOR | BASH_DOOR
                | DROP_4D2 | DROP_GOOD | DROP_GREAT | NO_STUN | NO_CONF | NO_SLEEP | NO_FEAR
        ),
        resists: flags!(ResistFlags: IM_FIRE | IM_COLD | IM_ELEC | IM_POIS | RES_TELE),
        abilities: flags!(AbilityFlags: BA_MANA | TELE_TO | HEAL | S_AMBERITES),
        spell_damage: &[SpellDamage::with_base(AbilityFlags::BA_MANA, 495, 10, 10)],
        blows: [
            blow(BlowMethod::Hit, BlowEffect::SuperHurt, 10, 12),
            blow(BlowMethod::Hit, BlowEffect::SuperHurt, 10, 12),
            blow(BlowMethod::Hit, BlowEffect::Shatter, 10, 12),
            blow(BlowMethod::Hit, BlowEffect::Confuse, 10, 12),
        ],
        ..MonsterRace::BLANK
    },
    MonsterRace {
        id: MonraceId::SERPENT,
        name: "The Serpent of Chaos",
        japanese_name: Some("混沌のサーペント"),
        text: "It is the Great Serpent, Chaos itself, coiled around the root of all worlds.",
        symbol: 'J',
        color: TermColor::Violet,
        level: 100,
        speed: 140,
        hit_dice: Dice::new(100, 500),
        armor_class: 200,
        exp: 60000,
        aaf: 100,
        freq_spell: 33,
        kinds: flags!(KindFlags: EVIL | ELDRITCH_HORROR),
        flags: flags!(
            RaceFlags: UNIQUE | QUESTOR | FORCE_MAXHP | SMART | KILL_WALL | KILL_BODY | DROP_4D2 | DROP_GOOD
                | DROP_GREAT | NO_STUN | NO_CONF | NO_SLEEP | NO_FEAR | AURA_FIRE | AURA_ELEC
        ),
        resists: flags!(ResistFlags: IM_FIRE | IM_ELEC | IM_POIS | RES_CHAO | RES_TELE),
        abilities: flags!(AbilityFlags: BR_CHAO | BR_DISE | HAND_DOOM | WORLD | S_UNIQUE),
        spell_damage: &[
            SpellDamage::fixed(AbilityFlags::BR_CHAO, 1600),
            SpellDamage::fixed(AbilityFlags::BR_DISE, 500),
        ],
        blows: [
            blow(BlowMethod::Crush, BlowEffect::SuperHurt, 20, 15),
            blow(BlowMethod::Crush, BlowEffect::SuperHurt, 20, 15),
            blow(BlowMethod::Bite, BlowEffect::LoseAll, 10, 20),
            blow(BlowMethod::Bite, BlowEffect::Time, 10, 20),
        ],
        ..MonsterRace::BLANK
    },
];

/// Number of defined races
pub fn num_races() -> usize {
    MONSTER_RACES.len()
}

/// Race by identifier
pub fn get_race(id: MonraceId) -> Option<&'static MonsterRace> {
    MONSTER_RACES.iter().find(|race| race.id == id)
}

/// Race by English or Japanese name, ignoring case
pub fn find_race(name: &str) -> Option<&'static MonsterRace> {
    MONSTER_RACES.iter().find(|race| {
        race.name.eq_ignore_ascii_case(name) || race.japanese_name.is_some_and(|jp| jp == name)
    })
}

/// Lookup table over every defined race
pub fn race_table() -> RaceTable {
    RaceTable::new(MONSTER_RACES.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = MONSTER_RACES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), num_races());
    }

    #[test]
    fn test_links_resolve() {
        for race in MONSTER_RACES {
            for r in race.reinforcements() {
                assert!(get_race(r.race).is_some(), "{} escort {}", race.name, r.race);
            }
            if let Some(next) = race.next_race {
                assert!(get_race(next).is_some(), "{} evolves into {next}", race.name);
            }
        }
    }

    #[test]
    fn test_damage_formulas_match_abilities() {
        for race in MONSTER_RACES {
            for damage in race.spell_damage {
                assert!(race.abilities.contains(damage.ability), "{}", race.name);
            }
        }
    }

    #[test]
    fn test_special_races_present() {
        assert!(get_race(MonraceId::CHAMELEON).is_some());
        assert!(get_race(MonraceId::OBERON).is_some_and(|r| r.id.is_kingpin()));
        assert!(get_race(MonraceId::SERPENT).is_some_and(|r| r.id.is_kingpin()));
    }

    #[test]
    fn test_find_race() {
        assert_eq!(find_race("cave spider").map(|r| r.id), Some(MonraceId(60)));
        assert_eq!(find_race("浮遊眼").map(|r| r.id), Some(MonraceId(31)));
        assert!(find_race("balrog").is_none());
    }

    #[test]
    fn test_table_matches_statics() {
        let table = race_table();
        assert_eq!(table.len(), num_races());
        assert_eq!(table.get(MonraceId(163)).map(|r| r.name), Some("Baby red dragon"));
    }
}
