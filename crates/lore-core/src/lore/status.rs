//! Classifiers for capabilities, constitution, weaknesses, resistances
//! and status immunities

use super::{FragmentList, LoreSnapshot};
use crate::data::TermColor;
use crate::data::TermColor::*;
use crate::grammar::{Language, Localized, loc};
use crate::monster::{RaceFlags, ResistFlags};

/// A race flag and its phrase
#[derive(Debug, Clone, Copy)]
pub struct FlagPhrase {
    pub flag: RaceFlags,
    pub text: Localized,
    pub color: TermColor,
}

const fn flag(flag: RaceFlags, en: &'static str, jp: &'static str, color: TermColor) -> FlagPhrase {
    FlagPhrase {
        flag,
        text: loc(en, jp),
        color,
    }
}

/// A resistance flag and its phrase
#[derive(Debug, Clone, Copy)]
pub struct ResistPhrase {
    pub flag: ResistFlags,
    pub text: Localized,
    pub color: TermColor,
}

const fn resist(flag: ResistFlags, en: &'static str, jp: &'static str, color: TermColor) -> ResistPhrase {
    ResistPhrase {
        flag,
        text: loc(en, jp),
        color,
    }
}

/// "can ..." movement and interaction capabilities
pub static CAPABILITIES: &[FlagPhrase] = &[
    flag(RaceFlags::HAS_LITE, "illuminate the dungeon", "ダンジョンを照らす", White),
    flag(RaceFlags::HAS_DARK, "darken the dungeon", "ダンジョンを暗くする", LightDark),
    flag(RaceFlags::OPEN_DOOR, "open doors", "ドアを開ける", White),
    flag(RaceFlags::BASH_DOOR, "bash down doors", "ドアを打ち破る", White),
    flag(RaceFlags::CAN_FLY, "fly", "空を飛ぶ", White),
    flag(RaceFlags::CAN_SWIM, "swim", "水を渡る", White),
    flag(RaceFlags::PASS_WALL, "pass through walls", "壁をすり抜ける", Violet),
    flag(RaceFlags::KILL_WALL, "bore through walls", "壁を掘り進む", LightUmber),
    flag(RaceFlags::MOVE_BODY, "push past weaker monsters", "弱いモンスターを押しのける", LightUmber),
    flag(RaceFlags::KILL_BODY, "destroy weaker monsters", "弱いモンスターを倒す", LightRed),
    flag(RaceFlags::TAKE_ITEM, "pick up objects", "アイテムを拾う", LightGreen),
    flag(RaceFlags::KILL_ITEM, "destroy objects", "アイテムを壊す", LightRed),
];

/// Standalone constitution facts, one sentence each
pub static CONSTITUTIONS: &[FlagPhrase] = &[
    flag(RaceFlags::AQUATIC, "lives in water", "水中に棲んでいる", White),
    flag(RaceFlags::SELF_LITE, "is shining", "光っている", Yellow),
    flag(RaceFlags::SELF_DARK, "is surrounded by darkness", "暗黒に包まれている", LightDark),
    flag(RaceFlags::INVISIBLE, "is invisible", "透明で目に見えない", White),
    flag(RaceFlags::COLD_BLOOD, "is cold blooded", "冷血動物である", White),
    flag(RaceFlags::EMPTY_MIND, "is not detected by telepathy", "テレパシーでは感知できない", White),
    flag(RaceFlags::WEIRD_MIND, "is rarely detected by telepathy", "まれにテレパシーで感知できる", White),
    flag(RaceFlags::MULTIPLY, "breeds explosively", "爆発的に増殖する", LightUmber),
    flag(RaceFlags::REGENERATE, "regenerates quickly", "素早く体力を回復する", LightWhite),
    flag(RaceFlags::RIDING, "is suitable for riding", "乗馬可能なモンスターである", Slate),
];

pub static WEAKNESSES: &[FlagPhrase] = &[
    flag(RaceFlags::HURT_ROCK, "rock remover", "岩を除去するもの", Umber),
    flag(RaceFlags::HURT_LITE, "bright light", "明るい光", Yellow),
    flag(RaceFlags::HURT_FIRE, "fire", "炎", Red),
    flag(RaceFlags::HURT_COLD, "cold", "冷気", LightWhite),
];

/// Immunities and resistances share one sentence
pub static RESISTANCES: &[ResistPhrase] = &[
    resist(ResistFlags::IM_ACID, "acid", "酸", Green),
    resist(ResistFlags::IM_ELEC, "lightning", "稲妻", Blue),
    resist(ResistFlags::IM_FIRE, "fire", "炎", Red),
    resist(ResistFlags::IM_COLD, "cold", "冷気", LightWhite),
    resist(ResistFlags::IM_POIS, "poison", "毒", LightGreen),
    resist(ResistFlags::RES_LITE, "light", "閃光", Yellow),
    resist(ResistFlags::RES_DARK, "dark", "暗黒", LightDark),
    resist(ResistFlags::RES_NETH, "nether", "地獄", LightDark),
    resist(ResistFlags::RES_WATE, "water", "水", Blue),
    resist(ResistFlags::RES_PLAS, "plasma", "プラズマ", LightRed),
    resist(ResistFlags::RES_SHAR, "shards", "破片", LightUmber),
    resist(ResistFlags::RES_SOUN, "sound", "轟音", Orange),
    resist(ResistFlags::RES_CHAO, "chaos", "カオス", Violet),
    resist(ResistFlags::RES_NEXU, "nexus", "因果混乱", Violet),
    resist(ResistFlags::RES_DISE, "disenchantment", "劣化", Violet),
    resist(ResistFlags::RES_WALL, "force", "フォース", Umber),
    resist(ResistFlags::RES_INER, "inertia", "遅鈍", Slate),
    resist(ResistFlags::RES_TIME, "time", "時間逆転", LightBlue),
    resist(ResistFlags::RES_GRAV, "gravity", "重力", Slate),
    resist(ResistFlags::RES_ALL, "all", "あらゆる攻撃", Yellow),
];

const RESIST_TELEPORT: ResistPhrase = resist(ResistFlags::RES_TELE, "teleportation", "テレポート", Orange);
const IMMUNE_TELEPORT: ResistPhrase = resist(ResistFlags::RES_TELE, "teleported", "テレポートされない", Orange);

/// "cannot be ..." status immunities
pub static IMMUNITIES: &[FlagPhrase] = &[
    flag(RaceFlags::NO_STUN, "stunned", "朦朧としない", Orange),
    flag(RaceFlags::NO_FEAR, "frightened", "恐怖を感じない", Slate),
    flag(RaceFlags::NO_CONF, "confused", "混乱しない", LightUmber),
    flag(RaceFlags::NO_SLEEP, "slept", "眠らされない", Blue),
];

fn push_flags(list: &mut FragmentList, visible: RaceFlags, table: &[FlagPhrase], language: Language) {
    for entry in table.iter().filter(|e| visible.contains(e.flag)) {
        list.push(entry.text.get(language), entry.color);
    }
}

pub fn capability_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    push_flags(&mut list, snap.flags, CAPABILITIES, language);
    list
}

pub fn weakness_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    push_flags(&mut list, snap.flags, WEAKNESSES, language);
    list
}

/// Constitution facts; an empty mind hides the weird-mind fact
pub fn constitution_facts<'s>(
    snap: &'s LoreSnapshot<'_>,
) -> impl Iterator<Item = &'static FlagPhrase> + 's {
    CONSTITUTIONS.iter().filter(move |e| {
        if e.flag == RaceFlags::WEIRD_MIND && snap.flags.contains(RaceFlags::EMPTY_MIND) {
            return false;
        }
        snap.flags.contains(e.flag)
    })
}

/// Elemental immunities and resistances; teleport resistance is listed
/// here only for non-uniques
pub fn resistance_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    for entry in RESISTANCES.iter().filter(|e| snap.resists.contains(e.flag)) {
        list.push(entry.text.get(language), entry.color);
    }
    if snap.resists.contains(ResistFlags::RES_TELE) && !snap.is_unique() {
        list.push(RESIST_TELEPORT.text.get(language), RESIST_TELEPORT.color);
    }
    list
}

/// Status immunities; uniques resisting teleport cannot be teleported
pub fn immunity_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    push_flags(&mut list, snap.flags, IMMUNITIES, language);
    if snap.resists.contains(ResistFlags::RES_TELE) && snap.is_unique() {
        list.push(IMMUNE_TELEPORT.text.get(language), IMMUNE_TELEPORT.color);
    }
    list
}

/// Phrase and color for the combination of auras a race carries
pub fn aura_phrase(flags: RaceFlags) -> Option<(Localized, TermColor)> {
    let fire = flags.contains(RaceFlags::AURA_FIRE);
    let elec = flags.contains(RaceFlags::AURA_ELEC);
    let cold = flags.contains(RaceFlags::AURA_COLD);
    let entry = match (fire, cold, elec) {
        (true, true, true) => (loc("flames, ice and electricity", "炎と氷とスパーク"), Violet),
        (true, false, true) => (loc("flames and electricity", "炎とスパーク"), LightRed),
        (true, true, false) => (loc("flames and ice", "炎と氷"), Blue),
        (false, true, true) => (loc("ice and electricity", "氷とスパーク"), LightGreen),
        (true, false, false) => (loc("flames", "炎"), Red),
        (false, true, false) => (loc("ice", "氷"), Blue),
        (false, false, true) => (loc("electricity", "スパーク"), LightBlue),
        (false, false, false) => return None,
    };
    Some(entry)
}

/// How attentive a race is, from its sleep value
pub fn alertness_phrase(sleep: u16) -> Localized {
    match sleep {
        201.. => loc("prefers to ignore", "を無視しがちであるが"),
        96..=200 => loc("pays very little attention to", "に対してほとんど注意を払わないが"),
        76..=95 => loc("pays little attention to", "に対してあまり注意を払わないが"),
        46..=75 => loc("tends to overlook", "を見過ごしがちであるが"),
        26..=45 => loc("takes quite a while to see", "をほんの少しは見ており"),
        11..=25 => loc("takes a while to see", "をしばらくは見ており"),
        6..=10 => loc("is fairly observant of", "を幾分注意深く見ており"),
        4..=5 => loc("is observant of", "を注意深く見ており"),
        2..=3 => loc("is very observant of", "をかなり注意深く見ており"),
        1 => loc("is vigilant for", "を警戒しており"),
        0 => loc("is ever vigilant for", "をかなり警戒しており"),
    }
}
