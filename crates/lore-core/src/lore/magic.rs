//! Breath, spell and launcher classifiers
//!
//! Every table is iterated in declaration order, which is also the order
//! the phrases appear in the recall. `{dmg}` marks where known damage goes.

use super::{FragmentList, LoreSnapshot};
use crate::data::TermColor;
use crate::grammar::{Language, Localized, loc};
use crate::monster::{AbilityFlags, Dice, KindFlags, RaceFlags};
use crate::player::Viewer;

/// One ability and how to name it
#[derive(Debug, Clone, Copy)]
pub struct AbilityPhrase {
    pub flag: AbilityFlags,
    pub text: Localized,
    pub color: TermColor,
}

const fn phrase(flag: AbilityFlags, en: &'static str, jp: &'static str, color: TermColor) -> AbilityPhrase {
    AbilityPhrase {
        flag,
        text: loc(en, jp),
        color,
    }
}

use crate::data::TermColor::*;

pub static BREATHS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::BR_ACID, "acid{dmg}", "酸{dmg}", Green),
    phrase(AbilityFlags::BR_ELEC, "lightning{dmg}", "稲妻{dmg}", Blue),
    phrase(AbilityFlags::BR_FIRE, "fire{dmg}", "火炎{dmg}", Red),
    phrase(AbilityFlags::BR_COLD, "frost{dmg}", "冷気{dmg}", LightWhite),
    phrase(AbilityFlags::BR_POIS, "poison{dmg}", "毒{dmg}", LightGreen),
    phrase(AbilityFlags::BR_NETH, "nether{dmg}", "地獄{dmg}", LightDark),
    phrase(AbilityFlags::BR_LITE, "light{dmg}", "閃光{dmg}", Yellow),
    phrase(AbilityFlags::BR_DARK, "darkness{dmg}", "暗黒{dmg}", LightDark),
    phrase(AbilityFlags::BR_CONF, "confusion{dmg}", "混乱{dmg}", LightUmber),
    phrase(AbilityFlags::BR_SOUN, "sound{dmg}", "轟音{dmg}", Orange),
    phrase(AbilityFlags::BR_CHAO, "chaos{dmg}", "カオス{dmg}", Violet),
    phrase(AbilityFlags::BR_DISE, "disenchantment{dmg}", "劣化{dmg}", Violet),
    phrase(AbilityFlags::BR_NEXU, "nexus{dmg}", "因果混乱{dmg}", Violet),
    phrase(AbilityFlags::BR_TIME, "time{dmg}", "時間逆転{dmg}", LightBlue),
    phrase(AbilityFlags::BR_INER, "inertia{dmg}", "遅鈍{dmg}", Slate),
    phrase(AbilityFlags::BR_GRAV, "gravity{dmg}", "重力{dmg}", Slate),
    phrase(AbilityFlags::BR_SHAR, "shards{dmg}", "破片{dmg}", LightUmber),
    phrase(AbilityFlags::BR_PLAS, "plasma{dmg}", "プラズマ{dmg}", LightRed),
    phrase(AbilityFlags::BR_WALL, "force{dmg}", "フォース{dmg}", Umber),
    phrase(AbilityFlags::BR_MANA, "mana{dmg}", "魔力{dmg}", LightBlue),
    phrase(AbilityFlags::BR_NUKE, "toxic waste{dmg}", "放射性廃棄物{dmg}", LightGreen),
    phrase(AbilityFlags::BR_DISI, "disintegration{dmg}", "分解{dmg}", Slate),
];

pub static BALLS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::BA_ACID, "produce acid balls{dmg}", "アシッド・ボール{dmg}", Green),
    phrase(AbilityFlags::BA_ELEC, "produce lightning balls{dmg}", "サンダー・ボール{dmg}", Blue),
    phrase(AbilityFlags::BA_FIRE, "produce fire balls{dmg}", "ファイア・ボール{dmg}", Red),
    phrase(AbilityFlags::BA_COLD, "produce frost balls{dmg}", "アイス・ボール{dmg}", LightWhite),
    phrase(AbilityFlags::BA_POIS, "produce stinking clouds{dmg}", "悪臭雲{dmg}", LightGreen),
    phrase(AbilityFlags::BA_NETH, "produce nether balls{dmg}", "地獄球{dmg}", LightDark),
    phrase(AbilityFlags::BA_WATE, "produce water balls{dmg}", "ウォーター・ボール{dmg}", Blue),
    phrase(AbilityFlags::BA_NUKE, "produce balls of radiation{dmg}", "放射能球{dmg}", LightGreen),
    phrase(AbilityFlags::BA_MANA, "invoke mana storms{dmg}", "魔力の嵐{dmg}", LightBlue),
    phrase(AbilityFlags::BA_DARK, "invoke darkness storms{dmg}", "暗黒の嵐{dmg}", LightDark),
    phrase(AbilityFlags::BA_LITE, "invoke starburst{dmg}", "スターバースト{dmg}", Yellow),
    phrase(AbilityFlags::BA_CHAO, "invoke raw Logrus{dmg}", "純ログルス{dmg}", Violet),
];

pub static SPECIALS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::HAND_DOOM, "invoke the Hand of Doom{dmg}", "破滅の手{dmg}", Violet),
    phrase(AbilityFlags::PSY_SPEAR, "psycho-spear{dmg}", "光の剣{dmg}", Yellow),
    phrase(AbilityFlags::DRAIN_MANA, "drain mana{dmg}", "魔力吸収{dmg}", Slate),
    phrase(AbilityFlags::MIND_BLAST, "cause mind blasting{dmg}", "精神攻撃{dmg}", LightRed),
    phrase(AbilityFlags::BRAIN_SMASH, "cause brain smashing{dmg}", "脳攻撃{dmg}", LightRed),
    phrase(AbilityFlags::CAUSE_1, "cause light wounds and cursing{dmg}", "軽傷＋呪い{dmg}", LightWhite),
    phrase(AbilityFlags::CAUSE_2, "cause serious wounds and cursing{dmg}", "重傷＋呪い{dmg}", LightWhite),
    phrase(AbilityFlags::CAUSE_3, "cause critical wounds and cursing{dmg}", "致命傷＋呪い{dmg}", LightWhite),
    phrase(AbilityFlags::CAUSE_4, "cause mortal wounds{dmg}", "秘孔を突く{dmg}", LightWhite),
];

pub static BOLTS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::BO_ACID, "produce acid bolts{dmg}", "アシッド・ボルト{dmg}", Green),
    phrase(AbilityFlags::BO_ELEC, "produce lightning bolts{dmg}", "サンダー・ボルト{dmg}", Blue),
    phrase(AbilityFlags::BO_FIRE, "produce fire bolts{dmg}", "ファイア・ボルト{dmg}", Red),
    phrase(AbilityFlags::BO_COLD, "produce frost bolts{dmg}", "アイス・ボルト{dmg}", LightWhite),
    phrase(AbilityFlags::BO_NETH, "produce nether bolts{dmg}", "地獄の矢{dmg}", LightDark),
    phrase(AbilityFlags::BO_WATE, "produce water bolts{dmg}", "ウォーター・ボルト{dmg}", Blue),
    phrase(AbilityFlags::BO_MANA, "produce mana bolts{dmg}", "魔力の矢{dmg}", LightBlue),
    phrase(AbilityFlags::BO_PLAS, "produce plasma bolts{dmg}", "プラズマ・ボルト{dmg}", LightRed),
    phrase(AbilityFlags::BO_ICEE, "produce ice bolts{dmg}", "極寒の矢{dmg}", White),
    phrase(AbilityFlags::MISSILE, "produce magic missiles{dmg}", "マジックミサイル{dmg}", Slate),
];

pub static STATUS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::SCARE, "terrify", "恐怖", Slate),
    phrase(AbilityFlags::BLIND, "blind", "目くらまし", Blue),
    phrase(AbilityFlags::CONF, "confuse", "混乱", LightUmber),
    phrase(AbilityFlags::SLOW, "slow", "減速", Umber),
    phrase(AbilityFlags::HOLD, "paralyze", "麻痺", LightRed),
    phrase(AbilityFlags::HASTE, "haste-self", "加速", LightGreen),
    phrase(AbilityFlags::HEAL, "heal-self", "治癒", White),
    phrase(AbilityFlags::INVULNER, "make invulnerable", "無敵化", White),
    phrase(AbilityFlags::DISPEL, "dispel-magic", "魔力消去", White),
];

pub static TELEPORTS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::BLINK, "blink-self", "ショートテレポート", LightUmber),
    phrase(AbilityFlags::TPORT, "teleport-self", "テレポート", Orange),
    phrase(AbilityFlags::WORLD, "stop the time", "時を止める", LightBlue),
    phrase(AbilityFlags::TELE_TO, "teleport to", "テレポートバック", LightUmber),
    phrase(AbilityFlags::TELE_AWAY, "teleport away", "テレポートアウェイ", Umber),
    phrase(AbilityFlags::TELE_LEVEL, "teleport level", "テレポート・レベル", Orange),
];

const CREATE_DARKNESS: AbilityPhrase = phrase(AbilityFlags::DARKNESS, "create darkness", "暗闇", LightDark);
const CREATE_LIGHT: AbilityPhrase = phrase(AbilityFlags::DARKNESS, "create light", "光", Yellow);

pub static FLOOR: &[AbilityPhrase] = &[
    phrase(AbilityFlags::TRAPS, "create traps", "トラップ", Blue),
    phrase(AbilityFlags::FORGET, "cause amnesia", "記憶消去", Blue),
    phrase(AbilityFlags::RAISE_DEAD, "raise dead", "死者復活", Red),
];

pub static SUMMONS: &[AbilityPhrase] = &[
    phrase(AbilityFlags::S_MONSTER, "summon a monster", "モンスター一体召喚", Slate),
    phrase(AbilityFlags::S_MONSTERS, "summon monsters", "モンスター複数召喚", LightDark),
    phrase(AbilityFlags::S_KIN, "summon aid", "救援召喚", Orange),
    phrase(AbilityFlags::S_ANT, "summon ants", "アリ召喚", Red),
    phrase(AbilityFlags::S_SPIDER, "summon spiders", "クモ召喚", LightDark),
    phrase(AbilityFlags::S_HOUND, "summon hounds", "ハウンド召喚", Umber),
    phrase(AbilityFlags::S_HYDRA, "summon hydras", "ヒドラ召喚", LightGreen),
    phrase(AbilityFlags::S_ANGEL, "summon an angel", "天使一体召喚", Yellow),
    phrase(AbilityFlags::S_DEMON, "summon a demon", "デーモン一体召喚", LightRed),
    phrase(AbilityFlags::S_UNDEAD, "summon an undead", "アンデッド一体召喚", LightDark),
    phrase(AbilityFlags::S_DRAGON, "summon a dragon", "ドラゴン一体召喚", Orange),
    phrase(AbilityFlags::S_HI_UNDEAD, "summon Greater Undead", "強力なアンデッド召喚", LightDark),
    phrase(AbilityFlags::S_HI_DRAGON, "summon Ancient Dragons", "古代ドラゴン召喚", Orange),
    phrase(AbilityFlags::S_CYBER, "summon Cyberdemons", "サイバーデーモン召喚", Umber),
    phrase(AbilityFlags::S_AMBERITES, "summon Lords of Amber", "アンバーの王族召喚", Violet),
    phrase(AbilityFlags::S_UNIQUE, "summon Unique Monsters", "ユニーク・モンスター召喚", Violet),
];

const ROCKET: AbilityPhrase = phrase(AbilityFlags::ROCKET, "shoot a rocket{dmg}", "ロケット{dmg}を発射する", Umber);
const ARROW: AbilityPhrase = phrase(AbilityFlags::SHOOT, "fire an arrow{dmg}", "矢{dmg}を放つ", Umber);

/// Render `base+NdS*(m/d)` the way damage formulas are shown
pub fn dice_to_string(base: i32, dice: Dice, mult: i32, div: i32) -> String {
    if dice.num == 0 {
        return base.to_string();
    }
    let mut out = String::new();
    if base != 0 {
        out.push_str(&format!("{base}+"));
    }
    if dice.num == 1 {
        out.push_str(&format!("d{}", dice.sides));
    } else {
        out.push_str(&format!("{}d{}", dice.num, dice.sides));
    }
    if mult != 1 || div != 1 {
        if div == 1 {
            out.push_str(&format!("*{mult}"));
        } else {
            out.push_str(&format!("*({mult}/{div})"));
        }
    }
    out
}

fn wrap_damage(damage: &str, language: Language) -> String {
    match language {
        Language::English => format!(" ({damage})"),
        Language::Japanese => format!("({damage})"),
    }
}

/// Damage annotation for an ability, empty when unknown or formula-less
fn spell_damage(snap: &LoreSnapshot<'_>, ability: AbilityFlags, language: Language) -> String {
    if !snap.know_spell_damage(ability) {
        return String::new();
    }
    match snap.race.spell_damage(ability) {
        Some(d) => wrap_damage(&dice_to_string(d.base, d.dice, d.mult, d.div), language),
        None => String::new(),
    }
}

fn push_table(
    list: &mut FragmentList,
    snap: &LoreSnapshot<'_>,
    table: &[AbilityPhrase],
    language: Language,
) {
    for entry in table {
        if !snap.abilities.contains(entry.flag) {
            continue;
        }
        let text = entry.text.get(language);
        let text = if text.contains("{dmg}") {
            text.replace("{dmg}", &spell_damage(snap, entry.flag, language))
        } else {
            text.to_string()
        };
        list.push(text, entry.color);
    }
}

/// Ranged launchers: rockets and arrows
pub fn launch_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    if snap.abilities.contains(AbilityFlags::ROCKET) {
        push_table(&mut list, snap, &[ROCKET], language);
    }
    if snap.abilities.contains(AbilityFlags::SHOOT) {
        let power = match snap.race.shoot_slot() {
            Some(slot) if snap.know_spell_damage(AbilityFlags::SHOOT) => {
                let dice = snap.race.blows[slot].dice;
                match language {
                    Language::English => format!(" (Power:{dice})"),
                    Language::Japanese => format!("(威力 {dice})"),
                }
            }
            _ => String::new(),
        };
        list.push(ARROW.text.get(language).replace("{dmg}", &power), ARROW.color);
    }
    list
}

/// Breath weapons
pub fn breath_fragments(snap: &LoreSnapshot<'_>, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    push_table(&mut list, snap, BREATHS, language);
    list
}

/// Every castable spell, in recall order
pub fn magic_fragments(snap: &LoreSnapshot<'_>, viewer: &Viewer, language: Language) -> FragmentList {
    let mut list = FragmentList::new();
    push_table(&mut list, snap, BALLS, language);
    push_table(&mut list, snap, SPECIALS, language);
    push_table(&mut list, snap, BOLTS, language);
    push_table(&mut list, snap, STATUS, language);
    push_table(&mut list, snap, TELEPORTS, language);
    if snap.abilities.contains(AbilityFlags::DARKNESS) {
        let entry = darkness_phrase(snap, viewer);
        list.push(entry.text.get(language), entry.color);
    }
    push_table(&mut list, snap, FLOOR, language);
    push_table(&mut list, snap, SUMMONS, language);
    list
}

/// Darkness looks like light to some viewers, unless the caster is
/// undead or hurt by light
fn darkness_phrase(snap: &LoreSnapshot<'_>, viewer: &Viewer) -> AbilityPhrase {
    let sees_light = viewer.class.sees_darkness_as_light()
        && !snap.race.kinds.contains(KindFlags::UNDEAD)
        && !snap.race.flags.contains(RaceFlags::HURT_LITE);
    if sees_light { CREATE_LIGHT } else { CREATE_DARKNESS }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lore::{LoreMode, MonsterLore};
    use crate::monster::{Blow, BlowEffect, BlowMethod, MonsterRace, SpellDamage};
    use crate::player::PlayerClass;

    static DAMAGE: [SpellDamage; 2] = [
        SpellDamage::dice(AbilityFlags::BR_FIRE, 4, 6),
        SpellDamage::with_base(AbilityFlags::BO_FIRE, 9, 1, 8).scaled(3, 2),
    ];

    fn caster() -> MonsterRace {
        MonsterRace {
            level: 12,
            abilities: AbilityFlags::BR_FIRE
                | AbilityFlags::BR_ACID
                | AbilityFlags::BO_FIRE
                | AbilityFlags::DARKNESS
                | AbilityFlags::S_KIN
                | AbilityFlags::BLINK,
            spell_damage: &DAMAGE,
            ..MonsterRace::BLANK
        }
    }

    #[test]
    fn test_dice_to_string() {
        assert_eq!(dice_to_string(0, Dice::new(4, 6), 1, 1), "4d6");
        assert_eq!(dice_to_string(0, Dice::new(1, 8), 1, 1), "d8");
        assert_eq!(dice_to_string(9, Dice::new(2, 8), 3, 1), "9+2d8*3");
        assert_eq!(dice_to_string(9, Dice::new(2, 8), 3, 2), "9+2d8*(3/2)");
        assert_eq!(dice_to_string(150, Dice::ZERO, 1, 1), "150");
    }

    #[test]
    fn test_breath_order_and_damage() {
        let race = caster();
        let lore = MonsterLore::new();
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::FullKnowledge, false);
        let list = breath_fragments(&snap, Language::English);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts, vec!["acid", "fire (4d6)"]);
    }

    #[test]
    fn test_damage_hidden_until_observed() {
        let race = caster();
        let mut lore = MonsterLore::new();
        lore.abilities = AbilityFlags::BR_FIRE;
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::Normal, false);
        let texts: Vec<_> = breath_fragments(&snap, Language::English).texts().map(String::from).collect();
        assert_eq!(texts, vec!["fire"]);

        lore.ability_damage = AbilityFlags::BR_FIRE;
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::Normal, false);
        let texts: Vec<_> = breath_fragments(&snap, Language::Japanese).texts().map(String::from).collect();
        assert_eq!(texts, vec!["火炎(4d6)"]);
    }

    #[test]
    fn test_magic_order() {
        let race = caster();
        let lore = MonsterLore::new();
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::FullKnowledge, false);
        let list = magic_fragments(&snap, &Viewer::default(), Language::English);
        let texts: Vec<_> = list.texts().collect();
        assert_eq!(
            texts,
            vec!["produce fire bolts (9+d8*(3/2))", "blink-self", "create darkness", "summon aid"]
        );
    }

    #[test]
    fn test_darkness_seen_as_light() {
        let race = caster();
        let lore = MonsterLore::new();
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::FullKnowledge, false);
        let ninja = Viewer::new(20, PlayerClass::Ninja);
        let list = magic_fragments(&snap, &ninja, Language::English);
        assert!(list.iter().any(|f| f.text == "create light" && f.color == TermColor::Yellow));

        let undead = MonsterRace {
            kinds: KindFlags::UNDEAD,
            ..caster()
        };
        let snap = LoreSnapshot::new(&undead, &lore, LoreMode::FullKnowledge, false);
        let list = magic_fragments(&snap, &ninja, Language::English);
        assert!(list.texts().any(|t| t == "create darkness"));
    }

    #[test]
    fn test_arrow_power() {
        let mut blows = [Blow::NONE; crate::MAX_BLOWS];
        blows[1] = Blow::new(BlowMethod::Shoot, BlowEffect::Hurt, Dice::new(3, 7));
        let race = MonsterRace {
            abilities: AbilityFlags::SHOOT,
            blows,
            ..MonsterRace::BLANK
        };
        let lore = MonsterLore::new();
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::FullKnowledge, false);
        let list = launch_fragments(&snap, Language::English);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["fire an arrow (Power:3d7)"]);
    }
}
