//! Melee blow classifier

use super::LoreSnapshot;
use crate::data::TermColor;
use crate::grammar::{BlowPhrase, Localized, loc};
use crate::monster::{BlowEffect, BlowMethod};

const WEIRD: Localized = loc("do something weird", "何か奇妙なことをする");

/// Verb phrase of a blow method
pub fn method_phrase(method: BlowMethod) -> Localized {
    match method {
        BlowMethod::Hit => loc("hit", "殴る"),
        BlowMethod::Touch => loc("touch", "触る"),
        BlowMethod::Punch => loc("punch", "パンチする"),
        BlowMethod::Kick => loc("kick", "蹴る"),
        BlowMethod::Claw => loc("claw", "ひっかく"),
        BlowMethod::Bite => loc("bite", "噛む"),
        BlowMethod::Sting => loc("sting", "刺す"),
        BlowMethod::Slash => loc("slash", "斬る"),
        BlowMethod::Butt => loc("butt", "角で突く"),
        BlowMethod::Crush => loc("crush", "体当たりする"),
        BlowMethod::Engulf => loc("engulf", "飲み込む"),
        BlowMethod::Charge => loc("charge", "請求書をよこす"),
        BlowMethod::Crawl => loc("crawl on you", "体の上を這い回る"),
        BlowMethod::Drool => loc("drool on you", "よだれをたらす"),
        BlowMethod::Spit => loc("spit", "つばを吐く"),
        BlowMethod::Explode => loc("explode", "爆発する"),
        BlowMethod::Gaze => loc("gaze", "にらむ"),
        BlowMethod::Wail => loc("wail", "泣き叫ぶ"),
        BlowMethod::Spore => loc("release spores", "胞子を飛ばす"),
        BlowMethod::Beg => loc("beg", "金をせがむ"),
        BlowMethod::Insult => loc("insult", "侮辱する"),
        BlowMethod::Moan => loc("moan", "うめく"),
        BlowMethod::Show => loc("sing", "歌う"),
        BlowMethod::None | BlowMethod::Shoot | BlowMethod::Unknown => WEIRD,
    }
}

/// Verb phrase and color of a blow effect; `None` for effects left unsaid
pub fn effect_phrase(effect: BlowEffect) -> Option<(Localized, TermColor)> {
    use crate::data::TermColor::*;
    let entry = match effect {
        BlowEffect::None => return None,
        BlowEffect::Hurt => (loc("attack", "攻撃する"), White),
        BlowEffect::SuperHurt => (loc("slaughter", "強力に攻撃する"), LightRed),
        BlowEffect::Poison => (loc("poison", "毒をくらわす"), LightGreen),
        BlowEffect::Disenchant => (loc("disenchant", "劣化させる"), Violet),
        BlowEffect::DrainCharges => (loc("drain charges", "充填魔力を吸収する"), LightBlue),
        BlowEffect::EatGold => (loc("steal gold", "金を盗む"), Yellow),
        BlowEffect::EatItem => (loc("steal items", "アイテムを盗む"), Umber),
        BlowEffect::EatFood => (loc("eat your food", "あなたの食料を食べる"), LightUmber),
        BlowEffect::EatLight => (loc("absorb light", "明かりを吸収する"), Yellow),
        BlowEffect::Acid => (loc("shoot acid", "酸を飛ばす"), Green),
        BlowEffect::Elec => (loc("electrocute", "感電させる"), Blue),
        BlowEffect::Fire => (loc("burn", "燃やす"), Red),
        BlowEffect::Cold => (loc("freeze", "凍らせる"), LightWhite),
        BlowEffect::Blind => (loc("blind", "盲目にする"), LightDark),
        BlowEffect::Confuse => (loc("confuse", "混乱させる"), LightUmber),
        BlowEffect::Terrify => (loc("terrify", "恐怖させる"), Violet),
        BlowEffect::Paralyze => (loc("paralyze", "麻痺させる"), LightRed),
        BlowEffect::LoseStr => (loc("reduce strength", "腕力を減少させる"), Orange),
        BlowEffect::LoseInt => (loc("reduce intelligence", "知能を減少させる"), Orange),
        BlowEffect::LoseWis => (loc("reduce wisdom", "賢さを減少させる"), Orange),
        BlowEffect::LoseDex => (loc("reduce dexterity", "器用さを減少させる"), Orange),
        BlowEffect::LoseCon => (loc("reduce constitution", "耐久力を減少させる"), Orange),
        BlowEffect::LoseChr => (loc("reduce charisma", "魅力を減少させる"), Orange),
        BlowEffect::LoseAll => (loc("reduce all stats", "全ステータスを減少させる"), Orange),
        BlowEffect::Shatter => (loc("shatter", "粉砕する"), Umber),
        BlowEffect::Exp10 => (loc("lower experience (by 10d6+)", "経験値を減少(10d6+)させる"), Violet),
        BlowEffect::Exp20 => (loc("lower experience (by 20d6+)", "経験値を減少(20d6+)させる"), Violet),
        BlowEffect::Exp40 => (loc("lower experience (by 40d6+)", "経験値を減少(40d6+)させる"), Violet),
        BlowEffect::Exp80 => (loc("lower experience (by 80d6+)", "経験値を減少(80d6+)させる"), Violet),
        BlowEffect::Disease => (loc("disease", "病気にする"), Orange),
        BlowEffect::Time => (loc("time", "時間を逆戻りさせる"), LightBlue),
        BlowEffect::DrainLife => (loc("drain life force", "生命力を吸収する"), Violet),
        BlowEffect::DrainMana => (loc("drain mana force", "魔力を奪う"), Blue),
        BlowEffect::Inertia => (loc("slow", "減速させる"), Umber),
        BlowEffect::Stun => (loc("stun", "朦朧とさせる"), Orange),
        BlowEffect::Unknown => (WEIRD, White),
    };
    Some(entry)
}

/// Known melee blows in slot order; ranged shots are left to the launcher
pub fn blow_phrases(snap: &LoreSnapshot<'_>) -> Vec<BlowPhrase> {
    snap.race
        .blows
        .iter()
        .enumerate()
        .filter(|(slot, blow)| blow.method.is_melee() && snap.know_blow(*slot))
        .map(|(slot, blow)| BlowPhrase {
            method: method_phrase(blow.method),
            effect: effect_phrase(blow.effect),
            damage: (blow.dice.is_rollable() && snap.know_damage(slot)).then_some(blow.dice),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lore::{LoreMode, MonsterLore};
    use crate::monster::{Blow, Dice, MonsterRace};
    use crate::MAX_BLOWS;
    use strum::IntoEnumIterator;

    fn biter() -> MonsterRace {
        let mut blows = [Blow::NONE; MAX_BLOWS];
        blows[0] = Blow::new(BlowMethod::Bite, BlowEffect::Poison, Dice::new(1, 6));
        blows[1] = Blow::new(BlowMethod::Shoot, BlowEffect::Hurt, Dice::new(2, 6));
        blows[2] = Blow::new(BlowMethod::Claw, BlowEffect::Hurt, Dice::new(1, 3));
        MonsterRace {
            level: 5,
            blows,
            ..MonsterRace::BLANK
        }
    }

    #[test]
    fn test_every_method_has_words() {
        for method in BlowMethod::iter() {
            assert!(!method_phrase(method).en.is_empty());
            assert!(!method_phrase(method).jp.is_empty());
        }
        assert_eq!(method_phrase(BlowMethod::Unknown).en, "do something weird");
        assert_eq!(method_phrase(BlowMethod::Unknown).jp, "何か奇妙なことをする");
    }

    #[test]
    fn test_unobserved_slots_hidden() {
        let race = biter();
        let mut lore = MonsterLore::new();
        lore.blows[2] = 1;
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::Normal, false);
        let phrases = blow_phrases(&snap);
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].method.en, "claw");
        assert_eq!(phrases[0].damage, None);
    }

    #[test]
    fn test_shoot_slot_skipped() {
        let race = biter();
        let lore = MonsterLore::new();
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::FullKnowledge, false);
        let phrases = blow_phrases(&snap);
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0].damage, Some(Dice::new(1, 6)));
        assert_eq!(phrases[0].effect.map(|(e, _)| e.en), Some("poison"));
        assert_eq!(phrases[1].method.en, "claw");
    }

    #[test]
    fn test_damage_bit_reveals_dice() {
        let race = biter();
        let mut lore = MonsterLore::new();
        lore.blows[0] = 1;
        lore.blow_damage[0] = true;
        let snap = LoreSnapshot::new(&race, &lore, LoreMode::Normal, false);
        assert_eq!(blow_phrases(&snap)[0].damage, Some(Dice::new(1, 6)));
    }
}
