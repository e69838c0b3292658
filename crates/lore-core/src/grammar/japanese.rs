//! Japanese verb inflection for list joining
//!
//! Lists of verb phrases are joined by rewriting every non-final verb from
//! its dictionary form into a connective form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Connective form a verb is rewritten into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Conjugation {
    /// Continuative stem, "A し、B する"
    And,
    /// Te-form, "A して B する"
    To,
    /// Past stem for "A したり、B したり" enumerations
    Or,
}

/// Dictionary ending and its (And, To, Or) replacements
///
/// Longer endings come first so "する" wins over "る".
const ENDINGS: &[(&str, [&str; 3])] = &[
    ("する", ["し", "して", "した"]),
    ("いる", ["い", "いて", "いた"]),
    ("える", ["え", "えて", "えた"]),
    ("ける", ["け", "けて", "けた"]),
    ("げる", ["げ", "げて", "げた"]),
    ("せる", ["せ", "せて", "せた"]),
    ("ぜる", ["ぜ", "ぜて", "ぜた"]),
    ("たる", ["ち", "って", "った"]),
    ("だる", ["ぢ", "って", "った"]),
    ("てる", ["て", "てて", "てた"]),
    ("でる", ["で", "でて", "でた"]),
    ("ねる", ["ね", "ねて", "ねた"]),
    ("へる", ["へ", "へて", "へた"]),
    ("べる", ["べ", "べて", "べた"]),
    ("める", ["め", "めて", "めた"]),
    ("れる", ["れ", "れて", "れた"]),
    ("う", ["い", "って", "った"]),
    ("く", ["き", "いて", "いた"]),
    ("ぐ", ["ぎ", "いで", "いだ"]),
    ("す", ["し", "して", "した"]),
    ("ず", ["じ", "じて", "じた"]),
    ("つ", ["ち", "って", "った"]),
    ("づ", ["ぢ", "って", "った"]),
    ("ぬ", ["に", "んで", "んだ"]),
    ("ふ", ["ひ", "って", "った"]),
    ("ぶ", ["び", "んで", "んだ"]),
    ("む", ["み", "んで", "んだ"]),
    ("る", ["り", "って", "った"]),
];

/// Connector appended when no known ending matches
const FALLBACK: [&str; 3] = ["そして", "ことにより", "ことや"];

impl Conjugation {
    const fn index(self) -> usize {
        match self {
            Conjugation::And => 0,
            Conjugation::To => 1,
            Conjugation::Or => 2,
        }
    }
}

/// Rewrite the trailing verb of `phrase` into the requested form
pub fn jverb(phrase: &str, conjugation: Conjugation) -> String {
    let idx = conjugation.index();
    for (ending, forms) in ENDINGS {
        if let Some(stem) = phrase.strip_suffix(ending) {
            return format!("{stem}{}", forms[idx]);
        }
    }
    format!("{phrase}{}", FALLBACK[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suru_verbs() {
        assert_eq!(jverb("混乱させる", Conjugation::And), "混乱させ");
        assert_eq!(jverb("攻撃する", Conjugation::And), "攻撃し");
        assert_eq!(jverb("攻撃する", Conjugation::To), "攻撃して");
        assert_eq!(jverb("攻撃する", Conjugation::Or), "攻撃した");
    }

    #[test]
    fn test_godan_verbs() {
        assert_eq!(jverb("噛む", Conjugation::And), "噛み");
        assert_eq!(jverb("噛む", Conjugation::To), "噛んで");
        assert_eq!(jverb("飛ぶ", Conjugation::To), "飛んで");
        assert_eq!(jverb("泳ぐ", Conjugation::To), "泳いで");
        assert_eq!(jverb("壊す", Conjugation::And), "壊し");
        assert_eq!(jverb("拾う", Conjugation::Or), "拾った");
        assert_eq!(jverb("吐く", Conjugation::To), "吐いて");
        assert_eq!(jverb("刺す", Conjugation::Or), "刺した");
    }

    #[test]
    fn test_ichidan_verbs() {
        assert_eq!(jverb("開ける", Conjugation::And), "開け");
        assert_eq!(jverb("食べる", Conjugation::To), "食べて");
        assert_eq!(jverb("見せる", Conjugation::Or), "見せた");
        assert_eq!(jverb("通り抜ける", Conjugation::And), "通り抜け");
    }

    #[test]
    fn test_fallback_connectors() {
        assert_eq!(jverb("炎", Conjugation::And), "炎そして");
        assert_eq!(jverb("炎", Conjugation::To), "炎ことにより");
        assert_eq!(jverb("炎", Conjugation::Or), "炎ことや");
    }
}
