//! Language grammar helpers
//!
//! The assembler is language-agnostic: it builds fragment lists and hands
//! them to a [`Grammar`] together with a [`ListJoin`] describing how the
//! category glues its items. Each language decides word order, separators
//! and verb inflection.

pub mod english;
pub mod japanese;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::data::TermColor;
use crate::lore::{FragmentList, LoreSink};
use crate::monster::Dice;

pub use english::{ordinal_suffix, pluralize, with_article};
pub use japanese::{Conjugation, jverb};

/// Output language of recall text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    /// Parse a language name or its two-letter code
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "japanese" | "jp" | "ja" => Some(Language::Japanese),
            _ => None,
        }
    }

    /// Grammar strategy of this language
    pub fn grammar(self) -> &'static dyn Grammar {
        match self {
            Language::English => &English,
            Language::Japanese => &Japanese,
        }
    }
}

/// Grammatical gender of a race, selecting its pronouns
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Gender {
    #[default]
    Neuter,
    Male,
    Female,
}

/// A phrase in both supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub jp: &'static str,
}

/// Shorthand constructor used by the phrase tables
pub const fn loc(en: &'static str, jp: &'static str) -> Localized {
    Localized { en, jp }
}

impl Localized {
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Japanese => self.jp,
        }
    }
}

/// Subject and possessive pronouns of one race in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronouns {
    pub subject: &'static str,
    pub subject_capital: &'static str,
    pub possessive: &'static str,
}

impl Pronouns {
    pub const fn new(gender: Gender, language: Language) -> Self {
        match (language, gender) {
            (Language::English, Gender::Neuter) => Self::of("it", "It", "its"),
            (Language::English, Gender::Male) => Self::of("he", "He", "his"),
            (Language::English, Gender::Female) => Self::of("she", "She", "her"),
            (Language::Japanese, Gender::Neuter) => Self::of("それ", "それ", "それの"),
            (Language::Japanese, Gender::Male) => Self::of("彼", "彼", "彼の"),
            (Language::Japanese, Gender::Female) => Self::of("彼女", "彼女", "彼女の"),
        }
    }

    const fn of(subject: &'static str, subject_capital: &'static str, possessive: &'static str) -> Self {
        Self {
            subject,
            subject_capital,
            possessive,
        }
    }

    /// Substitute `{Who}`, `{who}` and `{whose}` in a phrase template
    pub fn fill(&self, template: &str) -> String {
        if !template.contains('{') {
            return template.to_string();
        }
        template
            .replace("{Who}", self.subject_capital)
            .replace("{whose}", self.possessive)
            .replace("{who}", self.subject)
    }
}

/// English conjunction placed before the last list item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Conjunction {
    #[strum(serialize = " and ")]
    And,
    #[strum(serialize = " or ")]
    Or,
}

/// How Japanese glues a non-final list item to the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JapaneseJoin {
    /// Noun lists: the particle follows every non-final item
    Particle(&'static str),
    /// Verb lists: each non-final verb is inflected, then `particle` and
    /// `separator` follow
    Inflect {
        conjugation: Conjugation,
        particle: &'static str,
        separator: &'static str,
    },
}

/// Everything a category needs to render its fragment list as a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListJoin {
    /// Subject phrase written once before the first item
    pub prefix: Localized,
    pub conjunction: Conjunction,
    pub japanese: JapaneseJoin,
    /// Closing phrase written once after the last item
    pub suffix: Localized,
}

/// One melee blow, already resolved to phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlowPhrase {
    pub method: Localized,
    pub effect: Option<(Localized, TermColor)>,
    /// Damage, when the player knows it
    pub damage: Option<Dice>,
}

/// Language strategy used by the assembler
pub trait Grammar {
    fn language(&self) -> Language;

    /// Write `prefix item, item and item suffix`, or nothing for an empty list
    fn write_list(
        &self,
        sink: &mut dyn LoreSink,
        pronouns: &Pronouns,
        items: &FragmentList,
        join: &ListJoin,
    );

    /// Write the melee blow sentence for a non-empty blow list
    fn write_blows(&self, sink: &mut dyn LoreSink, pronouns: &Pronouns, blows: &[BlowPhrase]);
}

/// English list and blow rules
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

/// Japanese list and blow rules
#[derive(Debug, Clone, Copy, Default)]
pub struct Japanese;

impl Grammar for English {
    fn language(&self) -> Language {
        Language::English
    }

    fn write_list(
        &self,
        sink: &mut dyn LoreSink,
        pronouns: &Pronouns,
        items: &FragmentList,
        join: &ListJoin,
    ) {
        if items.is_empty() {
            return;
        }
        sink.emit_plain(&pronouns.fill(join.prefix.en));
        let last = items.len() - 1;
        for (i, fragment) in items.iter().enumerate() {
            if i > 0 {
                if i < last {
                    sink.emit_plain(", ");
                } else {
                    sink.emit_plain(&join.conjunction.to_string());
                }
            }
            sink.emit(fragment.color, &fragment.text);
        }
        sink.emit_plain(&pronouns.fill(join.suffix.en));
    }

    fn write_blows(&self, sink: &mut dyn LoreSink, pronouns: &Pronouns, blows: &[BlowPhrase]) {
        if blows.is_empty() {
            return;
        }
        sink.emit_plain(&pronouns.fill("{Who} can "));
        let last = blows.len() - 1;
        for (i, blow) in blows.iter().enumerate() {
            if i > 0 {
                sink.emit_plain(if i < last { ", " } else { ", and " });
            }
            sink.emit_plain(blow.method.en);
            if let Some((effect, color)) = blow.effect {
                sink.emit_plain(" to ");
                sink.emit(color, effect.en);
            }
            if let Some(dice) = blow.damage {
                sink.emit_plain(" with damage");
                sink.emit_plain(&format!(" {dice}"));
            }
        }
        sink.emit_plain(".  ");
    }
}

impl Grammar for Japanese {
    fn language(&self) -> Language {
        Language::Japanese
    }

    fn write_list(
        &self,
        sink: &mut dyn LoreSink,
        pronouns: &Pronouns,
        items: &FragmentList,
        join: &ListJoin,
    ) {
        if items.is_empty() {
            return;
        }
        sink.emit_plain(&pronouns.fill(join.prefix.jp));
        let last = items.len() - 1;
        for (i, fragment) in items.iter().enumerate() {
            if i == last {
                sink.emit(fragment.color, &fragment.text);
                continue;
            }
            match join.japanese {
                JapaneseJoin::Particle(particle) => {
                    sink.emit(fragment.color, &fragment.text);
                    sink.emit_plain(particle);
                }
                JapaneseJoin::Inflect {
                    conjugation,
                    particle,
                    separator,
                } => {
                    let inflected = jverb(&fragment.text, conjugation);
                    sink.emit(fragment.color, &format!("{inflected}{particle}"));
                    sink.emit_plain(separator);
                }
            }
        }
        sink.emit_plain(&pronouns.fill(join.suffix.jp));
    }

    fn write_blows(&self, sink: &mut dyn LoreSink, pronouns: &Pronouns, blows: &[BlowPhrase]) {
        if blows.is_empty() {
            return;
        }
        sink.emit_plain(&pronouns.fill("{Who}は"));
        let last = blows.len() - 1;
        for (i, blow) in blows.iter().enumerate() {
            let is_last = i == last;
            if let Some(dice) = blow.damage {
                sink.emit_plain(&format!(" {dice} のダメージで"));
            }
            let method = match (blow.effect.is_some(), is_last) {
                (true, _) => jverb(blow.method.jp, Conjugation::To),
                (false, false) => jverb(blow.method.jp, Conjugation::And),
                (false, true) => blow.method.jp.to_string(),
            };
            sink.emit_plain(&method);
            if let Some((effect, color)) = blow.effect {
                if is_last {
                    sink.emit(color, effect.jp);
                } else {
                    sink.emit(color, &jverb(effect.jp, Conjugation::And));
                }
            }
            if !is_last {
                sink.emit_plain("、");
            }
        }
        sink.emit_plain("。");
    }
}
