//! The prose assembler
//!
//! Walks the categories in a fixed order, feeding each category's fragments
//! through the active grammar into the sink.

use tracing::{debug, warn};

use super::combat::blow_phrases;
use super::magic::{breath_fragments, launch_fragments, magic_fragments};
use super::status::{
    aura_phrase, capability_fragments, constitution_facts, immunity_fragments,
    resistance_fragments, weakness_fragments,
};
use super::{FragmentList, LoreBook, LoreMode, LoreSink, LoreSnapshot, PlainTextSink};
use crate::data::TermColor;
use crate::grammar::{
    Conjugation, Conjunction, Grammar, JapaneseJoin, Language, ListJoin, Localized, Pronouns, loc,
};
use crate::monster::{MonraceId, RaceFlags, RaceTable};
use crate::player::Viewer;
use crate::world::LoreOptions;

/// Everything recall reads besides the race id and mode
#[derive(Debug, Clone)]
pub struct RecallContext<'a> {
    pub races: &'a RaceTable,
    pub book: &'a LoreBook,
    pub viewer: Viewer,
    pub options: LoreOptions,
}

impl<'a> RecallContext<'a> {
    /// Context whose viewer comes from the options
    pub fn new(races: &'a RaceTable, book: &'a LoreBook, options: LoreOptions) -> Self {
        Self {
            races,
            book,
            viewer: options.viewer(),
            options,
        }
    }
}

/// Write the recall of a race into `sink`
///
/// Unknown ids produce no output.
pub fn compile_lore(ctx: &RecallContext<'_>, race_id: MonraceId, mode: LoreMode, sink: &mut dyn LoreSink) {
    let Some(race) = ctx.races.get(race_id) else {
        warn!(race = %race_id, "recall requested for unknown race");
        return;
    };
    let lore = ctx.book.get(race_id);
    let snap = LoreSnapshot::new(race, lore, mode, ctx.options.cheat_know);
    debug!(
        race = %race_id,
        name = race.name,
        %mode,
        know_everything = snap.know_everything,
        "compiling recall"
    );
    LoreWriter::new(ctx, snap, sink).run();
}

/// Recall of a race as plain text
pub fn recall_text(ctx: &RecallContext<'_>, race_id: MonraceId, mode: LoreMode) -> String {
    let mut sink = PlainTextSink::new();
    compile_lore(ctx, race_id, mode, &mut sink);
    sink.into_string()
}

const LAUNCH: ListJoin = ListJoin {
    prefix: loc("{Who} may ", "{Who}は"),
    conjunction: Conjunction::Or,
    japanese: JapaneseJoin::Inflect {
        conjugation: Conjugation::Or,
        particle: "り",
        separator: "、",
    },
    suffix: loc("", "ことがある"),
};

const BREATH: ListJoin = ListJoin {
    prefix: loc("{Who} may breathe ", "{Who}は"),
    conjunction: Conjunction::Or,
    japanese: JapaneseJoin::Particle("や"),
    suffix: loc("", "のブレスを吐くことがある"),
};

const BREATH_CONTINUED: ListJoin = ListJoin {
    prefix: loc(", and may breathe ", "、なおかつ"),
    ..BREATH
};

const MAGIC: ListJoin = ListJoin {
    prefix: loc(" which ", ""),
    conjunction: Conjunction::Or,
    japanese: JapaneseJoin::Particle("、"),
    suffix: loc("", "の呪文を唱えることがある"),
};

const CAPABILITY: ListJoin = ListJoin {
    prefix: loc("{Who} can ", "{Who}は"),
    conjunction: Conjunction::And,
    japanese: JapaneseJoin::Inflect {
        conjugation: Conjugation::And,
        particle: "",
        separator: "、",
    },
    suffix: loc(".  ", "ことができる。"),
};

const WEAKNESS: ListJoin = ListJoin {
    prefix: loc("{Who} is hurt by ", "{Who}には"),
    conjunction: Conjunction::And,
    japanese: JapaneseJoin::Particle("や"),
    suffix: loc(".  ", "でダメージを与えられる。"),
};

const RESISTANCE: ListJoin = ListJoin {
    prefix: loc("{Who} resists ", "{Who}は"),
    conjunction: Conjunction::And,
    japanese: JapaneseJoin::Particle("と"),
    suffix: loc(".  ", "の耐性を持っている。"),
};

const IMMUNITY: ListJoin = ListJoin {
    prefix: loc("{Who} cannot be ", "{Who}は"),
    conjunction: Conjunction::Or,
    japanese: JapaneseJoin::Particle("し、"),
    suffix: loc(".  ", "。"),
};

pub(super) const SENTENCE_END: Localized = loc(".  ", "。");

/// State of one recall in progress
pub(super) struct LoreWriter<'c, 'a, 's> {
    pub(super) ctx: &'c RecallContext<'a>,
    pub(super) snap: LoreSnapshot<'a>,
    pub(super) sink: &'s mut dyn LoreSink,
    pub(super) language: Language,
    grammar: &'static dyn Grammar,
    pub(super) pronouns: Pronouns,
}

impl<'c, 'a, 's> LoreWriter<'c, 'a, 's> {
    fn new(ctx: &'c RecallContext<'a>, snap: LoreSnapshot<'a>, sink: &'s mut dyn LoreSink) -> Self {
        let language = ctx.options.language;
        Self {
            ctx,
            pronouns: Pronouns::new(snap.gender, language),
            snap,
            sink,
            language,
            grammar: language.grammar(),
        }
    }

    fn run(mut self) {
        if self.snap.mode != LoreMode::Debug {
            self.kill_history();
        }
        self.description();
        self.depth();
        if self.snap.race.id == MonraceId::CHAMELEON {
            self.chameleon();
            return;
        }
        self.movement();
        self.experience();
        self.aura();
        self.reflection();
        self.escorts();
        self.ranged_and_magic();
        self.armor();
        self.list(&capability_fragments(&self.snap, self.language), &CAPABILITY);
        self.constitution();
        self.list(&weakness_fragments(&self.snap, self.language), &WEAKNESS);
        self.list(&resistance_fragments(&self.snap, self.language), &RESISTANCE);
        self.evolution();
        self.list(&immunity_fragments(&self.snap, self.language), &IMMUNITY);
        self.alertness();
        self.drops();
        self.melee();
        if self.snap.mode == LoreMode::Debug {
            self.wizard_line();
        }
        self.guardian();
    }

    /// Pick the text of the active language
    pub(super) fn pick<T>(&self, en: T, jp: T) -> T {
        match self.language {
            Language::English => en,
            Language::Japanese => jp,
        }
    }

    /// Emit uncolored text, filling pronoun slots
    pub(super) fn say(&mut self, text: Localized) {
        let filled = self.pronouns.fill(text.get(self.language));
        self.sink.emit_plain(&filled);
    }

    /// Emit an already localized string, filling pronoun slots
    pub(super) fn say_owned(&mut self, text: &str) {
        let filled = self.pronouns.fill(text);
        self.sink.emit_plain(&filled);
    }

    pub(super) fn colored(&mut self, color: TermColor, text: &str) {
        self.sink.emit(color, text);
    }

    /// Emit a template whose `{slot}` marker is replaced by colored text
    pub(super) fn say_with_slot(&mut self, template: Localized, slot: Option<(&str, TermColor)>) {
        let template = template.get(self.language);
        let (before, after) = template.split_once("{slot}").unwrap_or((template, ""));
        self.say_owned(before);
        if let Some((text, color)) = slot {
            self.colored(color, text);
        }
        self.say_owned(after);
    }

    pub(super) fn list(&mut self, items: &FragmentList, join: &ListJoin) {
        self.grammar.write_list(self.sink, &self.pronouns, items, join);
    }

    fn constitution(&mut self) {
        let facts: Vec<_> = constitution_facts(&self.snap).collect();
        for fact in facts {
            self.say(loc("{Who} ", "{Who}は"));
            self.colored(fact.color, fact.text.get(self.language));
            self.say(SENTENCE_END);
        }
    }

    fn aura(&mut self) {
        if let Some((phrase, color)) = aura_phrase(self.snap.flags) {
            self.say(loc("{Who} is surrounded by ", "{Who}は"));
            self.colored(color, phrase.get(self.language));
            self.say(loc(".  ", "に包まれている。"));
        }
    }

    fn reflection(&mut self) {
        if self.snap.flags.contains(RaceFlags::REFLECTING) {
            self.say(loc("{Who} reflects bolt spells.  ", "{Who}はボルト系の呪文を跳ね返す。"));
        }
    }

    /// Launchers, breaths and spells form one sentence closed by the
    /// casting frequency
    fn ranged_and_magic(&mut self) {
        let launches = launch_fragments(&self.snap, self.language);
        if !launches.is_empty() {
            self.list(&launches, &LAUNCH);
            self.snap.launched = true;
            self.snap.old = true;
        }

        let breaths = breath_fragments(&self.snap, self.language);
        if !breaths.is_empty() {
            let join = if self.snap.launched { &BREATH_CONTINUED } else { &BREATH };
            self.list(&breaths, join);
            self.snap.breath = true;
            self.snap.old = true;
        }

        let spells = magic_fragments(&self.snap, &self.ctx.viewer, self.language);
        if !spells.is_empty() {
            if self.snap.breath || self.snap.launched {
                self.say(loc(", and is also", "、なおかつ"));
            } else {
                self.say(loc("{Who} is", "{Who}は"));
            }
            let smart = self.snap.flags.contains(RaceFlags::SMART);
            let intelligently = self.pick(" intelligently", "的確に");
            self.say_with_slot(
                loc(" magical, casting spells{slot}", "{slot}魔法を使うことができ、"),
                smart.then_some((intelligently, TermColor::Yellow)),
            );
            self.list(&spells, &MAGIC);
            self.snap.old = true;
        }

        if self.snap.old {
            self.casting_frequency();
            self.snap.old = false;
        }
    }

    fn casting_frequency(&mut self) {
        let seen = self.snap.lore.cast_spell;
        let freq = u32::from(self.snap.race.freq_spell);
        if freq > 0 {
            if seen > crate::EXACT_FREQUENCY_THRESHOLD || self.snap.know_everything {
                let n = (100 / freq).max(1);
                let text = self.pick(format!("; 1 time in {n}"), format!("(確率:1/{n})"));
                self.say_owned(&text);
            } else if seen > 0 {
                let rounded = freq.div_ceil(10) * 10;
                let n = (100 / rounded).max(1);
                let text = self.pick(format!("; about 1 time in {n}"), format!("(確率:約1/{n})"));
                self.say_owned(&text);
            }
        }
        self.say(SENTENCE_END);
    }

    fn armor(&mut self) {
        if !self.snap.know_armor() {
            return;
        }
        let race = self.snap.race;
        let ac = race.armor_class;
        let head = self.pick(
            format!("{{Who}} has an armor rating of {ac}"),
            format!("{{Who}}は AC{ac} の防御力と"),
        );
        self.say_owned(&head);
        let life = if race.flags.contains(RaceFlags::FORCE_MAXHP) || race.hit_dice.sides == 1 {
            race.hit_dice.max().to_string()
        } else {
            race.hit_dice.to_string()
        };
        let tail = self.pick(
            format!(" and a life rating of {life}.  "),
            format!(" {life} の体力がある。"),
        );
        self.say_owned(&tail);
    }

    fn melee(&mut self) {
        let blows = blow_phrases(&self.snap);
        if !blows.is_empty() {
            self.grammar.write_blows(self.sink, &self.pronouns, &blows);
        } else if self.snap.flags.contains(RaceFlags::NEVER_BLOW) {
            self.say(loc("{Who} has no physical attacks.  ", "{Who}は物理的な攻撃方法を持たない。"));
        } else {
            self.say(loc(
                "Nothing is known about {whose} attacks.  ",
                "{whose}攻撃については何も知らない。",
            ));
        }
    }

    fn wizard_line(&mut self) {
        let race = self.snap.race;
        let text = self.pick(
            format!(
                "Race index {}, rarity {}, level {}, base experience {}.  ",
                race.id, race.rarity, race.level, race.exp
            ),
            format!(
                "種族番号 {}、希少度 {}、階層 {}、基本経験値 {}。",
                race.id, race.rarity, race.level, race.exp
            ),
        );
        self.colored(TermColor::Slate, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lore::{MonsterLore, RecordingSink};
    use crate::monster::{AbilityFlags, MonsterRace, SpellDamage};

    static FIRE: [SpellDamage; 1] = [SpellDamage::dice(AbilityFlags::BR_FIRE, 4, 6)];

    fn table() -> RaceTable {
        RaceTable::new(vec![MonsterRace {
            id: MonraceId(10),
            name: "hell hound",
            level: 20,
            freq_spell: 10,
            flags: RaceFlags::SMART,
            abilities: AbilityFlags::BR_FIRE | AbilityFlags::SCARE | AbilityFlags::BLINK,
            spell_damage: &FIRE,
            ..MonsterRace::BLANK
        }])
    }

    #[test]
    fn test_unknown_race_writes_nothing() {
        let races = table();
        let book = LoreBook::new();
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let mut sink = RecordingSink::new();
        compile_lore(&ctx, MonraceId(999), LoreMode::FullKnowledge, &mut sink);
        assert!(sink.spans().is_empty());
    }

    #[test]
    fn test_breath_then_magic_continuation() {
        let races = table();
        let book = LoreBook::new();
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(10), LoreMode::FullKnowledge);
        assert!(text.contains(
            "It may breathe fire (4d6), and is also magical, casting spells intelligently which terrify or blink-self; 1 time in 10.  "
        ), "{text}");
    }

    #[test]
    fn test_approximate_frequency() {
        let races = table();
        let mut book = LoreBook::new();
        let lore = book.get_mut(MonraceId(10));
        lore.sights = 1;
        lore.abilities = AbilityFlags::SCARE;
        lore.cast_spell = 3;
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(10), LoreMode::Normal);
        assert!(text.contains("It is magical, casting spells which terrify; about 1 time in 10.  "), "{text}");
    }

    #[test]
    fn test_launcher_then_magic_continuation() {
        let races = RaceTable::new(vec![MonsterRace {
            id: MonraceId(12),
            name: "rocketeer",
            level: 30,
            freq_spell: 10,
            abilities: AbilityFlags::ROCKET | AbilityFlags::BLINK,
            ..MonsterRace::BLANK
        }]);
        let book = LoreBook::new();
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(12), LoreMode::FullKnowledge);
        assert!(text.contains("It may shoot a rocket"), "{text}");
        assert!(text.contains(", and is also magical, casting spells which blink-self; 1 time in 10.  "), "{text}");
        assert!(!text.contains("It is magical"), "{text}");
    }

    #[test]
    fn test_frequency_above_hundred_percent() {
        let races = RaceTable::new(vec![MonsterRace {
            id: MonraceId(11),
            name: "frantic caster",
            level: 5,
            freq_spell: 150,
            abilities: AbilityFlags::BLINK,
            ..MonsterRace::BLANK
        }]);
        let mut book = LoreBook::new();
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(11), LoreMode::FullKnowledge);
        assert!(text.contains("casting spells which blink-self; 1 time in 1.  "), "{text}");

        let lore = book.get_mut(MonraceId(11));
        lore.abilities = AbilityFlags::BLINK;
        lore.cast_spell = 1;
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(11), LoreMode::Normal);
        assert!(text.contains("; about 1 time in 1.  "), "{text}");
    }

    #[test]
    fn test_japanese_breath_sentence() {
        let races = table();
        let book = LoreBook::new();
        let options = LoreOptions {
            language: Language::Japanese,
            ..LoreOptions::default()
        };
        let ctx = RecallContext::new(&races, &book, options);
        let text = recall_text(&ctx, MonraceId(10), LoreMode::FullKnowledge);
        assert!(text.contains("それは火炎(4d6)のブレスを吐くことがある、なおかつ的確に魔法を使うことができ、恐怖、ショートテレポートの呪文を唱えることがある(確率:1/10)。"), "{text}");
    }

    #[test]
    fn test_smart_flag_needs_observation() {
        let races = table();
        let mut book = LoreBook::new();
        *book.get_mut(MonraceId(10)) = MonsterLore {
            abilities: AbilityFlags::BLINK,
            ..MonsterLore::new()
        };
        let ctx = RecallContext::new(&races, &book, LoreOptions::default());
        let text = recall_text(&ctx, MonraceId(10), LoreMode::Normal);
        assert!(text.contains("It is magical, casting spells which blink-self.  "), "{text}");
        assert!(!text.contains("intelligently"));
    }
}
