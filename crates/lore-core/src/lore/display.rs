//! History, depth, movement and the other single-sentence categories

use super::recall::{LoreWriter, SENTENCE_END};
use super::status::alertness_phrase;
use crate::data::TermColor;
use crate::grammar::{
    Conjunction, JapaneseJoin, Language, ListJoin, loc, ordinal_suffix, pluralize, with_article,
};
use crate::grammar::english::number_takes_an;
use crate::lore::FragmentList;
use crate::monster::{KindFlags, MonraceId, RaceFlags};
use crate::{MAX_UCHAR, STANDARD_SPEED};

/// Alignment words of the experience sentence, in display order
const ALIGNMENTS: &[(KindFlags, &str, &str, TermColor)] = &[
    (KindFlags::ELDRITCH_HORROR, " sanity-blasting", "狂気を誘う", TermColor::Violet),
    (KindFlags::ANIMAL, " natural", "自然界の", TermColor::LightGreen),
    (KindFlags::EVIL, " evil", "邪悪なる", TermColor::LightDark),
    (KindFlags::GOOD, " good", "善良な", TermColor::Yellow),
    (KindFlags::UNDEAD, " undead", "アンデッドの", TermColor::Violet),
    (KindFlags::AMBERITE, " Amberite", "アンバーの王族の", TermColor::Violet),
];

/// Creature kinds of the experience sentence
const KINDS: &[(KindFlags, &str, &str, TermColor)] = &[
    (KindFlags::DRAGON, " dragon", "ドラゴン", TermColor::Orange),
    (KindFlags::DEMON, " demon", "デーモン", TermColor::Violet),
    (KindFlags::GIANT, " giant", "巨人", TermColor::LightUmber),
    (KindFlags::TROLL, " troll", "トロル", TermColor::Blue),
    (KindFlags::ORC, " orc", "オーク", TermColor::Umber),
    (KindFlags::HUMAN, " human", "人間", TermColor::LightWhite),
    (KindFlags::QUANTUM, " quantum creature", "量子生物", TermColor::Violet),
    (KindFlags::ANGEL, " angel", "天使", TermColor::Yellow),
];

const ESCORT_LIST: ListJoin = ListJoin {
    prefix: loc("", ""),
    conjunction: Conjunction::And,
    japanese: JapaneseJoin::Particle("、"),
    suffix: loc("", ""),
};

impl LoreWriter<'_, '_, '_> {
    pub(super) fn kill_history(&mut self) {
        let race = self.snap.race;
        let lore = self.snap.lore;
        let deaths = lore.deaths;

        if race.is_unique() {
            let dead = lore.alive(race) == 0;
            if deaths > 0 {
                let text = self.pick(
                    format!("{{Who}} has slain {deaths} of your ancestors"),
                    format!("{{Who}}はあなたの先祖を {deaths} 人葬っている"),
                );
                self.say_owned(&text);
                let tail = match (dead, self.language) {
                    (true, Language::English) => {
                        format!(", but you have avenged {}!  ", if deaths == 1 { "him" } else { "them" })
                    }
                    (false, Language::English) => {
                        format!(", who {} unavenged.  ", if deaths == 1 { "remains" } else { "remain" })
                    }
                    (true, Language::Japanese) => "が、すでに仇討ちは果たしている！".to_string(),
                    (false, Language::Japanese) => "のに、まだ仇討ちを果たしていない。".to_string(),
                };
                self.say_owned(&tail);
            } else if dead {
                self.say(loc("You have slain this foe.  ", "あなたはこの仇敵をすでに葬り去っている。"));
            } else if lore.sights > 0 || self.snap.know_everything {
                self.say(loc("This foe is still alive!  ", "この仇敵はまだ生きている！"));
            }
            self.say(loc("\n", "\n"));
            return;
        }

        if deaths > 0 {
            let head = self.pick(
                format!(
                    "{deaths} of your ancestors {} been killed by this creature, ",
                    if deaths == 1 { "has" } else { "have" }
                ),
                format!("このモンスターはあなたの先祖を {deaths} 人葬っている"),
            );
            self.say_owned(&head);
            let tail = if lore.pkills > 0 {
                self.pick(
                    format!(
                        "and you have exterminated at least {} of the creatures.  ",
                        lore.pkills
                    ),
                    format!("が、あなたはこのモンスターを少なくとも {} 体は倒している。", lore.pkills),
                )
            } else if lore.tkills > 0 {
                self.pick(
                    format!(
                        "and your ancestors have exterminated at least {} of the creatures.  ",
                        lore.tkills
                    ),
                    format!(
                        "が、あなたの先祖はこのモンスターを少なくとも {} 体は倒している。",
                        lore.tkills
                    ),
                )
            } else {
                self.pick(
                    "and {who} is not ever known to have been defeated.  ".to_string(),
                    "が、まだ打ち破られたことはない。".to_string(),
                )
            };
            self.say_owned(&tail);
        } else if lore.pkills > 0 {
            let text = self.pick(
                format!("You have killed at least {} of these creatures.  ", lore.pkills),
                format!("あなたはこのモンスターを少なくとも {} 体は殺している。", lore.pkills),
            );
            self.say_owned(&text);
        } else if lore.tkills > 0 {
            let text = self.pick(
                format!("Your ancestors have killed at least {} of these creatures.  ", lore.tkills),
                format!("あなたの先祖はこのモンスターを少なくとも {} 体は殺している。", lore.tkills),
            );
            self.say_owned(&text);
        } else {
            self.say(loc(
                "No battles to the death are recalled.  ",
                "このモンスターを倒したことはない。",
            ));
        }

        if race.max_population().is_some() && (lore.sights > 0 || self.snap.know_everything) {
            let alive = lore.alive(race);
            let plural = pluralize(race.name);
            let name = race.name_in(self.language);
            let text = match (alive, self.language) {
                (0, Language::English) => format!("All of the {plural} have been slain.  "),
                (0, Language::Japanese) => format!("{name}はすべて倒された。"),
                (n, Language::English) => format!(
                    "{n} of the {plural} {} still alive.  ",
                    if n == 1 { "is" } else { "are" }
                ),
                (n, Language::Japanese) => format!("{name}はまだ {n} 体生きている。"),
            };
            self.say_owned(&text);
        }
        self.say(loc("\n", "\n"));
    }

    pub(super) fn description(&mut self) {
        let text = self.snap.race.text_in(self.language);
        if !text.is_empty() {
            self.sink.emit_plain(text);
            self.sink.emit_plain("\n");
        }
    }

    pub(super) fn depth(&mut self) {
        let race = self.snap.race;
        // Japanese needs the finite verb when nothing follows in this sentence
        let continued = self.depth_continued();
        if race.level == 0 {
            let jp = if continued { "{Who}は町に住み" } else { "{Who}は町に住んでいる" };
            self.say(loc("{Who} lives in the town", jp));
            self.snap.old = true;
        } else if self.snap.lore.tkills > 0 || self.snap.know_everything {
            let level = u32::from(race.level);
            let verb = if continued { "出現し" } else { "出現する" };
            let text = if self.ctx.options.depth_in_feet {
                let feet = level * 50;
                self.pick(
                    format!("{{Who}} is normally found at depths of {feet} feet"),
                    format!("{{Who}}は通常地下 {feet} フィートで{verb}"),
                )
            } else {
                self.pick(
                    format!("{{Who}} is normally found on dungeon level {level}"),
                    format!("{{Who}}は通常地下 {level} 階で{verb}"),
                )
            };
            self.say_owned(&text);
            self.snap.old = true;
        }
    }

    /// Whether the chameleon or movement clause will extend the depth clause
    fn depth_continued(&self) -> bool {
        self.snap.race.id == MonraceId::CHAMELEON
            || self.snap.know_movement()
            || self.snap.flags.contains(RaceFlags::NEVER_MOVE)
    }

    /// The shapechanger's recall ends right after its depth
    pub(super) fn chameleon(&mut self) {
        if self.snap.old {
            self.say(loc(
                ", and can take the shape of other monsters.",
                "、かつ他のモンスターに化けることができる。",
            ));
        } else {
            self.say(loc(
                "{Who} can take the shape of other monsters.",
                "{Who}は他のモンスターに化けることができる。",
            ));
        }
        self.say(loc("\n", "\n"));
    }

    pub(super) fn movement(&mut self) {
        if self.snap.know_movement() {
            if self.snap.old {
                self.say(loc(", and", "、"));
            } else {
                self.say(loc("{Who}", "{Who}は"));
                self.snap.old = true;
            }
            self.say(loc(" moves", ""));
            self.erratic_movement();
            self.speed();
            self.say(loc("", "動いている"));
        }

        if self.snap.flags.contains(RaceFlags::NEVER_MOVE) {
            if self.snap.old {
                self.say(loc(", but ", "、しかし"));
            } else {
                self.say(loc("{Who} ", "{Who}は"));
                self.snap.old = true;
            }
            self.say(loc("does not deign to chase intruders", "侵入者を追跡しない"));
        }

        if self.snap.old {
            self.say(SENTENCE_END);
            self.snap.old = false;
        }
    }

    fn erratic_movement(&mut self) {
        let flags = self.snap.flags;
        let half = flags.contains(RaceFlags::RAND_50);
        let quarter = flags.contains(RaceFlags::RAND_25);
        let degree = match (half, quarter) {
            (true, true) => loc(" extremely", "かなり"),
            (true, false) => loc(" somewhat", "幾分"),
            (false, true) => loc(" a bit", "少々"),
            (false, false) => return,
        };
        self.colored(TermColor::LightUmber, degree.get(self.language));
        self.say(loc(" erratically", "不規則に"));
        if self.snap.race.speed != STANDARD_SPEED {
            self.say(loc(", and", "、かつ"));
        }
    }

    fn speed(&mut self) {
        let speed = self.snap.race.speed;
        if speed > STANDARD_SPEED {
            let degree = match speed {
                140.. => Some((loc(" incredibly", "信じ難いほど"), TermColor::Green)),
                135..=139 => Some((loc(" extremely", "猛烈に"), TermColor::Orange)),
                130..=134 => Some((loc(" very", "非常に"), TermColor::Orange)),
                125..=129 => Some((loc(" fairly", "かなり"), TermColor::Umber)),
                ..=119 => Some((loc(" somewhat", "やや"), TermColor::LightUmber)),
                _ => None,
            };
            if let Some((word, color)) = degree {
                self.colored(color, word.get(self.language));
            }
            self.colored(TermColor::LightRed, loc(" quickly", "素早く").get(self.language));
        } else if speed < STANDARD_SPEED {
            let degree = match speed {
                ..=89 => Some((loc(" incredibly", "信じ難いほど"), TermColor::LightGreen)),
                90..=94 => Some((loc(" very", "非常に"), TermColor::Blue)),
                95..=99 => Some((loc(" fairly", "かなり"), TermColor::Blue)),
                105.. => Some((loc(" somewhat", "やや"), TermColor::Green)),
                _ => None,
            };
            if let Some((word, color)) = degree {
                self.colored(color, word.get(self.language));
            }
            self.colored(TermColor::LightBlue, loc(" slowly", "ゆっくりと").get(self.language));
        } else {
            self.say(loc(" at normal speed", "普通の速さで"));
        }
    }

    pub(super) fn experience(&mut self) {
        if self.snap.lore.tkills == 0 && !self.snap.know_everything {
            return;
        }
        let race = self.snap.race;
        let kinds = self.snap.kinds;

        self.say(loc("A kill of this", "この"));
        for &(flag, en, jp, color) in ALIGNMENTS {
            if kinds.contains(flag) {
                let word = self.pick(en, jp);
                self.colored(color, word);
            }
        }
        let mut named = false;
        for &(flag, en, jp, color) in KINDS {
            if kinds.contains(flag) {
                let word = self.pick(en, jp);
                self.colored(color, word);
                named = true;
            }
        }
        if !named {
            self.say(loc(" creature", "生物"));
        }

        let plev = u64::from(self.ctx.viewer.level.max(1));
        let total = u64::from(race.exp) * u64::from(race.level);
        let mut whole = total / plev;
        let mut hundredths = ((total % plev) * 1000 / plev + 5) / 10;
        if hundredths >= 100 {
            whole += 1;
            hundredths -= 100;
        }
        let level = u32::from(self.ctx.viewer.level);
        let text = match self.language {
            Language::English => format!(
                " is worth about {whole}.{hundredths:02} point{} for a{} {level}{} level character.  ",
                if whole == 1 && hundredths == 0 { "" } else { "s" },
                if number_takes_an(level) { "n" } else { "" },
                ordinal_suffix(level),
            ),
            Language::Japanese => format!(
                "を倒すことは {level} レベルのキャラクタにとって 約{whole}.{hundredths:02} ポイントの経験となる。"
            ),
        };
        self.say_owned(&text);
    }

    pub(super) fn escorts(&mut self) {
        let escorted = self
            .snap
            .flags
            .intersects(RaceFlags::ESCORT | RaceFlags::ESCORTS);
        let language = self.language;
        let mut members = FragmentList::new();
        for reinforcement in self.snap.race.reinforcements() {
            let Some(member) = self.ctx.races.get(reinforcement.race) else {
                continue;
            };
            if !self.snap.know_everything && self.ctx.book.get(member.id).sights == 0 {
                continue;
            }
            let dice = reinforcement.dice;
            let text = match language {
                Language::English if dice.num == 1 && dice.sides == 1 => with_article(member.name),
                Language::English => format!("{dice} {}", pluralize(member.name)),
                Language::Japanese => format!("{}({dice})", member.name_in(language)),
            };
            members.push(text, TermColor::White);
        }

        if escorted || !members.is_empty() {
            self.say(loc(
                "{Who} usually appears with escorts.  ",
                "{Who}は通常護衛を伴って現れる。",
            ));
            if !members.is_empty() {
                self.say(loc("These escorts", "護衛の構成は"));
                if escorted {
                    self.say(loc(" at the least", "少なくとも"));
                }
                self.say(loc(" contain ", ""));
                self.list(&members, &ESCORT_LIST);
                self.say(loc(".  ", "で成り立っている。"));
            }
        } else if self.snap.flags.contains(RaceFlags::FRIENDS) {
            self.say(loc("{Who} usually appears in groups.  ", "{Who}は通常集団で現れる。"));
        }
    }

    pub(super) fn evolution(&mut self) {
        if !self.snap.lore.can_evolve && !self.snap.know_everything {
            return;
        }
        let next = self
            .snap
            .race
            .next_race
            .and_then(|id| self.ctx.races.get(id));
        match next {
            Some(next) => {
                let name = next.name_in(self.language);
                self.say_with_slot(
                    loc(
                        "{Who} will evolve into {slot} when {who} gets enough experience.  ",
                        "{Who}は経験を積むと、{slot}に進化する。",
                    ),
                    Some((name, TermColor::Yellow)),
                );
            }
            None if !self.snap.is_unique() => {
                self.say(loc("{Who} won't evolve.  ", "{Who}は進化しない。"));
            }
            None => {}
        }
    }

    pub(super) fn alertness(&mut self) {
        let lore = self.snap.lore;
        let sleep = self.snap.race.sleep;
        let wake = u32::from(lore.wake);
        let noticed = wake * wake > u32::from(sleep)
            || lore.ignore == MAX_UCHAR
            || (sleep == 0 && lore.tkills >= 10)
            || self.snap.know_everything;
        if !noticed {
            return;
        }
        let act = alertness_phrase(sleep).get(self.language);
        let feet = 10 * u32::from(self.snap.race.aaf);
        let text = self.pick(
            format!("{{Who}} {act} intruders, which {{who}} may notice from {feet} feet.  "),
            format!("{{Who}}は侵入者{act}、 {feet} フィート先から侵入者に気付くことがある。"),
        );
        self.say_owned(&text);
    }

    pub(super) fn drops(&mut self) {
        let (gold, item) = self.snap.drop_counts();
        if gold == 0 && item == 0 {
            return;
        }
        let n = gold.max(item);
        let flags = self.snap.flags;
        let quantity = flags & RaceFlags::DROP_QUANTITY_MASK;
        let one_or_two = n == 2 && quantity == RaceFlags::DROP_1D2;
        let quality = if flags.contains(RaceFlags::DROP_GREAT) {
            Some(loc(" exceptional", "特別な"))
        } else if flags.contains(RaceFlags::DROP_GOOD) {
            Some(loc(" good", "上質な"))
        } else {
            None
        };

        match self.language {
            Language::English => {
                let singular = n == 1;
                let noun = match (item > 0, gold > 0, singular) {
                    (true, true, true) => " object or treasure",
                    (true, true, false) => " objects or treasures",
                    (true, false, true) => " object",
                    (true, false, false) => " objects",
                    (false, _, true) => " treasure",
                    (false, _, false) => " treasures",
                };
                let mut text = String::from("{Who} may carry");
                if singular {
                    let next = quality.map_or(noun, |q| q.en);
                    text.push_str(if crate::grammar::english::takes_an(next.trim_start()) {
                        " an"
                    } else {
                        " a"
                    });
                } else if one_or_two {
                    text.push_str(" one or two");
                } else {
                    text.push_str(&format!(" up to {n}"));
                }
                if let Some(q) = quality {
                    text.push_str(q.en);
                }
                text.push_str(noun);
                text.push_str(".  ");
                self.say_owned(&text);
            }
            Language::Japanese => {
                let mut text = String::from("{Who}は");
                if n == 1 {
                    text.push_str("一つの");
                } else if one_or_two {
                    text.push_str("一つか二つの");
                } else {
                    text.push_str(&format!("最大で {n} 個の"));
                }
                if let Some(q) = quality {
                    text.push_str(q.jp);
                }
                text.push_str(match (item > 0, gold > 0) {
                    (true, true) => "アイテムや財宝",
                    (true, false) => "アイテム",
                    (false, _) => "財宝",
                });
                text.push_str("を持っていることがある。");
                self.say_owned(&text);
            }
        }
    }

    pub(super) fn guardian(&mut self) {
        let race = self.snap.race;
        let lore = self.snap.lore;
        let kingpin = race.flags.contains(RaceFlags::QUESTOR)
            && (lore.sights > 0 || self.snap.know_everything)
            && lore.alive(race) > 0
            && race.id.is_kingpin();
        if kingpin {
            let text = loc(
                "You feel an intense desire to kill this monster...  ",
                "あなたはこのモンスターを殺したいという強い欲望を感じている...",
            );
            self.colored(TermColor::Violet, text.get(self.language));
        } else if self.snap.flags.contains(RaceFlags::GUARDIAN) {
            let text = loc(
                "This monster is the master of a dungeon.",
                "このモンスターはダンジョンの主である。",
            );
            self.colored(TermColor::LightRed, text.get(self.language));
        }
        self.say(loc("\n", "\n"));
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::Language;
    use crate::lore::{LoreBook, LoreMode, MonsterLore, RecallContext, recall_text};
    use crate::monster::{KindFlags, MonraceId, MonsterRace, RaceFlags, RaceTable};
    use crate::player::PlayerClass;
    use crate::world::LoreOptions;

    fn options(level: u8) -> LoreOptions {
        LoreOptions {
            level,
            class: PlayerClass::Warrior,
            ..LoreOptions::default()
        }
    }

    fn recall(race: MonsterRace, options: LoreOptions) -> String {
        let id = race.id;
        let races = RaceTable::new(vec![race]);
        let book = LoreBook::new();
        let ctx = RecallContext::new(&races, &book, options);
        recall_text(&ctx, id, LoreMode::FullKnowledge)
    }

    fn recall_seen(race: MonsterRace, lore: MonsterLore, options: LoreOptions) -> String {
        let id = race.id;
        let races = RaceTable::new(vec![race]);
        let mut book = LoreBook::new();
        book.insert(id, lore);
        let ctx = RecallContext::new(&races, &book, options);
        recall_text(&ctx, id, LoreMode::Normal)
    }

    fn japanese() -> LoreOptions {
        LoreOptions {
            language: Language::Japanese,
            ..options(1)
        }
    }

    fn unique_foe() -> MonsterRace {
        MonsterRace {
            id: MonraceId(12),
            name: "Bullroarer the Hobbit",
            level: 10,
            flags: RaceFlags::UNIQUE | RaceFlags::MALE,
            ..MonsterRace::BLANK
        }
    }

    #[test]
    fn test_unique_kill_history() {
        let cases = [
            (1, false, "He has slain 1 of your ancestors, who remains unavenged.  "),
            (3, false, "He has slain 3 of your ancestors, who remain unavenged.  "),
            (1, true, "He has slain 1 of your ancestors, but you have avenged him!  "),
            (3, true, "He has slain 3 of your ancestors, but you have avenged them!  "),
        ];
        for (deaths, dead, expected) in cases {
            let lore = MonsterLore {
                sights: 1,
                deaths,
                remaining: dead.then_some(0),
                ..MonsterLore::new()
            };
            let text = recall_seen(unique_foe(), lore, options(1));
            assert!(text.starts_with(expected), "{deaths} {dead}: {text}");
        }
    }

    #[test]
    fn test_unique_kill_history_japanese() {
        let lore = MonsterLore {
            sights: 1,
            deaths: 2,
            remaining: Some(0),
            ..MonsterLore::new()
        };
        let text = recall_seen(unique_foe(), lore, japanese());
        assert!(text.starts_with("彼はあなたの先祖を 2 人葬っているが、すでに仇討ちは果たしている！"), "{text}");
    }

    #[test]
    fn test_speed_buckets() {
        let cases = [
            (89, "incredibly slowly"),
            (90, "very slowly"),
            (94, "very slowly"),
            (95, "fairly slowly"),
            (99, "fairly slowly"),
            (100, "slowly"),
            (104, "slowly"),
            (105, "somewhat slowly"),
            (109, "somewhat slowly"),
            (110, "at normal speed"),
            (111, "somewhat quickly"),
            (119, "somewhat quickly"),
            (120, "quickly"),
            (124, "quickly"),
            (125, "fairly quickly"),
            (129, "fairly quickly"),
            (130, "very quickly"),
            (134, "very quickly"),
            (135, "extremely quickly"),
            (139, "extremely quickly"),
            (140, "incredibly quickly"),
        ];
        for (speed, phrase) in cases {
            let race = MonsterRace {
                id: MonraceId(13),
                name: "test runner",
                level: 1,
                speed,
                ..MonsterRace::BLANK
            };
            let text = recall(race, options(1));
            let expected = format!("depths of 50 feet, and moves {phrase}.  ");
            assert!(text.contains(&expected), "speed {speed}: {text}");
        }
    }

    #[test]
    fn test_town_sentence_closes_without_movement() {
        let race = MonsterRace {
            id: MonraceId(14),
            name: "village idiot",
            level: 0,
            speed: 110,
            ..MonsterRace::BLANK
        };
        let text = recall_seen(race.clone(), MonsterLore::new(), japanese());
        assert!(text.contains("それは町に住んでいる。"), "{text}");
        assert!(!text.contains("住み。"), "{text}");

        let text = recall_seen(race.clone(), MonsterLore::new(), options(1));
        assert!(text.contains("It lives in the town.  "), "{text}");

        let seen = MonsterLore {
            sights: 1,
            ..MonsterLore::new()
        };
        let text = recall_seen(race, seen, japanese());
        assert!(text.contains("それは町に住み、普通の速さで動いている。"), "{text}");
    }

    #[test]
    fn test_depth_sentence_closes_without_movement() {
        let race = MonsterRace {
            id: MonraceId(15),
            name: "cave bear",
            level: 4,
            speed: 110,
            ..MonsterRace::BLANK
        };
        let killed_unseen = MonsterLore {
            tkills: 1,
            ..MonsterLore::new()
        };
        let opts = LoreOptions {
            depth_in_feet: false,
            ..japanese()
        };
        let text = recall_seen(race, killed_unseen, opts);
        assert!(text.contains("それは通常地下 4 階で出現する。"), "{text}");
    }

    #[test]
    fn test_experience_for_eighth_level() {
        let race = MonsterRace {
            id: MonraceId(5),
            name: "cave orc",
            level: 10,
            exp: 30,
            kinds: KindFlags::ORC | KindFlags::EVIL,
            ..MonsterRace::BLANK
        };
        let text = recall(race, options(8));
        assert!(
            text.contains("A kill of this evil orc is worth about 37.50 points for an 8th level character.  "),
            "{text}"
        );
    }

    #[test]
    fn test_single_point_and_creature_fallback() {
        let race = MonsterRace {
            id: MonraceId(6),
            name: "rock lizard",
            level: 1,
            exp: 3,
            ..MonsterRace::BLANK
        };
        let text = recall(race, options(3));
        assert!(text.contains("A kill of this creature is worth about 1.00 point for a 3rd level character.  "), "{text}");
    }

    #[test]
    fn test_speed_and_erratic_movement() {
        let race = MonsterRace {
            id: MonraceId(7),
            name: "giant white louse",
            level: 3,
            speed: 120,
            flags: RaceFlags::RAND_50 | RaceFlags::RAND_25,
            ..MonsterRace::BLANK
        };
        let text = recall(race, options(1));
        assert!(
            text.contains("It is normally found at depths of 150 feet, and moves extremely erratically, and quickly.  "),
            "{text}"
        );
    }

    #[test]
    fn test_town_dweller_that_never_moves() {
        let race = MonsterRace {
            id: MonraceId(8),
            name: "scruffy little dog",
            level: 0,
            speed: 110,
            flags: RaceFlags::NEVER_MOVE,
            ..MonsterRace::BLANK
        };
        let text = recall(race, options(1));
        assert!(
            text.contains("It lives in the town, and moves at normal speed, but does not deign to chase intruders.  "),
            "{text}"
        );
    }

    #[test]
    fn test_depth_in_levels_japanese() {
        let race = MonsterRace {
            id: MonraceId(9),
            name: "jackal",
            level: 4,
            speed: 110,
            ..MonsterRace::BLANK
        };
        let opts = LoreOptions {
            language: Language::Japanese,
            depth_in_feet: false,
            ..options(1)
        };
        let text = recall(race, opts);
        assert!(text.contains("それは通常地下 4 階で出現し、普通の速さで動いている。"), "{text}");
    }

    #[test]
    fn test_unique_drop_of_one_great_item() {
        let race = MonsterRace {
            id: MonraceId(11),
            name: "Grip, Farmer Maggot's Dog",
            level: 2,
            speed: 120,
            flags: RaceFlags::UNIQUE | RaceFlags::ONLY_ITEM | RaceFlags::DROP_90 | RaceFlags::DROP_GREAT,
            ..MonsterRace::BLANK
        };
        let text = recall(race, options(1));
        assert!(text.contains("It may carry an exceptional object.  "), "{text}");
        assert!(text.contains("This foe is still alive!  "), "{text}");
    }
}
