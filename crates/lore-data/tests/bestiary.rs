//! Recall of the bundled races

use lore_core::grammar::Language;
use lore_core::lore::{LoreBook, LoreMode, RecallContext, recall_text};
use lore_core::monster::MonraceId;
use lore_core::player::PlayerClass;
use lore_core::world::LoreOptions;
use lore_data::{find_race, race_table};

fn full(id: u16, options: LoreOptions) -> String {
    let races = race_table();
    let book = LoreBook::new();
    let ctx = RecallContext::new(&races, &book, options);
    recall_text(&ctx, MonraceId(id), LoreMode::FullKnowledge)
}

#[test]
fn test_every_race_renders() {
    let races = race_table();
    let book = LoreBook::new();
    for language in [Language::English, Language::Japanese] {
        let options = LoreOptions {
            language,
            ..LoreOptions::default()
        };
        let ctx = RecallContext::new(&races, &book, options);
        for race in races.iter() {
            for mode in [LoreMode::Normal, LoreMode::FullKnowledge, LoreMode::Debug] {
                let text = recall_text(&ctx, race.id, mode);
                assert!(text.ends_with('\n'), "{} {mode}: {text}", race.name);
                assert!(!text.contains('{'), "unfilled template in {}: {text}", race.name);
            }
        }
    }
}

#[test]
fn test_escort_composition() {
    let text = full(131, LoreOptions::default());
    assert!(
        text.contains("He usually appears with escorts.  These escorts at the least contain 2d3 Snagas and a Cave orc.  "),
        "{text}"
    );
}

#[test]
fn test_escorts_unlisted_until_seen() {
    let races = race_table();
    let mut book = LoreBook::new();
    book.get_mut(MonraceId(131)).sights = 1;
    let ctx = RecallContext::new(&races, &book, LoreOptions::default());
    let text = recall_text(&ctx, MonraceId(131), LoreMode::Normal);
    assert!(text.contains("He usually appears with escorts.  "), "{text}");
    assert!(!text.contains("These escorts"), "{text}");

    book.get_mut(MonraceId(118)).sights = 4;
    let ctx = RecallContext::new(&races, &book, LoreOptions::default());
    let text = recall_text(&ctx, MonraceId(131), LoreMode::Normal);
    assert!(text.contains("These escorts at the least contain 2d3 Snagas.  "), "{text}");
}

#[test]
fn test_evolution_names_next_race() {
    let text = full(163, LoreOptions::default());
    assert!(
        text.contains("It will evolve into Young red dragon when it gets enough experience.  "),
        "{text}"
    );
    let text = full(480, LoreOptions::default());
    assert!(text.contains("He won't evolve.  "), "{text}");
}

#[test]
fn test_archer_launches_arrows() {
    let text = full(320, LoreOptions::default());
    assert!(text.contains("He may fire an arrow (Power:4d8); 1 time in 25.  "), "{text}");
    assert!(text.contains("He can hit to attack with damage 1d9, and hit to attack with damage 1d9.  "), "{text}");
}

#[test]
fn test_population_remaining() {
    let text = full(480, LoreOptions::default());
    assert!(text.contains("9 of the Ringwraiths are still alive.  "), "{text}");

    let races = race_table();
    let mut book = LoreBook::new();
    let Some(wraith) = races.get(MonraceId(480)) else {
        panic!("ringwraith missing");
    };
    let lore = book.get_mut(MonraceId(480));
    lore.record_sighting();
    for _ in 0..9 {
        lore.record_kill(wraith, true);
    }
    let ctx = RecallContext::new(&races, &book, LoreOptions::default());
    let text = recall_text(&ctx, MonraceId(480), LoreMode::Normal);
    assert!(text.contains("You have killed at least 9 of these creatures.  All of the Ringwraiths have been slain.  "), "{text}");
}

#[test]
fn test_ninja_sees_darkness_as_light() {
    let races = race_table();
    let book = LoreBook::new();
    let plain = recall_text(
        &RecallContext::new(&races, &book, LoreOptions::default()),
        MonraceId(230),
        LoreMode::FullKnowledge,
    );
    assert!(plain.contains("create darkness"), "{plain}");

    // The priest is hurt by light, so even a ninja sees darkness
    let ninja = LoreOptions {
        class: PlayerClass::Ninja,
        ..LoreOptions::default()
    };
    let text = recall_text(&RecallContext::new(&races, &book, ninja), MonraceId(230), LoreMode::FullKnowledge);
    assert!(text.contains("create darkness"), "{text}");
}

#[test]
fn test_kingpin_in_japanese() {
    let races = race_table();
    let mut book = LoreBook::new();
    book.get_mut(MonraceId::SERPENT).sights = 1;
    let options = LoreOptions {
        language: Language::Japanese,
        ..LoreOptions::default()
    };
    let ctx = RecallContext::new(&races, &book, options);
    let text = recall_text(&ctx, MonraceId::SERPENT, LoreMode::Normal);
    assert!(text.ends_with("あなたはこのモンスターを殺したいという強い欲望を感じている...\n"), "{text}");
}

#[test]
fn test_find_race_by_name() {
    assert_eq!(find_race("JACKAL").map(|r| r.id), Some(MonraceId(24)));
}
