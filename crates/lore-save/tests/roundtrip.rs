//! Lore counters survive a save and reload

use lore_core::lore::{LoreBook, LoreMode, RecallContext, recall_text};
use lore_core::monster::{AbilityFlags, MonraceId};
use lore_core::world::LoreOptions;
use lore_data::race_table;
use lore_save::{SaveError, load_header, load_lore, save_lore};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("monrecall_{}_{name}.json", std::process::id()))
}

#[test]
fn test_save_and_load() {
    let races = race_table();
    let mut book = LoreBook::new();
    let dragon = MonraceId(163);
    let Some(race) = races.get(dragon) else {
        panic!("missing race");
    };
    {
        let lore = book.get_mut(dragon);
        lore.record_sighting();
        lore.record_kill(race, true);
        lore.record_ability(AbilityFlags::BR_FIRE, true);
        lore.record_blow(0, false);
    }

    let path = temp_path("roundtrip");
    save_lore(&book, &path).unwrap();
    let loaded = load_lore(&path).unwrap();
    assert_eq!(loaded, book);
    assert_eq!(load_header(&path).unwrap().races_known, 1);

    let before = recall_text(
        &RecallContext::new(&races, &book, LoreOptions::default()),
        dragon,
        LoreMode::Normal,
    );
    let after = recall_text(
        &RecallContext::new(&races, &loaded, LoreOptions::default()),
        dragon,
        LoreMode::Normal,
    );
    assert_eq!(before, after);
    assert!(after.contains("It may breathe fire (6d10)"), "{after}");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_garbage_file_rejected() {
    let path = temp_path("garbage");
    std::fs::write(&path, "{\"header\": 3}").unwrap();
    assert!(matches!(load_lore(&path), Err(SaveError::Serialization(_))));
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_foreign_magic_rejected() {
    let path = temp_path("magic");
    std::fs::write(
        &path,
        r#"{"header":{"magic":"NHRS","version":1,"races_known":0,"timestamp":0},"book":{"entries":{}}}"#,
    )
    .unwrap();
    assert!(matches!(load_lore(&path), Err(SaveError::InvalidHeader)));
    std::fs::remove_file(&path).ok();
}
