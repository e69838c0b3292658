//! Batch spoiler dump: the debug recall of every race, in one text file

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::lore::{LoreBook, LoreMode, RecallContext, SpoilerFileSink, compile_lore};
use crate::monster::{MonsterRace, RaceTable};
use crate::world::LoreOptions;

/// Spoiler dump errors
#[derive(Debug, Error)]
pub enum SpoilerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No monster races to dump")]
    Empty,
}

/// Races in spoiler order: shallowest first, ties by index
pub fn spoiler_order(races: &RaceTable) -> Vec<&MonsterRace> {
    let mut order: Vec<&MonsterRace> = races.iter().collect();
    order.sort_by_key(|race| (race.level, race.id));
    order
}

/// Write the spoilers of every race to `writer`, returning it once flushed
pub fn dump_monster_spoilers<W: Write>(
    races: &RaceTable,
    options: &LoreOptions,
    writer: W,
) -> Result<W, SpoilerError> {
    if races.is_empty() {
        return Err(SpoilerError::Empty);
    }

    let book = LoreBook::new();
    let ctx = RecallContext::new(races, &book, options.clone());
    let mut sink = SpoilerFileSink::with_width(writer, options.wrap);
    sink.write_line("Monster Spoilers");
    sink.write_line("================");
    sink.write_line("");

    for race in spoiler_order(races) {
        let name = race.name_in(options.language);
        sink.write_line(&format!("=== {name} ({}) ===", race.id));
        compile_lore(&ctx, race.id, LoreMode::Debug, &mut sink);
        sink.write_line("");
    }

    let writer = sink.finish()?;
    info!(races = races.len(), language = %options.language, "spoilers written");
    Ok(writer)
}

/// Create `path` and dump every race into it
pub fn write_spoiler_file(
    races: &RaceTable,
    options: &LoreOptions,
    path: &Path,
) -> Result<(), SpoilerError> {
    let file = File::create(path)?;
    let mut writer = dump_monster_spoilers(races, options, BufWriter::new(file))?;
    writer.flush()?;
    info!(path = %path.display(), "spoiler file created");
    Ok(())
}
