//! lore-save: Save/restore of monster lore counters
//!
//! The counters outlive any single character, so they live in their own
//! file next to the other local data of the viewer.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use lore_core::lore::LoreBook;

/// Current lore file format version
pub const LORE_VERSION: u32 = 1;

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Lore file not found")]
    NotFound,

    #[error("Incompatible lore version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid lore file header")]
    InvalidHeader,
}

/// Lore file header for versioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreHeader {
    /// Magic identifier
    pub magic: String,
    /// File format version
    pub version: u32,
    /// Races with any recorded knowledge
    pub races_known: usize,
    /// Seconds since the epoch at save time
    pub timestamp: u64,
}

impl LoreHeader {
    const MAGIC: &'static str = "MLOR";

    pub fn new(book: &LoreBook) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: LORE_VERSION,
            races_known: book.known_races().len(),
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != LORE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: LORE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Complete lore file structure
#[derive(Serialize)]
struct LoreFileRef<'a> {
    header: LoreHeader,
    book: &'a LoreBook,
}

#[derive(Deserialize)]
struct LoreFile {
    header: LoreHeader,
    book: LoreBook,
}

/// Write the counters to `path`
pub fn save_lore(book: &LoreBook, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let file = LoreFileRef {
        header: LoreHeader::new(book),
        book,
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &file)?;
    info!(path = %path.display(), races = file.header.races_known, "lore saved");
    Ok(())
}

/// Read counters from `path`
pub fn load_lore(path: impl AsRef<Path>) -> Result<LoreBook, SaveError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let lore_file: LoreFile = serde_json::from_reader(BufReader::new(file))?;
    lore_file.header.validate()?;
    info!(path = %path.display(), races = lore_file.header.races_known, "lore loaded");
    Ok(lore_file.book)
}

/// Read counters from `path`, starting blank when there is no file yet
pub fn load_or_default(path: impl AsRef<Path>) -> Result<LoreBook, SaveError> {
    match load_lore(path.as_ref()) {
        Err(SaveError::NotFound) => {
            warn!(path = %path.as_ref().display(), "no lore file, starting blank");
            Ok(LoreBook::new())
        }
        other => other,
    }
}

/// Load only the header of a lore file
pub fn load_header(path: impl AsRef<Path>) -> Result<LoreHeader, SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let lore_file: LoreFile = serde_json::from_reader(BufReader::new(file))?;
    lore_file.header.validate()?;
    Ok(lore_file.header)
}

/// Delete a lore file
pub fn delete_lore(path: impl AsRef<Path>) -> Result<(), SaveError> {
    std::fs::remove_file(path)?;
    Ok(())
}

/// Default location of the lore file
pub fn default_lore_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("monrecall");
    std::fs::create_dir_all(&path).ok();
    path.push("lore.json");
    path
}
