//! Recall options, read from an rc-style file
//!
//! ```text
//! # comments are skipped
//! OPTIONS=language:japanese,cheat_know
//! OPTIONS=!depth_in_feet,class:ninja,level:25,wrap:72
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grammar::Language;
use crate::lore::sink::SPOILER_WRAP;
use crate::player::{PlayerClass, Viewer};

/// Options that change what recall says and how it is laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoreOptions {
    /// Output language
    pub language: Language,

    /// Know everything about every monster
    pub cheat_know: bool,

    /// Report native depth in feet instead of dungeon levels
    pub depth_in_feet: bool,

    /// Class of the viewing character
    pub class: PlayerClass,

    /// Level of the viewing character
    pub level: u8,

    /// Wrap column for text output
    pub wrap: usize,
}

impl Default for LoreOptions {
    fn default() -> Self {
        Self {
            language: Language::English,
            cheat_know: false,
            depth_in_feet: true,
            class: PlayerClass::Warrior,
            level: 1,
            wrap: SPOILER_WRAP,
        }
    }
}

impl LoreOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            }
        }

        Ok(options)
    }

    /// Apply a single `name`, `!name` or `name:value` option
    pub fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }
        match opt.strip_prefix('!') {
            Some(name) => self.set_bool_option(name.trim(), false),
            None => self.set_bool_option(opt, true),
        }
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "cheat_know" => self.cheat_know = value,
            "depth_in_feet" => self.depth_in_feet = value,
            "language" | "class" | "level" | "wrap" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());
        match name {
            "language" | "lang" => {
                self.language = Language::from_name(value).ok_or_else(invalid)?;
            }
            "class" => {
                self.class = PlayerClass::from_name(value).ok_or_else(invalid)?;
            }
            "level" => {
                let level: u8 = value.parse().map_err(|_| invalid())?;
                if !(1..=50).contains(&level) {
                    return Err(invalid());
                }
                self.level = level;
            }
            "wrap" => {
                let wrap: usize = value.parse().map_err(|_| invalid())?;
                if wrap < 20 {
                    return Err(invalid());
                }
                self.wrap = wrap;
            }
            "cheat_know" | "depth_in_feet" => {
                let flag = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Render options back into config file form
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                name.to_string()
            } else {
                format!("!{name}")
            }
        };
        format!(
            "# Monster recall options\nOPTIONS=language:{},{},{}\nOPTIONS=class:{},level:{},wrap:{}\n",
            self.language,
            flag(self.cheat_know, "cheat_know"),
            flag(self.depth_in_feet, "depth_in_feet"),
            self.class,
            self.level,
            self.wrap,
        )
    }

    /// The viewing character these options describe
    pub fn viewer(&self) -> Viewer {
        Viewer::new(self.level, self.class)
    }
}

/// Errors from reading or writing option files
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}
