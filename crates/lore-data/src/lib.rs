//! lore-data: Static monster race data for the recall engine
//!
//! A small bestiary covering every branch recall can take: town dwellers,
//! breeders, escorts, casters, archers, uniques, population-capped races,
//! evolution chains and the special races the recall handles by identity.

pub mod races;

pub use races::{MONSTER_RACES, find_race, get_race, num_races, race_table};
