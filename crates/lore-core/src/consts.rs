//! Engine-wide constants

/// Number of melee blow slots per race
pub const MAX_BLOWS: usize = 4;

/// Maximum number of reinforcement (escort) entries per race
pub const MAX_REINFORCEMENTS: usize = 6;

/// Speed value of a normal-speed monster
pub const STANDARD_SPEED: i16 = 110;

/// Saturation value of the byte-sized lore counters
pub const MAX_UCHAR: u8 = 255;

/// Casting-rate above which the exact spell frequency is shown
pub const EXACT_FREQUENCY_THRESHOLD: u8 = 100;
