//! Monster recall: knowledge gating, classifiers and the prose assembler

pub mod combat;
mod counters;
mod display;
mod fragment;
mod knowledge;
pub mod magic;
mod recall;
pub mod sink;
pub mod status;

pub use counters::{LoreBook, MonsterLore, UNSEEN};
pub use fragment::{Fragment, FragmentList};
pub use knowledge::{LoreMode, LoreSnapshot};
pub use recall::{RecallContext, compile_lore, recall_text};
pub use sink::{LoreSink, PlainTextSink, RecordingSink, SpoilerFileSink};
