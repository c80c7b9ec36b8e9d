//! Observers that turn battle events into output.
//!
//! - [`TextRenderer`]: the console play-by-play
//! - [`JsonLinesRenderer`]: one JSON object per event
//! - [`BattleLog`]: in-memory record with aggregate queries

mod json;
mod log;
mod text;

pub use json::JsonLinesRenderer;
pub use log::{BattleLog, BattleSummary};
pub use text::{format_lineup, TextRenderer};
