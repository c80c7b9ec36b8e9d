//! Battles: teams, setup, and the combat loop.
//!
//! - [`Team`]: an ordered queue of monsters
//! - [`Scenario`]: a named matchup, including the seven classic ones
//! - [`Battle`]: runs the turn loop and announces events
//! - [`BattleOutcome`]: winner, turn count and survivors

mod engine;
mod result;
pub mod roster;
mod team;

pub use engine::{Battle, BattleBuilder};
pub use result::{BattleOutcome, BattleResult};
pub use roster::Scenario;
pub use team::Team;
