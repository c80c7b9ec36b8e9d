//! Battle results.

use serde::{Deserialize, Serialize};

use crate::core::TeamId;
use crate::events::Lineups;

/// Result of a finished battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    /// The other team ran out of monsters. Blue also takes a turn in which
    /// both teams run out.
    Winner(TeamId),
    /// The turn limit was reached with both teams standing.
    Draw,
}

impl BattleResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        matches!(self, BattleResult::Winner(t) if *t == team)
    }

    #[must_use]
    pub fn winner(&self) -> Option<TeamId> {
        match self {
            BattleResult::Winner(team) => Some(*team),
            BattleResult::Draw => None,
        }
    }
}

/// Everything a caller needs to know once `Battle::run` returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: BattleResult,

    /// Turns played.
    pub turns: u32,

    /// Set when the battle was cut off by `max_turns`.
    pub turn_limit_reached: bool,

    /// Remaining lineups, front first.
    pub survivors: Lineups,
}
