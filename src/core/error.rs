//! Error type shared by the library and the binary.
//!
//! Running out of monsters is how a battle ends, not an error. Everything
//! here is either bad input (config, names) or a failing output sink.

use std::path::PathBuf;

use super::TeamId;

/// Errors surfaced while setting up or running a battle.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error("failed to write battle report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown monster kind '{0}' (expected Goblin, Troll or Orc)")]
    UnknownMonster(String),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("{team} team must have at least one monster")]
    EmptyTeam { team: TeamId },

    #[error("{team} team has {size} monsters, at most {max} allowed")]
    TeamTooLarge { team: TeamId, size: usize, max: usize },

    #[error("max_turns must be at least 1")]
    ZeroTurnLimit,
}
