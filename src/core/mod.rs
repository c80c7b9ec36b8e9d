//! Core types: teams, monster IDs, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod entity;
pub mod team;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{MonsterId, MonsterIdAllocator};
pub use team::{TeamId, TeamMap};
pub use rng::BattleRng;
pub use config::{BattleConfig, MatchupConfig, TeamSpec, DEFAULT_MAX_TURNS, MAX_TEAM_SIZE};
pub use error::BattleError;
