//! # monster-arena
//!
//! A turn-based battle simulator. Two teams of monsters, Red and Blue, line
//! up and their front units trade blows until one team is wiped out.
//!
//! ## Rules
//!
//! 1. **Front units only**: each turn Red's front acts on Blue's front, then
//!    Blue's front acts on Red's.
//!
//! 2. **Fixed classes**: Goblins strike four times, Trolls regenerate after
//!    attacking, Orcs block part of every hit and reflect damage back.
//!
//! 3. **Deaths at end of turn**: a front at zero health or below is removed
//!    once both sides have acted.
//!
//! ## Architecture
//!
//! - **Event-driven output**: the combat loop never prints. It announces
//!   [`BattleEvent`]s on an [`EventBus`] and observers render them.
//!
//! - **Deterministic**: combat has no randomness. Random lineups come from a
//!   seeded ChaCha stream per team, so a seed replays a battle exactly.
//!
//! ## Modules
//!
//! - `core`: team and monster IDs, RNG, configuration, errors
//! - `monsters`: monster classes and combat rules
//! - `events`: battle events and the observer bus
//! - `battle`: teams, scenarios and the combat loop
//! - `render`: text and JSON renderers, battle log

pub mod core;
pub mod monsters;
pub mod events;
pub mod battle;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, BattleRng, MatchupConfig, MonsterId, TeamId, TeamMap, TeamSpec,
};

pub use crate::monsters::{Ability, Monster, MonsterKind, MonsterSnapshot, MonsterStats};

pub use crate::events::{
    from_fn, BattleEvent, BattleObserver, Combatant, EventBus, EventFilter, EventKind, Lineups,
    ObserverId,
};

pub use crate::battle::{Battle, BattleBuilder, BattleOutcome, BattleResult, Scenario, Team};

pub use crate::render::{BattleLog, BattleSummary, JsonLinesRenderer, TextRenderer};
