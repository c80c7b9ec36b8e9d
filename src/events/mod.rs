//! Event system for observing battles.
//!
//! The battle loop announces everything it does as a [`BattleEvent`] on an
//! [`EventBus`]. Renderers, logs and tests subscribe as [`BattleObserver`]s.
//!
//! ## Key Components
//!
//! - [`BattleEvent`]: something that happened, with its numbers
//! - [`EventFilter`]: which events a subscription wants
//! - [`EventBus`]: ordered fan-out to observers
//!
//! ## Example Usage
//!
//! ```
//! use monster_arena::battle::Battle;
//! use monster_arena::events::{from_fn, BattleEvent, EventFilter, EventKind};
//! use monster_arena::monsters::MonsterKind;
//!
//! let mut deaths = Vec::new();
//!
//! let mut battle = Battle::builder()
//!     .red([MonsterKind::Goblin])
//!     .blue([MonsterKind::Troll])
//!     .build();
//! battle.events_mut().subscribe_filtered(
//!     EventFilter::kinds([EventKind::Died]),
//!     from_fn(|e: &BattleEvent| deaths.push(e.clone())),
//! );
//! battle.run().unwrap();
//! drop(battle);
//!
//! assert_eq!(deaths.len(), 1);
//! ```

mod bus;
mod event;

pub use bus::{from_fn, BattleObserver, EventBus, EventFilter, FnObserver, ObserverId};
pub use event::{BattleEvent, Combatant, EventKind, Lineups};
