//! Battle event types.
//!
//! Events describe what happened during a battle, in order. Renderers and
//! logs are built entirely from them; no observer ever touches a `Monster`.

use serde::{Deserialize, Serialize};

use crate::battle::BattleResult;
use crate::core::{MonsterId, TeamId, TeamMap};
use crate::monsters::{MonsterKind, MonsterSnapshot};

/// Both lineups, front unit first.
pub type Lineups = TeamMap<Vec<MonsterSnapshot>>;

/// Identifies a monster inside an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combatant {
    pub team: TeamId,
    pub id: MonsterId,
    pub kind: MonsterKind,
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.team, self.kind)
    }
}

/// Discriminant of [`BattleEvent`], used for filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    BattleStarted,
    TurnStarted,
    Attacked,
    Regenerated,
    Died,
    BattleEnded,
}

/// Something that happened during a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    /// Teams are lined up; nothing has happened yet.
    BattleStarted { lineups: Lineups },

    /// A new turn begins. `turn` counts from 1.
    TurnStarted { turn: u32, lineups: Lineups },

    /// One hit landed.
    ///
    /// `damage` is the attacker's power, `dealt` is what the defender lost
    /// after blocking, and `reflected` is what the attacker lost in return.
    Attacked {
        attacker: Combatant,
        defender: Combatant,
        damage: i32,
        dealt: i32,
        reflected: i32,
    },

    /// A monster healed itself. `amount` may be zero.
    Regenerated { monster: Combatant, amount: i32 },

    /// A monster was removed from its team.
    Died { monster: Combatant },

    /// The battle is over.
    BattleEnded {
        result: BattleResult,
        turns: u32,
        lineups: Lineups,
    },
}

impl BattleEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            BattleEvent::BattleStarted { .. } => EventKind::BattleStarted,
            BattleEvent::TurnStarted { .. } => EventKind::TurnStarted,
            BattleEvent::Attacked { .. } => EventKind::Attacked,
            BattleEvent::Regenerated { .. } => EventKind::Regenerated,
            BattleEvent::Died { .. } => EventKind::Died,
            BattleEvent::BattleEnded { .. } => EventKind::BattleEnded,
        }
    }

    /// The team the event is attributed to, if any.
    ///
    /// Attacks belong to the attacker's team.
    #[must_use]
    pub fn team(&self) -> Option<TeamId> {
        match self {
            BattleEvent::Attacked { attacker, .. } => Some(attacker.team),
            BattleEvent::Regenerated { monster, .. } | BattleEvent::Died { monster } => {
                Some(monster.team)
            }
            _ => None,
        }
    }
}
