//! Battle log
//!
//! Records every event of a battle for post-battle queries.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::battle::BattleResult;
use crate::core::{BattleError, MonsterId, TeamId, TeamMap};
use crate::events::{BattleEvent, BattleObserver, Combatant, EventKind};

/// In-memory record of a battle.
#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    entries: Vec<BattleEvent>,
}

/// Aggregate numbers for one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleSummary {
    pub result: Option<BattleResult>,
    pub turns: u32,
    pub damage_dealt: TeamMap<i64>,
    pub reflected: TeamMap<i64>,
    pub regenerated: TeamMap<i64>,
    pub deaths: TeamMap<usize>,
}

impl BattleLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All events in order.
    #[must_use]
    pub fn entries(&self) -> &[BattleEvent] {
        &self.entries
    }

    /// Events of one kind, in order.
    pub fn filter_by_kind(&self, kind: EventKind) -> impl Iterator<Item = &BattleEvent> {
        self.entries.iter().filter(move |e| e.kind() == kind)
    }

    /// Damage `team`'s monsters dealt after blocking.
    #[must_use]
    pub fn damage_dealt(&self, team: TeamId) -> i64 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Attacked { attacker, dealt, .. } if attacker.team == team => {
                    Some(i64::from(*dealt))
                }
                _ => None,
            })
            .sum()
    }

    /// Damage `team`'s monsters took from reflection.
    #[must_use]
    pub fn reflected_damage_taken(&self, team: TeamId) -> i64 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Attacked { attacker, reflected, .. } if attacker.team == team => {
                    Some(i64::from(*reflected))
                }
                _ => None,
            })
            .sum()
    }

    /// Health `team`'s monsters regenerated.
    #[must_use]
    pub fn regenerated(&self, team: TeamId) -> i64 {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Regenerated { monster, amount } if monster.team == team => {
                    Some(i64::from(*amount))
                }
                _ => None,
            })
            .sum()
    }

    /// Monsters `team` lost, in order of death.
    #[must_use]
    pub fn deaths(&self, team: TeamId) -> Vec<Combatant> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Died { monster } if monster.team == team => Some(*monster),
                _ => None,
            })
            .collect()
    }

    /// Damage dealt per attacking monster.
    #[must_use]
    pub fn damage_by_monster(&self) -> FxHashMap<MonsterId, i64> {
        let mut totals = FxHashMap::default();
        for event in &self.entries {
            if let BattleEvent::Attacked { attacker, dealt, .. } = event {
                *totals.entry(attacker.id).or_insert(0) += i64::from(*dealt);
            }
        }
        totals
    }

    /// Result recorded by the final event, if the battle finished.
    #[must_use]
    pub fn result(&self) -> Option<BattleResult> {
        self.entries.iter().rev().find_map(|e| match e {
            BattleEvent::BattleEnded { result, .. } => Some(*result),
            _ => None,
        })
    }

    /// Last turn that started.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.entries
            .iter()
            .rev()
            .find_map(|e| match e {
                BattleEvent::TurnStarted { turn, .. } => Some(*turn),
                _ => None,
            })
            .unwrap_or(0)
    }

    #[must_use]
    pub fn summary(&self) -> BattleSummary {
        BattleSummary {
            result: self.result(),
            turns: self.turns(),
            damage_dealt: TeamMap::new(|team| self.damage_dealt(team)),
            reflected: TeamMap::new(|team| self.reflected_damage_taken(team)),
            regenerated: TeamMap::new(|team| self.regenerated(team)),
            deaths: TeamMap::new(|team| self.deaths(team).len()),
        }
    }
}

impl BattleObserver for BattleLog {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        if matches!(event, BattleEvent::BattleStarted { .. }) {
            self.clear();
        }
        self.entries.push(event.clone());
        Ok(())
    }
}
