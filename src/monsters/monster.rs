//! Monster instances - per-battle state and the combat rules.
//!
//! Rule methods never talk to observers directly. They push
//! [`BattleEvent`]s into a caller-provided buffer, and the battle loop
//! forwards them to the bus once the action has resolved.

use serde::{Deserialize, Serialize};

use super::kind::{Ability, MonsterKind};
use crate::core::{MonsterId, TeamId};
use crate::events::{BattleEvent, Combatant};

/// Health and identity of a monster at one point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub health: i32,
    pub max_health: i32,
}

/// A monster taking part in a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    id: MonsterId,
    team: TeamId,
    kind: MonsterKind,
    health: i32,
}

impl Monster {
    /// Create a monster at full health.
    #[must_use]
    pub fn new(id: MonsterId, team: TeamId, kind: MonsterKind) -> Self {
        Self {
            id,
            team,
            kind,
            health: kind.stats().max_health,
        }
    }

    #[must_use]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    #[must_use]
    pub fn team(&self) -> TeamId {
        self.team
    }

    #[must_use]
    pub fn kind(&self) -> MonsterKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> i32 {
        self.kind.stats().max_health
    }

    #[must_use]
    pub fn power(&self) -> i32 {
        self.kind.stats().power
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Identity used in events.
    #[must_use]
    pub fn combatant(&self) -> Combatant {
        Combatant {
            team: self.team,
            id: self.id,
            kind: self.kind,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> MonsterSnapshot {
        MonsterSnapshot {
            id: self.id,
            kind: self.kind,
            health: self.health,
            max_health: self.max_health(),
        }
    }

    /// Take this monster's turn against `target`.
    ///
    /// The script runs in full whatever the health of either side; deaths
    /// are only settled once both fronts have acted.
    pub fn act(&mut self, target: &mut Monster, events: &mut Vec<BattleEvent>) {
        match self.kind.stats().ability {
            Ability::Flurry { attacks } => {
                for _ in 0..attacks {
                    self.hit(target, events);
                }
            }
            Ability::Regeneration { .. } => {
                self.hit(target, events);
                self.regenerate(events);
            }
            Ability::Armor { .. } => self.hit(target, events),
        }
    }

    /// Strike `target` once with full power.
    pub fn hit(&mut self, target: &mut Monster, events: &mut Vec<BattleEvent>) {
        let damage = self.power();
        target.hurt(self, damage, events);
    }

    /// Receive a hit of `damage` from `source`.
    ///
    /// Armored monsters soak part of the hit and always reflect a fixed
    /// amount back at `source`, even when the hit kills them.
    pub fn hurt(&mut self, source: &mut Monster, damage: i32, events: &mut Vec<BattleEvent>) {
        let (dealt, reflected) = match self.kind.stats().ability {
            Ability::Armor { block, reflect } => ((damage - block).max(0), reflect),
            _ => (damage, 0),
        };

        self.inflict(dealt);
        if reflected > 0 {
            source.inflict(reflected);
        }

        tracing::trace!(
            attacker = %source.id,
            defender = %self.id,
            damage,
            dealt,
            reflected,
            "hit resolved"
        );

        events.push(BattleEvent::Attacked {
            attacker: source.combatant(),
            defender: self.combatant(),
            damage,
            dealt,
            reflected,
        });
    }

    /// Heal by the class regeneration amount, capped at max health.
    ///
    /// Returns the health actually gained. A monster at zero health or below
    /// still heals and may come back above zero. Monsters without
    /// regeneration gain nothing and emit nothing.
    pub fn regenerate(&mut self, events: &mut Vec<BattleEvent>) -> i32 {
        let Ability::Regeneration { amount } = self.kind.stats().ability else {
            return 0;
        };

        let gained = amount.min(self.max_health() - self.health).max(0);
        self.health += gained;

        events.push(BattleEvent::Regenerated {
            monster: self.combatant(),
            amount: gained,
        });
        gained
    }

    /// Lose `amount` health with no further rules applied.
    pub fn inflict(&mut self, amount: i32) {
        self.health -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(id: u32, team: TeamId, kind: MonsterKind) -> Monster {
        Monster::new(MonsterId(id), team, kind)
    }

    fn attacks(events: &[BattleEvent]) -> Vec<(i32, i32, i32)> {
        events
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Attacked {
                    damage, dealt, reflected, ..
                } => Some((*damage, *dealt, *reflected)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_new_monster_at_full_health() {
        let troll = monster(0, TeamId::Blue, MonsterKind::Troll);
        assert_eq!(troll.health(), 80);
        assert_eq!(troll.max_health(), 80);
        assert_eq!(troll.power(), 15);
        assert_eq!(troll.name(), "Troll");
        assert!(!troll.is_dead());
    }

    #[test]
    fn test_goblin_attacks_four_times() {
        let mut goblin = monster(0, TeamId::Red, MonsterKind::Goblin);
        let mut troll = monster(1, TeamId::Blue, MonsterKind::Troll);
        let mut events = Vec::new();

        goblin.act(&mut troll, &mut events);

        assert_eq!(troll.health(), 40);
        assert_eq!(attacks(&events), vec![(10, 10, 0); 4]);
    }

    #[test]
    fn test_goblin_volley_continues_past_a_dead_target() {
        let mut goblin = monster(0, TeamId::Red, MonsterKind::Goblin);
        let mut troll = monster(1, TeamId::Blue, MonsterKind::Troll);
        troll.health = 15;
        let mut events = Vec::new();

        goblin.act(&mut troll, &mut events);

        assert_eq!(troll.health(), -25);
        assert_eq!(attacks(&events).len(), 4);
    }

    #[test]
    fn test_goblin_keeps_taking_reflect_while_dead() {
        let mut goblin = monster(0, TeamId::Red, MonsterKind::Goblin);
        goblin.health = 5;
        let mut orc = monster(1, TeamId::Blue, MonsterKind::Orc);
        let mut events = Vec::new();

        goblin.act(&mut orc, &mut events);

        assert_eq!(goblin.health(), -7);
        assert_eq!(orc.health(), 63 - 16);
        assert_eq!(attacks(&events), vec![(10, 4, 3); 4]);
    }

    #[test]
    fn test_orc_blocks_and_reflects() {
        let mut goblin = monster(0, TeamId::Red, MonsterKind::Goblin);
        let mut orc = monster(1, TeamId::Blue, MonsterKind::Orc);
        let mut events = Vec::new();

        goblin.hit(&mut orc, &mut events);

        assert_eq!(orc.health(), 59);
        assert_eq!(goblin.health(), 47);
        assert_eq!(attacks(&events), vec![(10, 4, 3)]);
    }

    #[test]
    fn test_orc_block_never_heals() {
        let mut attacker = monster(0, TeamId::Red, MonsterKind::Orc);
        let mut orc = monster(1, TeamId::Blue, MonsterKind::Orc);
        let mut events = Vec::new();

        orc.hurt(&mut attacker, 2, &mut events);

        assert_eq!(orc.health(), 63);
        assert_eq!(attacker.health(), 60);
        assert_eq!(attacks(&events), vec![(2, 0, 3)]);
    }

    #[test]
    fn test_orc_reflects_even_when_killed() {
        let mut troll = monster(0, TeamId::Red, MonsterKind::Troll);
        let mut orc = monster(1, TeamId::Blue, MonsterKind::Orc);
        orc.health = 5;
        let mut events = Vec::new();

        troll.hit(&mut orc, &mut events);

        assert!(orc.is_dead());
        assert_eq!(troll.health(), 77);
    }

    #[test]
    fn test_troll_hits_then_regenerates() {
        let mut troll = monster(0, TeamId::Blue, MonsterKind::Troll);
        troll.health = 60;
        let mut goblin = monster(1, TeamId::Red, MonsterKind::Goblin);
        let mut events = Vec::new();

        troll.act(&mut goblin, &mut events);

        assert_eq!(goblin.health(), 35);
        assert_eq!(troll.health(), 65);
        assert!(matches!(events.last(), Some(BattleEvent::Regenerated { amount: 5, .. })));
    }

    #[test]
    fn test_troll_regeneration_capped_at_max_health() {
        let mut troll = monster(0, TeamId::Red, MonsterKind::Troll);
        let mut events = Vec::new();

        assert_eq!(troll.regenerate(&mut events), 0);
        assert_eq!(troll.health(), 80);

        troll.health = 78;
        assert_eq!(troll.regenerate(&mut events), 2);
        assert_eq!(troll.health(), 80);

        // A zero gain is still reported
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_troll_regenerates_back_from_reflect() {
        let mut troll = monster(0, TeamId::Red, MonsterKind::Troll);
        troll.health = 2;
        let mut orc = monster(1, TeamId::Blue, MonsterKind::Orc);
        let mut events = Vec::new();

        troll.act(&mut orc, &mut events);

        // 2 - 3 reflected + 5 regenerated
        assert_eq!(troll.health(), 4);
        assert!(!troll.is_dead());
        assert!(matches!(events.last(), Some(BattleEvent::Regenerated { amount: 5, .. })));
    }

    #[test]
    fn test_non_trolls_do_not_regenerate() {
        let mut orc = monster(0, TeamId::Red, MonsterKind::Orc);
        orc.health = 10;
        let mut events = Vec::new();

        assert_eq!(orc.regenerate(&mut events), 0);
        assert_eq!(orc.health(), 10);
        assert!(events.is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut goblin = monster(3, TeamId::Red, MonsterKind::Goblin);
        goblin.inflict(12);

        let snap = goblin.snapshot();
        assert_eq!(snap.id, MonsterId(3));
        assert_eq!(snap.health, 38);
        assert_eq!(snap.max_health, 50);
        assert_eq!(goblin.combatant().team, TeamId::Red);
    }
}
