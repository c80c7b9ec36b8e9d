//! Monster kinds - static per-class data.
//!
//! `MonsterKind` holds the immutable properties of a class: starting health,
//! attack power, and the special ability that shapes its turn. Per-battle
//! state (current health, team, ID) lives in [`Monster`](super::Monster).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{BattleError, BattleRng};

/// The class-specific part of a monster's behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Hits the target `attacks` times per turn.
    Flurry { attacks: u32 },
    /// Heals up to `amount` health after attacking.
    Regeneration { amount: i32 },
    /// Blocks `block` damage from every hit and returns `reflect` damage to
    /// the attacker.
    Armor { block: i32, reflect: i32 },
}

/// Starting statistics of a monster class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub max_health: i32,
    pub power: i32,
    pub ability: Ability,
}

const GOBLIN: MonsterStats = MonsterStats {
    max_health: 50,
    power: 10,
    ability: Ability::Flurry { attacks: 4 },
};

const TROLL: MonsterStats = MonsterStats {
    max_health: 80,
    power: 15,
    ability: Ability::Regeneration { amount: 5 },
};

const ORC: MonsterStats = MonsterStats {
    max_health: 63,
    power: 9,
    ability: Ability::Armor { block: 6, reflect: 3 },
};

/// One of the three monster classes.
///
/// Parses case-insensitively from its name, in code and in config files.
///
/// ```
/// use monster_arena::monsters::MonsterKind;
///
/// let kind: MonsterKind = "troll".parse().unwrap();
/// assert_eq!(kind, MonsterKind::Troll);
/// assert_eq!(kind.stats().max_health, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum MonsterKind {
    Goblin,
    Troll,
    Orc,
}

impl MonsterKind {
    /// Every kind, in picking order.
    pub const ALL: [MonsterKind; 3] = [MonsterKind::Goblin, MonsterKind::Troll, MonsterKind::Orc];

    #[must_use]
    pub const fn stats(self) -> MonsterStats {
        match self {
            MonsterKind::Goblin => GOBLIN,
            MonsterKind::Troll => TROLL,
            MonsterKind::Orc => ORC,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Goblin => "Goblin",
            MonsterKind::Troll => "Troll",
            MonsterKind::Orc => "Orc",
        }
    }

    /// Pick a kind uniformly at random.
    pub fn random(rng: &mut BattleRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MonsterKind {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BattleError::UnknownMonster(s.to_string()))
    }
}

impl TryFrom<String> for MonsterKind {
    type Error = BattleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
