//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! A battle is always fought between exactly two sides: Red and Blue.
//!
//! ## TeamMap
//!
//! Per-team data storage with O(1) access, indexable by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
///
/// Red acts first in every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamId {
    Red,
    Blue,
}

impl TeamId {
    /// Both teams, in acting order.
    pub const ALL: [TeamId; 2] = [TeamId::Red, TeamId::Blue];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            TeamId::Red => TeamId::Blue,
            TeamId::Blue => TeamId::Red,
        }
    }

    /// Name used in battle reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TeamId::Red => "Red",
            TeamId::Blue => "Blue",
        }
    }

    /// Lowercase label, used for RNG context streams and config keys.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            TeamId::Red => "red",
            TeamId::Blue => "blue",
        }
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per team.
///
/// ```
/// use monster_arena::core::{TeamId, TeamMap};
///
/// let mut kills: TeamMap<u32> = TeamMap::with_value(0);
/// kills[TeamId::Blue] += 1;
///
/// assert_eq!(kills[TeamId::Red], 0);
/// assert_eq!(kills[TeamId::Blue], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    pub red: T,
    pub blue: T,
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(TeamId) -> T) -> Self {
        let red = factory(TeamId::Red);
        let blue = factory(TeamId::Blue);
        Self { red, blue }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            red: value.clone(),
            blue: value,
        }
    }

    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        match team {
            TeamId::Red => &self.red,
            TeamId::Blue => &self.blue,
        }
    }

    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        match team {
            TeamId::Red => &mut self.red,
            TeamId::Blue => &mut self.blue,
        }
    }

    /// Mutable access to both entries at once, in (red, blue) order.
    pub fn both_mut(&mut self) -> (&mut T, &mut T) {
        (&mut self.red, &mut self.blue)
    }

    /// Iterate over (TeamId, &T) pairs in acting order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        [(TeamId::Red, &self.red), (TeamId::Blue, &self.blue)].into_iter()
    }

    /// Transform each entry, keeping the team association.
    pub fn map<U>(&self, mut f: impl FnMut(TeamId, &T) -> U) -> TeamMap<U> {
        TeamMap {
            red: f(TeamId::Red, &self.red),
            blue: f(TeamId::Blue, &self.blue),
        }
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_opponent() {
        assert_eq!(TeamId::Red.opponent(), TeamId::Blue);
        assert_eq!(TeamId::Blue.opponent(), TeamId::Red);
        assert_eq!(TeamId::Red.opponent().opponent(), TeamId::Red);
    }

    #[test]
    fn test_team_id_display() {
        assert_eq!(format!("{}", TeamId::Red), "Red");
        assert_eq!(format!("{}", TeamId::Blue), "Blue");
        assert_eq!(TeamId::Blue.key(), "blue");
    }

    #[test]
    fn test_team_map_new() {
        let map = TeamMap::new(|team| team.name().len());
        assert_eq!(map[TeamId::Red], 3);
        assert_eq!(map[TeamId::Blue], 4);
    }

    #[test]
    fn test_team_map_mutation() {
        let mut map: TeamMap<i32> = TeamMap::with_value(0);
        map[TeamId::Red] = 10;
        *map.get_mut(TeamId::Blue) += 5;

        assert_eq!(map.red, 10);
        assert_eq!(map.blue, 5);

        let (red, blue) = map.both_mut();
        std::mem::swap(red, blue);
        assert_eq!(map[TeamId::Red], 5);
    }

    #[test]
    fn test_team_map_iter_order() {
        let map = TeamMap { red: 'r', blue: 'b' };
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(TeamId::Red, &'r'), (TeamId::Blue, &'b')]);
    }

    #[test]
    fn test_team_map_map() {
        let map = TeamMap { red: 2, blue: 3 };
        let doubled = map.map(|_, v| v * 2);
        assert_eq!(doubled, TeamMap { red: 4, blue: 6 });
    }

    #[test]
    fn test_serialization() {
        let map = TeamMap { red: 1, blue: 2 };
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"red":1,"blue":2}"#);
        let deserialized: TeamMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);

        assert_eq!(serde_json::to_string(&TeamId::Red).unwrap(), r#""Red""#);
    }
}
