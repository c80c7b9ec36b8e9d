//! Monster identification.
//!
//! Every monster in a battle gets a unique `MonsterId`, handed out in
//! enlistment order: Red's lineup first, then Blue's. Two Goblins on the same
//! team stay distinguishable in events and logs.

use serde::{Deserialize, Serialize};

/// Unique identifier for a monster within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Hands out sequential monster IDs.
#[derive(Clone, Debug, Default)]
pub struct MonsterIdAllocator {
    next: u32,
}

impl MonsterIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn allocate(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }
}
