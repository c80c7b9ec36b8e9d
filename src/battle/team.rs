//! Team lineups.

use smallvec::SmallVec;

use crate::core::{MonsterIdAllocator, TeamId};
use crate::monsters::{Monster, MonsterKind, MonsterSnapshot};

/// Inline capacity of a lineup; the classic scenarios never exceed it.
const INLINE_LINEUP: usize = 4;

/// An ordered queue of monsters. The front unit acts and takes hits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    lineup: SmallVec<[Monster; INLINE_LINEUP]>,
}

impl Team {
    #[must_use]
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            lineup: SmallVec::new(),
        }
    }

    /// Enlist one monster of each kind, in order, with fresh IDs.
    pub fn from_kinds(
        id: TeamId,
        kinds: impl IntoIterator<Item = MonsterKind>,
        ids: &mut MonsterIdAllocator,
    ) -> Self {
        let mut team = Self::new(id);
        for kind in kinds {
            team.push(Monster::new(ids.allocate(), id, kind));
        }
        team
    }

    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Add a monster at the back of the lineup.
    pub fn push(&mut self, monster: Monster) {
        debug_assert_eq!(monster.team(), self.id, "monster enlisted in the wrong team");
        self.lineup.push(monster);
    }

    #[must_use]
    pub fn front(&self) -> Option<&Monster> {
        self.lineup.first()
    }

    pub fn front_mut(&mut self) -> Option<&mut Monster> {
        self.lineup.first_mut()
    }

    /// Remove and return the front monster.
    pub fn pop_front(&mut self) -> Option<Monster> {
        if self.lineup.is_empty() {
            None
        } else {
            Some(self.lineup.remove(0))
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lineup.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lineup.len()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.lineup.iter()
    }

    /// Current health of every member, front first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MonsterSnapshot> {
        self.lineup.iter().map(Monster::snapshot).collect()
    }
}
