//! Monster classes and their combat rules.
//!
//! - [`MonsterKind`]: Goblin, Troll or Orc, with fixed stats
//! - [`Monster`]: a unit in a battle, with current health
//!
//! ## Turn scripts
//!
//! | Kind   | Health | Power | Turn                                   |
//! |--------|-------:|------:|----------------------------------------|
//! | Goblin | 50     | 10    | hits four times                        |
//! | Troll  | 80     | 15    | hits once, then regenerates 5 health   |
//! | Orc    | 63     | 9     | hits once; blocks 6 and reflects 3     |

mod kind;
mod monster;

pub use kind::{Ability, MonsterKind, MonsterStats};
pub use monster::{Monster, MonsterSnapshot};
