//! Battle configuration types.
//!
//! - `BattleConfig`: knobs of a single battle (turn limit, roster seed)
//! - `TeamSpec`: how one side's lineup is composed
//! - `MatchupConfig`: a complete matchup, loadable from JSON
//!
//! ```
//! use monster_arena::core::{MatchupConfig, TeamSpec};
//! use monster_arena::monsters::MonsterKind;
//!
//! let matchup: MatchupConfig = serde_json::from_str(
//!     r#"{ "red": ["Goblin", "orc"], "blue": { "random": 3 }, "seed": 7 }"#,
//! ).unwrap();
//!
//! assert_eq!(matchup.red, TeamSpec::Fixed(vec![MonsterKind::Goblin, MonsterKind::Orc]));
//! assert_eq!(matchup.blue, TeamSpec::Random { random: 3 });
//! assert_eq!(matchup.battle_config().seed, Some(7));
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::{BattleError, TeamId};
use crate::monsters::MonsterKind;

/// Largest lineup a team may field.
pub const MAX_TEAM_SIZE: usize = 64;

/// Turn limit used when none is configured.
pub const DEFAULT_MAX_TURNS: u32 = 1000;

/// Configuration for a single battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Turns played before the battle is called a draw.
    pub max_turns: u32,

    /// Seed for random roster picks. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
        }
    }
}

impl BattleConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the roster seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.max_turns == 0 {
            return Err(BattleError::ZeroTurnLimit);
        }
        Ok(())
    }
}

/// How one side's lineup is put together.
///
/// In JSON, a fixed lineup is a list of names (front first) and a random
/// lineup is `{ "random": <count> }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TeamSpec {
    /// Exactly these monsters, front first.
    Fixed(Vec<MonsterKind>),
    /// `random` monsters picked uniformly.
    Random { random: usize },
}

/// A team spec as written in a file, before monster names are resolved.
///
/// Names are kept as strings so that a misspelled one is reported as
/// [`BattleError::UnknownMonster`] instead of a failed untagged match.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTeamSpec {
    Names(Vec<String>),
    Random { random: usize },
}

impl TryFrom<RawTeamSpec> for TeamSpec {
    type Error = BattleError;

    fn try_from(raw: RawTeamSpec) -> Result<Self, Self::Error> {
        match raw {
            RawTeamSpec::Names(names) => names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<MonsterKind>, BattleError>>()
                .map(TeamSpec::Fixed),
            RawTeamSpec::Random { random } => Ok(TeamSpec::Random { random }),
        }
    }
}

impl<'de> Deserialize<'de> for TeamSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawTeamSpec::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

impl Default for TeamSpec {
    fn default() -> Self {
        TeamSpec::Fixed(Vec::new())
    }
}

impl TeamSpec {
    /// Fixed lineup from a list of kinds.
    pub fn fixed(kinds: impl IntoIterator<Item = MonsterKind>) -> Self {
        TeamSpec::Fixed(kinds.into_iter().collect())
    }

    /// Random lineup of `count` monsters.
    #[must_use]
    pub const fn random(count: usize) -> Self {
        TeamSpec::Random { random: count }
    }

    /// Number of monsters this spec produces.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            TeamSpec::Fixed(kinds) => kinds.len(),
            TeamSpec::Random { random } => *random,
        }
    }

    /// Check the lineup size for `team`.
    pub fn validate(&self, team: TeamId) -> Result<(), BattleError> {
        let size = self.size();
        if size == 0 {
            return Err(BattleError::EmptyTeam { team });
        }
        if size > MAX_TEAM_SIZE {
            return Err(BattleError::TeamTooLarge {
                team,
                size,
                max: MAX_TEAM_SIZE,
            });
        }
        Ok(())
    }
}

fn default_name() -> String {
    "custom".to_string()
}

/// A complete matchup: both lineups plus battle settings.
///
/// Deserializing resolves monster names and validates the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchupFile")]
pub struct MatchupConfig {
    /// Label used in logs.
    pub name: String,

    pub red: TeamSpec,

    pub blue: TeamSpec,

    /// Roster seed (optional).
    pub seed: Option<u64>,

    /// Turn limit (optional).
    pub max_turns: Option<u32>,
}

/// On-disk layout of a [`MatchupConfig`].
#[derive(Deserialize)]
struct MatchupFile {
    #[serde(default = "default_name")]
    name: String,
    red: RawTeamSpec,
    blue: RawTeamSpec,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_turns: Option<u32>,
}

impl TryFrom<MatchupFile> for MatchupConfig {
    type Error = BattleError;

    fn try_from(file: MatchupFile) -> Result<Self, Self::Error> {
        let config = MatchupConfig {
            name: file.name,
            red: file.red.try_into()?,
            blue: file.blue.try_into()?,
            seed: file.seed,
            max_turns: file.max_turns,
        };
        config.validate()?;
        Ok(config)
    }
}

impl MatchupConfig {
    /// Load and validate a matchup from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, BattleError> {
        let contents = std::fs::read_to_string(path).map_err(|source| BattleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate a matchup from a JSON string.
    ///
    /// Malformed JSON is reported as [`BattleError::Json`]; a well-formed
    /// file with bad contents gets the specific error.
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        let file: MatchupFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn validate(&self) -> Result<(), BattleError> {
        self.red.validate(TeamId::Red)?;
        self.blue.validate(TeamId::Blue)?;
        self.battle_config().validate()
    }

    /// Battle settings, falling back to defaults for unset fields.
    #[must_use]
    pub fn battle_config(&self) -> BattleConfig {
        BattleConfig {
            max_turns: self.max_turns.unwrap_or(DEFAULT_MAX_TURNS),
            seed: self.seed,
        }
    }
}
