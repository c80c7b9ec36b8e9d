//! The combat loop.
//!
//! Each turn Red's front monster acts on Blue's front monster, then Blue's
//! front acts on Red's. Both always act: a front killed earlier in the turn
//! still strikes back. Dead fronts are removed at the end of the turn.
//! The battle ends when a team runs out of monsters or the turn limit hits.

use super::result::{BattleOutcome, BattleResult};
use super::roster;
use super::team::Team;
use crate::core::{BattleConfig, BattleError, BattleRng, TeamId, TeamMap, TeamSpec};
use crate::events::{BattleEvent, EventBus, Lineups};
use crate::monsters::{Monster, MonsterKind};

/// A battle between two teams, with the observers watching it.
///
/// The lifetime `'a` bounds the observers borrowed by the event bus.
#[derive(Debug)]
pub struct Battle<'a> {
    teams: TeamMap<Team>,
    config: BattleConfig,
    events: EventBus<'a>,
}

impl<'a> Battle<'a> {
    /// Create a battle from assembled teams.
    #[must_use]
    pub fn new(teams: TeamMap<Team>, config: BattleConfig) -> Self {
        Self {
            teams,
            config,
            events: EventBus::new(),
        }
    }

    /// Start building a battle from monster kinds.
    #[must_use]
    pub fn builder() -> BattleBuilder {
        BattleBuilder::default()
    }

    #[must_use]
    pub fn teams(&self) -> &TeamMap<Team> {
        &self.teams
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// The event bus; subscribe observers here before calling [`Battle::run`].
    pub fn events_mut(&mut self) -> &mut EventBus<'a> {
        &mut self.events
    }

    /// Current lineups of both teams.
    #[must_use]
    pub fn lineups(&self) -> Lineups {
        self.teams.map(|_, team| team.snapshot())
    }

    /// True once either team has no monsters left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.teams.iter().any(|(_, team)| team.is_empty())
    }

    /// Result if the battle stopped now.
    ///
    /// The opponent of the first emptied team in Red, Blue order wins, so a
    /// turn that wipes out both sides goes to Blue. With both teams standing
    /// the result is a draw.
    #[must_use]
    pub fn result(&self) -> BattleResult {
        match TeamId::ALL.into_iter().find(|&team| self.teams[team].is_empty()) {
            Some(fallen) => BattleResult::Winner(fallen.opponent()),
            None => BattleResult::Draw,
        }
    }

    /// Fight until one team is eliminated or the turn limit is reached.
    pub fn run(&mut self) -> Result<BattleOutcome, BattleError> {
        self.config.validate()?;

        let span = tracing::debug_span!(
            "battle",
            red = self.teams.red.len(),
            blue = self.teams.blue.len()
        );
        let _guard = span.enter();

        self.events.emit(&BattleEvent::BattleStarted { lineups: self.lineups() })?;

        let mut turns = 0;
        let mut turn_limit_reached = false;
        while !self.is_over() {
            if turns == self.config.max_turns {
                tracing::warn!(
                    max_turns = self.config.max_turns,
                    "turn limit reached, calling a draw"
                );
                turn_limit_reached = true;
                break;
            }
            turns += 1;
            self.play_turn(turns)?;
        }

        let result = if turn_limit_reached { BattleResult::Draw } else { self.result() };
        tracing::debug!(?result, turns, "battle over");

        let survivors = self.lineups();
        self.events.emit(&BattleEvent::BattleEnded {
            result,
            turns,
            lineups: survivors.clone(),
        })?;

        Ok(BattleOutcome {
            result,
            turns,
            turn_limit_reached,
            survivors,
        })
    }

    /// Play one turn: both fronts act in team order, then the dead are removed.
    fn play_turn(&mut self, turn: u32) -> Result<(), BattleError> {
        tracing::debug!(turn, "turn started");
        self.events.emit(&BattleEvent::TurnStarted {
            turn,
            lineups: self.lineups(),
        })?;

        let mut pending = Vec::new();
        for acting in TeamId::ALL {
            let (red, blue) = self.teams.both_mut();
            let (Some(red), Some(blue)) = (red.front_mut(), blue.front_mut()) else {
                break;
            };
            let (actor, target) = match acting {
                TeamId::Red => (red, blue),
                TeamId::Blue => (blue, red),
            };
            if actor.is_dead() {
                tracing::trace!(team = %acting, monster = %actor.id(), "dead front acts");
            }

            actor.act(target, &mut pending);
            self.events.emit_all(&pending)?;
            pending.clear();
        }

        for team in TeamId::ALL {
            let front_dead = self.teams[team].front().is_some_and(Monster::is_dead);
            if !front_dead {
                continue;
            }
            if let Some(fallen) = self.teams[team].pop_front() {
                tracing::debug!(
                    team = %team,
                    monster = %fallen.id(),
                    kind = %fallen.kind(),
                    "monster died"
                );
                self.events.emit(&BattleEvent::Died {
                    monster: fallen.combatant(),
                })?;
            }
        }

        Ok(())
    }
}

/// Builder for a [`Battle`].
///
/// ```
/// use monster_arena::battle::{Battle, BattleResult};
/// use monster_arena::core::TeamId;
/// use monster_arena::monsters::MonsterKind;
///
/// let mut battle = Battle::builder()
///     .red([MonsterKind::Goblin])
///     .blue([MonsterKind::Troll])
///     .build();
///
/// let outcome = battle.run().unwrap();
/// assert_eq!(outcome.result, BattleResult::Winner(TeamId::Red));
/// assert_eq!(outcome.turns, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BattleBuilder {
    specs: TeamMap<TeamSpec>,
    config: BattleConfig,
}

impl BattleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Red's lineup, front first.
    #[must_use]
    pub fn red(self, kinds: impl IntoIterator<Item = MonsterKind>) -> Self {
        self.team(TeamId::Red, TeamSpec::fixed(kinds))
    }

    /// Blue's lineup, front first.
    #[must_use]
    pub fn blue(self, kinds: impl IntoIterator<Item = MonsterKind>) -> Self {
        self.team(TeamId::Blue, TeamSpec::fixed(kinds))
    }

    /// Set one side from any team spec.
    #[must_use]
    pub fn team(mut self, team: TeamId, spec: TeamSpec) -> Self {
        self.specs[team] = spec;
        self
    }

    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Assemble the teams.
    ///
    /// Without a configured seed one is drawn from entropy and stored in the
    /// battle's config, so any random lineup can be replayed.
    #[must_use]
    pub fn build<'a>(mut self) -> Battle<'a> {
        let rng = self.config.seed.map_or_else(BattleRng::from_entropy, BattleRng::new);
        self.config.seed = Some(rng.seed());

        let teams = roster::assemble(&self.specs, &rng);
        Battle::new(teams, self.config)
    }
}
