//! Team setup: turning lineup specs into teams, and the classic scenarios.

use super::engine::Battle;
use super::team::Team;
use crate::core::{
    BattleConfig, BattleError, BattleRng, MatchupConfig, MonsterIdAllocator, TeamMap, TeamSpec,
};
use crate::monsters::MonsterKind;

/// Resolve a spec to concrete kinds, drawing random picks from `rng`.
pub fn lineup(spec: &TeamSpec, rng: &mut BattleRng) -> Vec<MonsterKind> {
    match spec {
        TeamSpec::Fixed(kinds) => kinds.clone(),
        TeamSpec::Random { random } => (0..*random).map(|_| MonsterKind::random(rng)).collect(),
    }
}

/// Build both teams. IDs go to Red's lineup first, then Blue's.
///
/// Each side draws from its own context stream of `rng`, so the size of
/// one random team never changes what the other team rolls.
pub fn assemble(specs: &TeamMap<TeamSpec>, rng: &BattleRng) -> TeamMap<Team> {
    let mut ids = MonsterIdAllocator::new();
    TeamMap::new(|team| {
        let mut stream = rng.for_context(team.key());
        let kinds = lineup(&specs[team], &mut stream);
        tracing::trace!(team = %team, ?kinds, "lineup assembled");
        Team::from_kinds(team, kinds, &mut ids)
    })
}

/// A named matchup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub specs: TeamMap<TeamSpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, red: TeamSpec, blue: TeamSpec) -> Self {
        Self {
            name: name.into(),
            specs: TeamMap { red, blue },
        }
    }

    /// The seven matchups played by default, in order.
    #[must_use]
    pub fn classic() -> Vec<Scenario> {
        use MonsterKind::{Goblin, Orc, Troll};
        use TeamSpec as S;

        vec![
            Scenario::new("goblin-vs-troll", S::fixed([Goblin]), S::fixed([Troll])),
            Scenario::new("goblin-vs-two-trolls", S::fixed([Goblin]), S::fixed([Troll, Troll])),
            Scenario::new("troll-vs-orc", S::fixed([Troll]), S::fixed([Orc])),
            Scenario::new("troll-vs-two-orcs", S::fixed([Troll]), S::fixed([Orc, Orc])),
            Scenario::new("orc-vs-goblin", S::fixed([Orc]), S::fixed([Goblin])),
            Scenario::new("orc-vs-two-goblins", S::fixed([Orc]), S::fixed([Goblin, Goblin])),
            Scenario::new("random-four-vs-four", S::random(4), S::random(4)),
        ]
    }

    /// Look up a classic scenario by name.
    pub fn find_classic(name: &str) -> Result<Scenario, BattleError> {
        Self::classic()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BattleError::UnknownScenario(name.to_string()))
    }

    /// Set up a battle for this scenario.
    #[must_use]
    pub fn battle<'a>(&self, config: BattleConfig) -> Battle<'a> {
        self.specs
            .iter()
            .fold(Battle::builder().config(config), |builder, (team, spec)| {
                builder.team(team, spec.clone())
            })
            .build()
    }
}

impl From<&MatchupConfig> for Scenario {
    fn from(matchup: &MatchupConfig) -> Self {
        Scenario::new(matchup.name.clone(), matchup.red.clone(), matchup.blue.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TeamId;

    #[test]
    fn test_classic_lineups() {
        let classic = Scenario::classic();
        assert_eq!(classic.len(), 7);
        assert_eq!(classic[0].name, "goblin-vs-troll");
        assert_eq!(
            classic[1].specs.blue,
            TeamSpec::fixed([MonsterKind::Troll, MonsterKind::Troll])
        );
        assert_eq!(classic[6].specs.red, TeamSpec::random(4));
    }

    #[test]
    fn test_find_classic() {
        assert_eq!(Scenario::find_classic("Troll-vs-Orc").unwrap().name, "troll-vs-orc");
        assert!(matches!(
            Scenario::find_classic("dragon-vs-knight"),
            Err(BattleError::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_random_lineup_is_seeded() {
        let specs = TeamMap::with_value(TeamSpec::random(4));
        let a = assemble(&specs, &BattleRng::new(99));
        let b = assemble(&specs, &BattleRng::new(99));

        let kinds = |teams: &TeamMap<crate::battle::Team>, team: TeamId| {
            teams[team].iter().map(|m| m.kind()).collect::<Vec<_>>()
        };
        assert_eq!(kinds(&a, TeamId::Red), kinds(&b, TeamId::Red));
        assert_eq!(kinds(&a, TeamId::Blue), kinds(&b, TeamId::Blue));
        assert_eq!(a[TeamId::Red].len(), 4);
    }

    #[test]
    fn test_team_streams_are_independent() {
        let rng = BattleRng::new(5);
        let small = TeamMap {
            red: TeamSpec::random(2),
            blue: TeamSpec::random(3),
        };
        let large = TeamMap {
            red: TeamSpec::random(10),
            blue: TeamSpec::random(3),
        };

        let a = assemble(&small, &rng);
        let b = assemble(&large, &rng);
        let blue = |teams: &TeamMap<crate::battle::Team>| {
            teams.blue.iter().map(|m| m.kind()).collect::<Vec<_>>()
        };
        assert_eq!(blue(&a), blue(&b));
    }

    #[test]
    fn test_from_matchup() {
        let matchup =
            MatchupConfig::from_json(r#"{ "name": "duel", "red": ["Orc"], "blue": ["Troll"] }"#)
                .unwrap();
        let scenario = Scenario::from(&matchup);

        let battle = scenario.battle(matchup.battle_config());
        assert_eq!(scenario.name, "duel");
        assert_eq!(battle.teams().red.front().map(|m| m.kind()), Some(MonsterKind::Orc));
    }
}
