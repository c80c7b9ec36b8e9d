//! Property tests for the combat rules.

use proptest::prelude::*;

use monster_arena::battle::{Battle, BattleResult};
use monster_arena::core::{MonsterId, TeamId};
use monster_arena::events::{from_fn, BattleEvent};
use monster_arena::monsters::{Monster, MonsterKind};

fn kind() -> impl Strategy<Value = MonsterKind> {
    prop_oneof![
        Just(MonsterKind::Goblin),
        Just(MonsterKind::Troll),
        Just(MonsterKind::Orc),
    ]
}

fn lineup() -> impl Strategy<Value = Vec<MonsterKind>> {
    prop::collection::vec(kind(), 1..8)
}

proptest! {
    /// Every fixed matchup ends on its own, long before the default limit,
    /// and the winner is the side left standing.
    #[test]
    fn battles_terminate(red in lineup(), blue in lineup()) {
        let mut battle = Battle::builder().red(red).blue(blue).build();
        let outcome = battle.run().unwrap();

        prop_assert!(!outcome.turn_limit_reached);
        match outcome.result {
            BattleResult::Winner(TeamId::Red) => {
                prop_assert!(!outcome.survivors.red.is_empty());
                prop_assert!(outcome.survivors.blue.is_empty());
            }
            // Blue also takes the turn that wipes out both sides.
            BattleResult::Winner(TeamId::Blue) => {
                prop_assert!(outcome.survivors.red.is_empty());
            }
            BattleResult::Draw => prop_assert!(false, "draw without a turn limit"),
        }
    }

    /// Survivors are above zero and never above max health; the same
    /// lineups always produce the same outcome.
    #[test]
    fn outcomes_are_deterministic(red in lineup(), blue in lineup()) {
        let run = || {
            Battle::builder()
                .red(red.clone())
                .blue(blue.clone())
                .build()
                .run()
                .unwrap()
        };
        let first = run();
        let second = run();
        prop_assert_eq!(&first, &second);

        for survivor in first.survivors.red.iter().chain(&first.survivors.blue) {
            prop_assert!(survivor.health > 0);
            prop_assert!(survivor.health <= survivor.max_health);
        }
    }

    /// Orc block arithmetic: max(0, damage - 6) taken, 3 reflected.
    #[test]
    fn orc_block_and_reflect(damage in 0i32..40, attacker in kind()) {
        let mut orc = Monster::new(MonsterId(0), TeamId::Blue, MonsterKind::Orc);
        let mut source = Monster::new(MonsterId(1), TeamId::Red, attacker);
        let mut events = Vec::new();

        orc.hurt(&mut source, damage, &mut events);

        prop_assert_eq!(orc.health(), 63 - (damage - 6).max(0));
        prop_assert_eq!(source.health(), source.max_health() - 3);
        prop_assert_eq!(events.len(), 1);
    }

    /// Regeneration never pushes a Troll above 80 health.
    #[test]
    fn troll_regeneration_is_capped(wound in 0i32..80) {
        let mut troll = Monster::new(MonsterId(0), TeamId::Red, MonsterKind::Troll);
        troll.inflict(wound);
        let mut events = Vec::new();

        let gained = troll.regenerate(&mut events);

        prop_assert_eq!(gained, wound.min(5));
        prop_assert_eq!(troll.health(), 80 - wound + wound.min(5));
        prop_assert!(troll.health() <= troll.max_health());
    }

    /// Attack events carry consistent numbers.
    #[test]
    fn attack_events_are_consistent(red in lineup(), blue in lineup()) {
        let mut bad = Vec::new();
        {
            let mut battle = Battle::builder().red(red).blue(blue).build();
            battle.events_mut().subscribe(from_fn(|e: &BattleEvent| {
                if let BattleEvent::Attacked { attacker, defender, damage, dealt, reflected } = e {
                    let ok = attacker.team != defender.team
                        && *damage == attacker.kind.stats().power
                        && *dealt <= *damage
                        && *dealt >= 0
                        && (*reflected == 0 || defender.kind == MonsterKind::Orc);
                    if !ok {
                        bad.push(e.clone());
                    }
                }
            }));
            battle.run().unwrap();
        }
        prop_assert!(bad.is_empty(), "inconsistent attacks: {:?}", bad);
    }
}
