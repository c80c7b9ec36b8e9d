//! Console battle report.

use std::io::Write;

use crate::battle::BattleResult;
use crate::core::{BattleError, TeamId};
use crate::events::{BattleEvent, BattleObserver, Combatant, Lineups};
use crate::monsters::MonsterSnapshot;

const BANNER_WIDTH: usize = 119;

/// Format one lineup as `Name(health)` entries separated by spaces.
///
/// Red is listed back to front, so both front units end up next to the
/// middle of the `[ Red | ... ] ... [ ... | Blue ]` line.
///
/// ```
/// use monster_arena::core::{MonsterId, TeamId};
/// use monster_arena::monsters::{MonsterKind, MonsterSnapshot};
/// use monster_arena::render::format_lineup;
///
/// let lineup = [
///     MonsterSnapshot { id: MonsterId(0), kind: MonsterKind::Orc, health: 63, max_health: 63 },
///     MonsterSnapshot { id: MonsterId(1), kind: MonsterKind::Troll, health: 80, max_health: 80 },
/// ];
/// assert_eq!(format_lineup(TeamId::Red, &lineup), "Troll(80) Orc(63)");
/// assert_eq!(format_lineup(TeamId::Blue, &lineup), "Orc(63) Troll(80)");
/// ```
#[must_use]
pub fn format_lineup(team: TeamId, lineup: &[MonsterSnapshot]) -> String {
    let entry = |m: &MonsterSnapshot| format!("{}({})", m.kind, m.health);
    let entries: Vec<String> = match team {
        TeamId::Red => lineup.iter().rev().map(entry).collect(),
        TeamId::Blue => lineup.iter().map(entry).collect(),
    };
    entries.join(" ")
}

/// Writes a human-readable play-by-play to any [`Write`] sink.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn teams(&mut self, lineups: &Lineups) -> std::io::Result<()> {
        writeln!(
            self.out,
            "[ Red | {} ] ... [ {} | Blue ]\n",
            format_lineup(TeamId::Red, &lineups.red),
            format_lineup(TeamId::Blue, &lineups.blue),
        )
    }

    fn attack(
        &mut self,
        attacker: &Combatant,
        defender: &Combatant,
        damage: i32,
        dealt: i32,
        reflected: i32,
    ) -> std::io::Result<()> {
        write!(self.out, "{attacker} attacks {defender} for {damage} damage")?;
        if dealt != damage {
            write!(self.out, ", dealing {dealt} damage")?;
        }
        if reflected > 0 {
            write!(self.out, ", and receiving {reflected} reflected damage")?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> BattleObserver for TextRenderer<W> {
    fn on_event(&mut self, event: &BattleEvent) -> Result<(), BattleError> {
        match event {
            BattleEvent::BattleStarted { lineups } => {
                writeln!(self.out, "Battle Start!\n")?;
                self.teams(lineups)?;
            }
            BattleEvent::TurnStarted { turn, lineups } => {
                writeln!(self.out, "{}", "-".repeat(BANNER_WIDTH))?;
                writeln!(self.out, "Turn {turn}\n")?;
                self.teams(lineups)?;
            }
            BattleEvent::Attacked {
                attacker,
                defender,
                damage,
                dealt,
                reflected,
            } => self.attack(attacker, defender, *damage, *dealt, *reflected)?,
            BattleEvent::Regenerated { monster, amount } => {
                writeln!(self.out, "{monster} regenerates {amount} health")?;
            }
            BattleEvent::Died { monster } => {
                writeln!(self.out, "{monster} has died")?;
            }
            BattleEvent::BattleEnded { result, lineups, .. } => {
                match result {
                    BattleResult::Winner(team) => {
                        writeln!(self.out, "Battle over. {team} team wins!\n")?;
                    }
                    BattleResult::Draw => writeln!(self.out, "Battle over. Draw!\n")?,
                }
                self.teams(lineups)?;
                self.out.flush()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MonsterId;
    use crate::monsters::MonsterKind;

    fn render(events: &[BattleEvent]) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        for event in events {
            renderer.on_event(event).unwrap();
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    fn combatant(team: TeamId, kind: MonsterKind) -> Combatant {
        Combatant {
            team,
            id: MonsterId(0),
            kind,
        }
    }

    #[test]
    fn test_plain_attack() {
        let text = render(&[BattleEvent::Attacked {
            attacker: combatant(TeamId::Red, MonsterKind::Goblin),
            defender: combatant(TeamId::Blue, MonsterKind::Troll),
            damage: 10,
            dealt: 10,
            reflected: 0,
        }]);
        assert_eq!(text, "Red Goblin attacks Blue Troll for 10 damage\n");
    }

    #[test]
    fn test_blocked_attack() {
        let text = render(&[BattleEvent::Attacked {
            attacker: combatant(TeamId::Blue, MonsterKind::Goblin),
            defender: combatant(TeamId::Red, MonsterKind::Orc),
            damage: 10,
            dealt: 4,
            reflected: 3,
        }]);
        assert_eq!(
            text,
            "Blue Goblin attacks Red Orc for 10 damage, dealing 4 damage, \
             and receiving 3 reflected damage\n"
        );
    }

    #[test]
    fn test_heal_and_death() {
        let troll = combatant(TeamId::Blue, MonsterKind::Troll);
        let text = render(&[
            BattleEvent::Regenerated { monster: troll, amount: 0 },
            BattleEvent::Died { monster: troll },
        ]);
        assert_eq!(text, "Blue Troll regenerates 0 health\nBlue Troll has died\n");
    }

    #[test]
    fn test_turn_banner() {
        let text = render(&[BattleEvent::TurnStarted {
            turn: 12,
            lineups: Lineups::default(),
        }]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0].len(), BANNER_WIDTH);
        assert!(lines[0].chars().all(|c| c == '-'));
        assert_eq!(lines[1], "Turn 12");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "[ Red |  ] ... [  | Blue ]");
    }

    #[test]
    fn test_draw() {
        let text = render(&[BattleEvent::BattleEnded {
            result: BattleResult::Draw,
            turns: 4,
            lineups: Lineups::default(),
        }]);
        assert!(text.starts_with("Battle over. Draw!\n\n"));
    }
}
