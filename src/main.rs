//! Command-line entry point.
//!
//! Plays the classic scenarios by default. Battle reports go to stdout;
//! diagnostics go to stderr through `tracing`.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use monster_arena::{
    BattleConfig, BattleError, BattleLog, BattleObserver, BattleRng, JsonLinesRenderer,
    MatchupConfig, Scenario, TextRenderer,
};

/// Turn-based monster battle simulator
#[derive(Parser, Debug)]
#[command(name = "monster-arena")]
#[command(about = "Turn-based monster battle simulator")]
#[command(version)]
struct Args {
    /// Run a single classic scenario by name
    #[arg(long, value_name = "NAME", conflicts_with = "config")]
    scenario: Option<String>,

    /// Run the matchup described in a JSON file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Seed for random lineups (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Turns before a battle is called a draw
    #[arg(long)]
    max_turns: Option<u32>,

    /// Emit one JSON object per event instead of text
    #[arg(long)]
    json: bool,

    /// List the classic scenarios and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<(), BattleError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        for scenario in Scenario::classic() {
            writeln!(out, "{}", scenario.name)?;
        }
        return Ok(());
    }

    let (scenarios, mut config) = match &args.config {
        Some(path) => {
            let matchup = MatchupConfig::load_from_file(path)?;
            (vec![Scenario::from(&matchup)], matchup.battle_config())
        }
        None => {
            let scenarios = match &args.scenario {
                Some(name) => vec![Scenario::find_classic(name)?],
                None => Scenario::classic(),
            };
            (scenarios, BattleConfig::default())
        }
    };

    if let Some(max_turns) = args.max_turns {
        config.max_turns = max_turns;
    }
    config.validate()?;

    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(|| BattleRng::from_entropy().seed());
    tracing::info!(seed, "roster seed");

    for (index, scenario) in scenarios.iter().enumerate() {
        // Each scenario gets its own stream so skipping one never changes another.
        let scenario_seed = seed.wrapping_add(index as u64);
        let mut log = BattleLog::new();
        let outcome = {
            let renderer: Box<dyn BattleObserver + '_> = if args.json {
                Box::new(JsonLinesRenderer::new(&mut out))
            } else {
                Box::new(TextRenderer::new(&mut out))
            };

            let mut battle = scenario.battle(config.clone().with_seed(scenario_seed));
            battle.events_mut().subscribe(renderer);
            battle.events_mut().subscribe(&mut log);
            battle.run()?
        };

        let summary = log.summary();
        tracing::info!(
            scenario = %scenario.name,
            result = ?outcome.result,
            turns = outcome.turns,
            red_damage = summary.damage_dealt.red,
            blue_damage = summary.damage_dealt.blue,
            red_deaths = summary.deaths.red,
            blue_deaths = summary.deaths.blue,
            "battle finished"
        );
    }

    Ok(())
}
