//! Self-play simulator.
//!
//! ```text
//! duel-sim --games 1000 --seed 7 --player random --opponent heuristic
//! duel-sim --config rules.toml --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use shell_duel::{DecisionPolicy, DuelConfig, DuelRunner, HeuristicPolicy, Party, PolicyThresholds, RandomPolicy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Heuristic,
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "duel-sim", about = "Run self-play duels and report win rates")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Master seed; each game forks its own.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Policy for the Player side.
    #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
    player: PolicyKind,

    /// Policy for the Opponent side.
    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    opponent: PolicyKind,

    /// Decision cap per game.
    #[arg(long, default_value_t = 500)]
    max_actions: usize,

    /// TOML file with `[rules]` and `[thresholds]` tables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print statistics as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    rules: DuelConfig,
    thresholds: PolicyThresholds,
}

fn load_config(path: Option<&PathBuf>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn build_policy(kind: PolicyKind, thresholds: &PolicyThresholds, seed: u64) -> Box<dyn DecisionPolicy> {
    match kind {
        PolicyKind::Heuristic => Box::new(HeuristicPolicy::with_thresholds(thresholds.clone())),
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shell_duel=info")))
        .init();

    let args = Args::parse();
    let file = load_config(args.config.as_ref())?;
    file.rules.validate()?;

    let mut player = build_policy(args.player, &file.thresholds, args.seed ^ 0x5EED_0001);
    let mut opponent = build_policy(args.opponent, &file.thresholds, args.seed ^ 0x5EED_0002);

    let runner = DuelRunner::new(file.rules).with_max_actions(args.max_actions);
    let stats = runner.run_many(args.games, args.seed, player.as_mut(), opponent.as_mut())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("games:          {}", stats.games);
        println!(
            "player wins:    {} ({:.1}%)",
            stats.wins[Party::Player],
            stats.win_rate(Party::Player) * 100.0
        );
        println!(
            "opponent wins:  {} ({:.1}%)",
            stats.wins[Party::Opponent],
            stats.win_rate(Party::Opponent) * 100.0
        );
        println!("stalled:        {}", stats.stalled);
        println!("avg actions:    {:.1}", stats.average_actions());
        println!("handcuff skips: {}", stats.total_skips);
    }
    Ok(())
}
