//! Game loop and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::core::{DuelConfig, GameRng, Party, PartyMap, Result};
use crate::policy::{Decision, DecisionPolicy};
use crate::round::{DuelEvent, EventBatch, RoundEngine};

/// Result of one self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelOutcome {
    /// `None` when the action cap was reached first.
    pub winner: Option<Party>,
    /// Rounds started.
    pub rounds: u32,
    /// Decisions applied.
    pub actions: usize,
    /// Magazine loads, including the first.
    pub loads: usize,
    /// Handcuff skips.
    pub skips: usize,
}

/// Aggregate over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DuelStats {
    pub games: usize,
    pub wins: PartyMap<usize>,
    pub stalled: usize,
    pub total_actions: usize,
    pub total_loads: usize,
    pub total_skips: usize,
}

impl DuelStats {
    /// Fold one game into the totals.
    pub fn record(&mut self, outcome: &DuelOutcome) {
        self.games += 1;
        match outcome.winner {
            Some(winner) => self.wins[winner] += 1,
            None => self.stalled += 1,
        }
        self.total_actions += outcome.actions;
        self.total_loads += outcome.loads;
        self.total_skips += outcome.skips;
    }

    /// Fraction of finished games won by `party`.
    #[must_use]
    pub fn win_rate(&self, party: Party) -> f64 {
        let finished = self.games - self.stalled;
        if finished == 0 {
            0.0
        } else {
            self.wins[party] as f64 / finished as f64
        }
    }

    #[must_use]
    pub fn average_actions(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_actions as f64 / self.games as f64
        }
    }
}

/// Plays engines to completion.
#[derive(Clone, Debug)]
pub struct DuelRunner {
    config: DuelConfig,
    max_actions: usize,
}

impl DuelRunner {
    #[must_use]
    pub fn new(config: DuelConfig) -> Self {
        Self {
            config,
            max_actions: 500,
        }
    }

    /// Cap on decisions per game.
    #[must_use]
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Play one game from a fresh engine.
    pub fn play(
        &self,
        player: &mut dyn DecisionPolicy,
        opponent: &mut dyn DecisionPolicy,
        seed: u64,
    ) -> Result<DuelOutcome> {
        let mut engine = RoundEngine::new(self.config.clone(), seed)?;
        let events = engine.start_round()?;
        self.play_engine(&mut engine, events, player, opponent)
    }

    /// Continue an already started engine until it ends or stalls.
    pub fn play_engine(
        &self,
        engine: &mut RoundEngine,
        opening: EventBatch,
        player: &mut dyn DecisionPolicy,
        opponent: &mut dyn DecisionPolicy,
    ) -> Result<DuelOutcome> {
        let mut outcome = DuelOutcome {
            winner: None,
            rounds: 0,
            actions: 0,
            loads: 0,
            skips: 0,
        };
        tally(&mut outcome, &opening);

        while !engine.is_over() && outcome.actions < self.max_actions {
            let turn = engine.turn();
            let view = engine.restricted_view(turn);
            let decision = match turn {
                Party::Player => player.decide(&view),
                Party::Opponent => opponent.decide(&view),
            };

            let events = match decision {
                Decision::Shoot(target) => engine.shoot(turn, target)?,
                Decision::UseItem(index) => engine.use_item(turn, index)?,
            };
            outcome.actions += 1;
            tally(&mut outcome, &events);
        }

        outcome.winner = engine.winner();
        outcome.rounds = engine.round();
        if outcome.winner.is_none() {
            tracing::warn!(actions = outcome.actions, "duel stalled at action cap");
        }
        Ok(outcome)
    }

    /// Play `games` games with seeds forked from `seed`.
    pub fn run_many(
        &self,
        games: usize,
        seed: u64,
        player: &mut dyn DecisionPolicy,
        opponent: &mut dyn DecisionPolicy,
    ) -> Result<DuelStats> {
        let mut master = GameRng::new(seed);
        let mut stats = DuelStats::default();
        for game in 0..games {
            let game_seed = master.fork().seed();
            let outcome = self.play(player, opponent, game_seed)?;
            tracing::debug!(game, winner = ?outcome.winner, actions = outcome.actions, "game finished");
            stats.record(&outcome);
        }
        tracing::info!(
            games,
            player = player.name(),
            opponent = opponent.name(),
            player_wins = stats.wins[Party::Player],
            opponent_wins = stats.wins[Party::Opponent],
            stalled = stats.stalled,
            "self-play finished"
        );
        Ok(stats)
    }
}

fn tally(outcome: &mut DuelOutcome, events: &EventBatch) {
    for event in events.iter() {
        match event {
            DuelEvent::Loaded { .. } => outcome.loads += 1,
            DuelEvent::TurnSkipped { .. } => outcome.skips += 1,
            _ => {}
        }
    }
}
