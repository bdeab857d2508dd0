//! The round engine: public operations over an exclusively owned state.
//!
//! Every operation validates first and mutates second, so a rejected
//! call returns an error with the state untouched. Successful calls
//! return the events they caused, in order.

use crate::core::{DuelConfig, DuelError, GameRng, Party, Result};
use crate::items::{grant_items, ItemEffectResolver};
use crate::magazine::Shell;

use super::{DuelEvent, EventBatch, NarrativeCategory, PublicState, RestrictedView, RoundState, TurnController};

/// Drives one duel.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: DuelConfig,
    state: RoundState,
    shell_rng: GameRng,
    item_rng: GameRng,
    round_rng: GameRng,
}

impl RoundEngine {
    /// A fresh engine. Call `start_round` before shooting.
    pub fn new(config: DuelConfig, seed: u64) -> Result<Self> {
        let health = config.max_health;
        Self::from_state(config, RoundState::new(health), seed)
    }

    /// An engine over a pre-built table.
    ///
    /// The state is used as given, including its magazine order; random
    /// draws only happen on later loads and round starts.
    pub fn from_state(config: DuelConfig, state: RoundState, seed: u64) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::new(seed);
        Ok(Self {
            config,
            state,
            shell_rng: rng.for_context("shells"),
            item_rng: rng.for_context("items"),
            round_rng: rng.for_context("round"),
        })
    }

    #[must_use]
    pub fn config(&self) -> &DuelConfig {
        &self.config
    }

    #[must_use]
    pub fn turn(&self) -> Party {
        self.state.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Party> {
        self.state.winner
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// Full table state for rendering.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState::project(&self.state)
    }

    /// The projection a decision policy for `party` may consume.
    #[must_use]
    pub fn restricted_view(&self, party: Party) -> RestrictedView {
        RestrictedView::project(&self.state, party, self.config.max_health)
    }

    /// Begin a new round: fresh shared health, cleared flags, Player first.
    pub fn start_round(&mut self) -> Result<EventBatch> {
        self.ensure_running()?;

        let state = &mut self.state;
        state.round += 1;
        let health = self
            .round_rng
            .gen_range_inclusive(self.config.min_health, self.config.max_health);
        for (_, combatant) in state.combatants.iter_mut() {
            combatant.health = health;
            combatant.items.clear();
            combatant.handcuffed = false;
            combatant.knowledge = None;
        }
        state.double_damage_pending = false;
        state.turn = Party::Player;

        tracing::debug!(round = state.round, health, "round started");
        let mut events = EventBatch::new();
        events.narrative(format!("--- ROUND {} ---", state.round), NarrativeCategory::System);
        self.load(&mut events);
        Ok(events)
    }

    /// Fire the front shell at `target`.
    pub fn shoot(&mut self, shooter: Party, target: Party) -> Result<EventBatch> {
        self.ensure_running()?;
        if self.state.magazine().is_empty() {
            return Err(self.reject(DuelError::EmptyMagazine));
        }
        self.ensure_turn(shooter)?;

        let mut events = EventBatch::new();
        let shell = self.state.draw_shell()?;
        let damage = if self.state.double_damage_pending { 2 } else { 1 };
        self.state.double_damage_pending = false;
        let is_live = shell == Shell::Live;

        events.narrative(format!("{shooter} aims at {target}."), shooter.into());
        events.push(DuelEvent::ShotFired {
            shooter,
            target,
            is_live,
            damage,
        });
        tracing::debug!(%shooter, %target, is_live, damage, "shot fired");

        if is_live {
            events.narrative("BOOM!", NarrativeCategory::System);
            let victim = &mut self.state.combatants[target];
            victim.health = victim.health.saturating_sub(damage);
            if victim.is_eliminated() {
                self.finish(target.other(), &mut events);
                return Ok(events);
            }
            TurnController::hand_over(&mut self.state, shooter.other(), &mut events);
        } else {
            events.narrative("Click.", NarrativeCategory::System);
            if target == shooter {
                events.narrative(format!("{shooter} gets another turn."), NarrativeCategory::System);
            } else {
                TurnController::hand_over(&mut self.state, shooter.other(), &mut events);
            }
        }

        if self.state.magazine().is_empty() {
            self.load(&mut events);
        }
        Ok(events)
    }

    /// Use the item at `index` in `user`'s list. Never ends the turn.
    ///
    /// Turn ownership is checked for the Player only; whoever drives the
    /// Opponent policy gates its timing. Like `shoot`, fails with
    /// `EmptyMagazine` before the first `start_round`.
    pub fn use_item(&mut self, user: Party, index: usize) -> Result<EventBatch> {
        self.ensure_running()?;
        if self.state.magazine().is_empty() {
            return Err(self.reject(DuelError::EmptyMagazine));
        }
        if user == Party::Player {
            self.ensure_turn(user)?;
        }

        let mut effects = EventBatch::new();
        let outcome = ItemEffectResolver::apply(&mut self.state, user, index, &self.config, &mut effects)
            .map_err(|err| self.reject(err))?;

        let mut events = EventBatch::new();
        events.narrative(format!("{user} uses {}.", outcome.item), user.into());
        events.extend(effects);
        events.push(DuelEvent::ItemUsed {
            user,
            item: outcome.item,
            revealed: outcome.revealed,
        });
        tracing::debug!(%user, item = %outcome.item, "item used");

        if self.state.magazine().is_empty() {
            self.load(&mut events);
        }
        Ok(events)
    }

    fn load(&mut self, events: &mut EventBatch) {
        let summary = self
            .state
            .magazine_mut()
            .load(&mut self.shell_rng, &self.config);
        self.state.clear_knowledge();
        grant_items(&mut self.state, &mut self.item_rng, &self.config);

        tracing::debug!(lives = summary.lives, blanks = summary.blanks, "magazine loaded");
        events.narrative(
            format!(
                "The opponent inserts {} live and {} blank shells.",
                summary.lives, summary.blanks
            ),
            NarrativeCategory::System,
        );
        events.push(DuelEvent::Loaded {
            lives: summary.lives,
            blanks: summary.blanks,
        });
    }

    fn finish(&mut self, winner: Party, events: &mut EventBatch) {
        self.state.winner = Some(winner);
        tracing::debug!(%winner, "game over");
        events.narrative(format!("{} DIED.", winner.other()), winner.into());
        events.push(DuelEvent::GameOver { winner });
    }

    fn ensure_running(&self) -> Result<()> {
        if self.state.is_over() {
            return Err(self.reject(DuelError::GameAlreadyOver));
        }
        Ok(())
    }

    fn ensure_turn(&self, party: Party) -> Result<()> {
        if self.state.turn != party {
            return Err(self.reject(DuelError::InvalidTurn { party }));
        }
        Ok(())
    }

    fn reject(&self, err: DuelError) -> DuelError {
        tracing::warn!(error = %err, turn = %self.state.turn, "operation rejected");
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Item;
    use crate::magazine::Magazine;
    use smallvec::smallvec;

    fn engine_with(shells: Vec<Shell>) -> RoundEngine {
        let state = RoundState::new(4).with_magazine(Magazine::from_shells(shells));
        RoundEngine::from_state(DuelConfig::default(), state, 42).unwrap()
    }

    #[test]
    fn test_new_engine_needs_round() {
        let mut engine = RoundEngine::new(DuelConfig::default(), 1).unwrap();
        assert_eq!(engine.shoot(Party::Player, Party::Opponent), Err(DuelError::EmptyMagazine));

        let events = engine.start_round().unwrap();
        assert_eq!(engine.round(), 1);
        assert!(events.iter().any(|e| matches!(e, DuelEvent::Loaded { .. })));
        assert_eq!(events.messages().next(), Some("--- ROUND 1 ---"));

        let public = engine.public_state();
        assert_eq!(public.turn, Party::Player);
        assert!((2..=4).contains(&public.health[Party::Player]));
        assert_eq!(public.health[Party::Player], public.health[Party::Opponent]);
        assert!(public.live_left >= 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DuelConfig::default().with_shells(4, 2);
        assert!(matches!(RoundEngine::new(config, 1), Err(DuelError::InvalidConfig(_))));
    }

    #[test]
    fn test_live_hit_passes_turn() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Blank]);
        let events = engine.shoot(Party::Player, Party::Opponent).unwrap();

        assert_eq!(engine.public_state().health[Party::Opponent], 3);
        assert_eq!(engine.turn(), Party::Opponent);
        assert_eq!(
            events.transitions().next(),
            Some(&DuelEvent::ShotFired {
                shooter: Party::Player,
                target: Party::Opponent,
                is_live: true,
                damage: 1,
            })
        );
    }

    #[test]
    fn test_wrong_shooter_rejected() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Blank]);
        assert_eq!(
            engine.shoot(Party::Opponent, Party::Player),
            Err(DuelError::InvalidTurn { party: Party::Opponent })
        );
        assert_eq!(engine.public_state().shells_remaining, 2);
    }

    #[test]
    fn test_saw_doubles_then_clears() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Live, Shell::Blank]);
        engine.state.combatants[Party::Player].items = smallvec![Item::Saw];

        engine.use_item(Party::Player, 0).unwrap();
        assert!(engine.public_state().double_damage_pending);
        assert_eq!(engine.turn(), Party::Player);

        engine.shoot(Party::Player, Party::Opponent).unwrap();
        let public = engine.public_state();
        assert_eq!(public.health[Party::Opponent], 2);
        assert!(!public.double_damage_pending);
    }

    #[test]
    fn test_saw_cleared_by_blank() {
        let mut engine = engine_with(vec![Shell::Blank, Shell::Live]);
        engine.state.double_damage_pending = true;

        engine.shoot(Party::Player, Party::Player).unwrap();
        assert!(!engine.public_state().double_damage_pending);
    }

    #[test]
    fn test_lethal_shot_ends_game() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Live]);
        engine.state.combatants[Party::Player].health = 1;

        let events = engine.shoot(Party::Player, Party::Player).unwrap();

        assert_eq!(engine.winner(), Some(Party::Opponent));
        assert_eq!(engine.public_state().health[Party::Player], 0);
        assert!(events.iter().any(|e| *e == DuelEvent::GameOver { winner: Party::Opponent }));
        assert_eq!(engine.shoot(Party::Player, Party::Opponent), Err(DuelError::GameAlreadyOver));
        assert_eq!(engine.use_item(Party::Opponent, 0), Err(DuelError::GameAlreadyOver));
        assert_eq!(engine.start_round(), Err(DuelError::GameAlreadyOver));
    }

    #[test]
    fn test_overkill_clamps_at_zero() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Blank]);
        engine.state.combatants[Party::Opponent].health = 1;
        engine.state.double_damage_pending = true;

        engine.shoot(Party::Player, Party::Opponent).unwrap();
        assert_eq!(engine.public_state().health[Party::Opponent], 0);
        assert_eq!(engine.winner(), Some(Party::Player));
    }

    #[test]
    fn test_empty_magazine_reloads_after_shot() {
        let mut engine = engine_with(vec![Shell::Blank]);
        let events = engine.shoot(Party::Player, Party::Opponent).unwrap();

        assert!(events.iter().any(|e| matches!(e, DuelEvent::Loaded { .. })));
        let public = engine.public_state();
        assert!(public.shells_remaining >= 2);
        assert!(!public.items[Party::Player].is_empty());
        assert_eq!(public.turn, Party::Opponent);
    }

    #[test]
    fn test_beer_emptying_magazine_reloads() {
        let mut engine = engine_with(vec![Shell::Live]);
        engine.state.combatants[Party::Player].items = smallvec![Item::Beer];

        let events = engine.use_item(Party::Player, 0).unwrap();

        let transitions: Vec<_> = events.transitions().collect();
        assert_eq!(
            transitions[0],
            &DuelEvent::ItemUsed { user: Party::Player, item: Item::Beer, revealed: Some(Shell::Live) }
        );
        assert!(matches!(transitions[1], DuelEvent::Loaded { .. }));
        assert_eq!(events.messages().next(), Some("PLAYER uses BEER."));
    }

    #[test]
    fn test_player_item_off_turn_rejected() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Blank]).with_turn_for_test(Party::Opponent);
        engine.state.combatants[Party::Player].items = smallvec![Item::Saw];

        assert_eq!(
            engine.use_item(Party::Player, 0),
            Err(DuelError::InvalidTurn { party: Party::Player })
        );
        assert_eq!(engine.public_state().items[Party::Player].len(), 1);
    }

    #[test]
    fn test_invalid_item_index() {
        let mut engine = engine_with(vec![Shell::Live, Shell::Blank]);
        assert_eq!(
            engine.use_item(Party::Player, 0),
            Err(DuelError::InvalidItemIndex { party: Party::Player, index: 0, len: 0 })
        );
    }

    #[test]
    fn test_item_before_first_round_rejected() {
        let mut engine = RoundEngine::new(DuelConfig::default(), 5).unwrap();
        engine.state.combatants[Party::Player].items = smallvec![Item::Cigarette];
        let before = engine.public_state();

        assert_eq!(engine.use_item(Party::Player, 0), Err(DuelError::EmptyMagazine));
        assert_eq!(engine.public_state(), before);
        assert_eq!(engine.round(), 0);
        assert_eq!(engine.public_state().shells_remaining, 0);
    }

    impl RoundEngine {
        fn with_turn_for_test(mut self, turn: Party) -> Self {
            self.state.turn = turn;
            self
        }
    }
}
