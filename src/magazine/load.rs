//! Magazine loading and consumption.
//!
//! The shuffled sequence is never mutated after a load. Consumption
//! advances a cursor, and the live/blank counters always describe the
//! shells at or after the cursor.

use serde::{Deserialize, Serialize};

use crate::core::{DuelConfig, DuelError, GameRng, Result};

use super::Shell;

/// Counts announced when a new magazine is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub lives: u32,
    pub blanks: u32,
}

/// The current load of shells.
#[derive(Clone, Debug, Default)]
pub struct Magazine {
    shells: Vec<Shell>,
    cursor: usize,
    live_left: u32,
    blank_left: u32,
}

impl Magazine {
    /// An empty magazine. Every consuming call fails until a load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A magazine with a fixed order, no shuffle.
    #[must_use]
    pub fn from_shells(shells: Vec<Shell>) -> Self {
        let live_left = shells.iter().filter(|s| s.is_live()).count() as u32;
        let blank_left = shells.len() as u32 - live_left;
        Self {
            shells,
            cursor: 0,
            live_left,
            blank_left,
        }
    }

    /// Replace the contents with a freshly shuffled load.
    ///
    /// The total is uniform in the configured range. Lives start at half
    /// the total rounded up, drop by one on a coin flip when that still
    /// leaves at least one live and one blank, and never fall below one.
    pub fn load(&mut self, rng: &mut GameRng, config: &DuelConfig) -> LoadSummary {
        let total = rng.gen_range_inclusive(config.min_shells, config.max_shells);
        let mut lives = total.div_ceil(2);
        if rng.gen_bool(0.5) && lives > 1 && lives < total {
            lives -= 1;
        }
        let lives = lives.max(1);
        let blanks = total.saturating_sub(lives);

        let mut shells = Vec::with_capacity(total as usize);
        shells.extend(std::iter::repeat(Shell::Live).take(lives as usize));
        shells.extend(std::iter::repeat(Shell::Blank).take(blanks as usize));
        rng.shuffle(&mut shells);

        *self = Self::from_shells(shells);
        tracing::trace!(lives, blanks, "magazine loaded");
        LoadSummary { lives, blanks }
    }

    /// Remove and return the front shell by firing it.
    pub fn draw(&mut self) -> Result<Shell> {
        let shell = self.take_front()?;
        tracing::trace!(%shell, remaining = self.len(), "shell drawn");
        Ok(shell)
    }

    /// Remove and return the front shell without firing it.
    pub fn eject(&mut self) -> Result<Shell> {
        let shell = self.take_front()?;
        tracing::trace!(%shell, remaining = self.len(), "shell ejected");
        Ok(shell)
    }

    /// The front shell, left in place.
    pub fn peek(&self) -> Result<Shell> {
        self.shells.get(self.cursor).copied().ok_or(DuelError::EmptyMagazine)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.shells.len()
    }

    /// Shells remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shells.len() - self.cursor
    }

    #[must_use]
    pub fn live_left(&self) -> u32 {
        self.live_left
    }

    #[must_use]
    pub fn blank_left(&self) -> u32 {
        self.blank_left
    }

    fn take_front(&mut self) -> Result<Shell> {
        let shell = self.peek()?;
        self.cursor += 1;
        match shell {
            Shell::Live => self.live_left -= 1,
            Shell::Blank => self.blank_left -= 1,
        }
        debug_assert_eq!((self.live_left + self.blank_left) as usize, self.len());
        Ok(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_magazine_rejects_consumption() {
        let mut mag = Magazine::new();
        assert!(mag.is_empty());
        assert_eq!(mag.peek(), Err(DuelError::EmptyMagazine));
        assert_eq!(mag.draw(), Err(DuelError::EmptyMagazine));
        assert_eq!(mag.eject(), Err(DuelError::EmptyMagazine));
    }

    #[test]
    fn test_fixed_order_consumption() {
        let mut mag = Magazine::from_shells(vec![Shell::Live, Shell::Blank, Shell::Live]);
        assert_eq!((mag.live_left(), mag.blank_left()), (2, 1));

        assert_eq!(mag.peek(), Ok(Shell::Live));
        assert_eq!(mag.len(), 3);

        assert_eq!(mag.draw(), Ok(Shell::Live));
        assert_eq!(mag.eject(), Ok(Shell::Blank));
        assert_eq!((mag.live_left(), mag.blank_left()), (1, 0));

        assert_eq!(mag.draw(), Ok(Shell::Live));
        assert!(mag.is_empty());
        assert_eq!((mag.live_left(), mag.blank_left()), (0, 0));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mag = Magazine::from_shells(vec![Shell::Blank, Shell::Live]);
        assert_eq!(mag.peek(), Ok(Shell::Blank));
        assert_eq!(mag.peek(), Ok(Shell::Blank));
        assert_eq!(mag.len(), 2);
    }

    #[test]
    fn test_two_shell_load_is_one_each() {
        let config = DuelConfig::default().with_shells(2, 2);
        let mut rng = GameRng::new(3);
        for _ in 0..20 {
            let mut mag = Magazine::new();
            let summary = mag.load(&mut rng, &config);
            assert_eq!(summary, LoadSummary { lives: 1, blanks: 1 });
        }
    }

    #[test]
    fn test_single_shell_load_is_live() {
        let config = DuelConfig::default().with_shells(1, 1);
        let mut mag = Magazine::new();
        let summary = mag.load(&mut GameRng::new(9), &config);
        assert_eq!(summary, LoadSummary { lives: 1, blanks: 0 });
        assert_eq!(mag.peek(), Ok(Shell::Live));
    }

    #[test]
    fn test_load_is_deterministic() {
        let config = DuelConfig::default();
        let mut a = Magazine::new();
        let mut b = Magazine::new();
        a.load(&mut GameRng::new(11), &config);
        b.load(&mut GameRng::new(11), &config);
        assert_eq!(a.shells, b.shells);
    }

    proptest! {
        #[test]
        fn prop_load_counts_match_contents(seed in any::<u64>()) {
            let config = DuelConfig::default();
            let mut mag = Magazine::new();
            let summary = mag.load(&mut GameRng::new(seed), &config);
            let total = summary.lives + summary.blanks;

            prop_assert!((2..=8).contains(&total));
            prop_assert!(summary.lives >= 1);
            prop_assert!(summary.lives == total.div_ceil(2) || summary.lives + 1 == total.div_ceil(2));
            prop_assert_eq!(mag.live_left(), summary.lives);
            prop_assert_eq!(mag.blank_left(), summary.blanks);
            prop_assert_eq!(mag.len(), total as usize);
        }

        #[test]
        fn prop_counters_track_remaining(seed in any::<u64>(), ejects in proptest::collection::vec(any::<bool>(), 0..8)) {
            let mut mag = Magazine::new();
            mag.load(&mut GameRng::new(seed), &DuelConfig::default());
            for eject in ejects {
                if mag.is_empty() {
                    break;
                }
                let _ = if eject { mag.eject() } else { mag.draw() };
                prop_assert_eq!((mag.live_left() + mag.blank_left()) as usize, mag.len());
            }
        }
    }
}
