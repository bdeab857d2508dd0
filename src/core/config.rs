//! Duel configuration.
//!
//! All fields default to the standard table rules, so a TOML file only
//! needs to name the values it changes:
//!
//! ```toml
//! max_shells = 6
//! health_ceiling = 5
//! ```

use serde::{Deserialize, Serialize};

use super::error::{DuelError, Result};

/// Rules for magazines, health and item grants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Smallest magazine a load can produce.
    pub min_shells: u32,

    /// Largest magazine a load can produce.
    pub max_shells: u32,

    /// Lowest starting health drawn at round start.
    pub min_health: u32,

    /// Highest starting health drawn at round start.
    /// Also the nominal ceiling the opponent policy measures itself against.
    pub max_health: u32,

    /// Absolute cap for healing.
    pub health_ceiling: u32,

    /// Maximum items a party may hold.
    pub max_items: usize,

    /// Fewest items granted to each party per load.
    pub min_item_grant: u32,

    /// Most items granted to each party per load.
    pub max_item_grant: u32,

    /// Clear both item lists before each grant.
    pub clear_items_on_load: bool,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            min_shells: 2,
            max_shells: 8,
            min_health: 2,
            max_health: 4,
            health_ceiling: 6,
            max_items: 8,
            min_item_grant: 2,
            max_item_grant: 4,
            clear_items_on_load: true,
        }
    }
}

impl DuelConfig {
    /// Set the magazine size range.
    #[must_use]
    pub fn with_shells(mut self, min: u32, max: u32) -> Self {
        self.min_shells = min;
        self.max_shells = max;
        self
    }

    /// Set the starting health range.
    #[must_use]
    pub fn with_health(mut self, min: u32, max: u32) -> Self {
        self.min_health = min;
        self.max_health = max;
        self
    }

    /// Set the per-load item grant range.
    #[must_use]
    pub fn with_item_grant(mut self, min: u32, max: u32) -> Self {
        self.min_item_grant = min;
        self.max_item_grant = max;
        self
    }

    /// Keep items across loads instead of clearing them.
    #[must_use]
    pub fn keep_items_on_load(mut self) -> Self {
        self.clear_items_on_load = false;
        self
    }

    /// Check that every range is non-empty and consistent.
    pub fn validate(&self) -> Result<()> {
        if self.min_shells == 0 || self.min_shells > self.max_shells {
            return Err(DuelError::InvalidConfig(format!(
                "shell range {}..={} must be non-empty and start above zero",
                self.min_shells, self.max_shells
            )));
        }
        if self.min_health == 0 || self.min_health > self.max_health {
            return Err(DuelError::InvalidConfig(format!(
                "health range {}..={} must be non-empty and start above zero",
                self.min_health, self.max_health
            )));
        }
        if self.health_ceiling < self.max_health {
            return Err(DuelError::InvalidConfig(format!(
                "health ceiling {} is below max health {}",
                self.health_ceiling, self.max_health
            )));
        }
        if self.min_item_grant > self.max_item_grant {
            return Err(DuelError::InvalidConfig(format!(
                "item grant range {}..={} is empty",
                self.min_item_grant, self.max_item_grant
            )));
        }
        Ok(())
    }
}
