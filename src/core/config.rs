//! Game configuration.
//!
//! A `GameConfig` fixes the starting hand (shared by both players), the
//! primality bound, and the names shown in reports. `validate` guarantees
//! the bound covers every sum the game can reach.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};
use super::state::Card;
use crate::error::{Error, Result};

/// Configuration for a prime-sum game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards each player starts with. No duplicates, no zeroes.
    pub hand: Vec<Card>,

    /// Inclusive upper bound of the primality table.
    /// Must be at least the sum of every card in play.
    pub prime_bound: Card,

    /// Display names, indexed by seat.
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand: (1..=10).collect(),
            prime_bound: 200,
            player_names: ["Jo".to_string(), "Georg".to_string()],
        }
    }
}

impl GameConfig {
    /// Replace the starting hand.
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Card>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    /// Replace the primality bound.
    pub fn with_prime_bound(mut self, bound: Card) -> Self {
        self.prime_bound = bound;
        self
    }

    /// Replace both display names.
    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Display name for a seat.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.player_names[player.index()]
    }

    /// Largest sum a game can reach: every card from both hands played.
    ///
    /// `None` when that total does not fit in a `Card`.
    #[must_use]
    pub fn max_sum(&self) -> Option<Card> {
        self.hand
            .iter()
            .try_fold(0 as Card, |total, &card| total.checked_add(card))?
            .checked_mul(PLAYER_COUNT as Card)
    }

    /// Check the configuration can be played.
    pub fn validate(&self) -> Result<()> {
        if self.hand.is_empty() {
            return Err(Error::invalid_config("hand must hold at least one card"));
        }

        if self.hand.contains(&0) {
            return Err(Error::invalid_config("card values must be positive"));
        }

        let mut sorted = self.hand.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(Error::invalid_config(format!("card {} appears twice", pair[0])));
        }

        let max_sum = self
            .max_sum()
            .ok_or_else(|| Error::invalid_config("hand total overflows"))?;
        if self.prime_bound < max_sum {
            return Err(Error::invalid_config(format!(
                "prime bound {} is below the largest reachable sum {}",
                self.prime_bound, max_sum
            )));
        }

        Ok(())
    }
}
