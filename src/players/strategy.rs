//! Automatic player strategies.
//!
//! Strategies are trait-based so the single-game loop can seat any mix of
//! interactive and automatic players:
//! - `FirstPlayer`: always the lowest legal card
//! - `RandomPlayer`: uniform choice among legal cards, seeded

use crate::core::{Card, GameRng, GameState, PlayerId};
use crate::error::{Error, Result};
use crate::games::PrimeSumGame;
use crate::rules::RulesEngine;

/// A policy that picks the card to play.
pub trait Player {
    /// Choose a card for `player` to play in `state`.
    ///
    /// The returned card must be one of the legal moves. Only called when
    /// at least one legal move exists.
    fn choose(&mut self, game: &PrimeSumGame, player: PlayerId, state: &GameState) -> Result<Card>;
}

/// Deterministic strategy: always plays the first legal card.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPlayer;

impl Player for FirstPlayer {
    fn choose(&mut self, game: &PrimeSumGame, player: PlayerId, state: &GameState) -> Result<Card> {
        game.legal_moves(state, player)
            .first()
            .copied()
            .ok_or(Error::NoLegalMove { player, sum: state.sum })
    }
}

/// Randomized strategy: uniform choice among legal cards.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player drawing from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create a random player from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, game: &PrimeSumGame, player: PlayerId, state: &GameState) -> Result<Card> {
        let moves = game.legal_moves(state, player);
        self.rng
            .choose(moves.as_slice())
            .copied()
            .ok_or(Error::NoLegalMove { player, sum: state.sum })
    }
}
