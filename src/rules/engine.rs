//! Rules engine trait for turn-based, two-player games.
//!
//! Games implement `RulesEngine` to define:
//! - The opening state
//! - What moves are legal for the player to act
//! - How a move produces the next state
//! - When the game is over
//!
//! The analysis module explores games purely through this trait.

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::error::Result;

/// Legal moves for one turn, ordered as the game offers them.
pub type MoveList<M> = SmallVec<[M; 10]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
}

impl GameResult {
    /// The winning player.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match self {
            GameResult::Winner(p) => *p,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - States are immutable values: `apply` returns a successor and must not
///   alter its input. Equality and hashing must be structural, since
///   explorers deduplicate states by value.
/// - `legal_moves` must be deterministic and consistently ordered.
/// - `apply` fails only when the move is not available to the player.
pub trait RulesEngine {
    /// Snapshot of the game between plies.
    type State: Clone + Eq + Hash + Debug;

    /// A single ply.
    type Move: Copy + Eq + Hash + Debug;

    /// The state every game starts from. Player 0 acts first.
    fn initial_state(&self) -> Self::State;

    /// Moves available to `player` in `state`.
    fn legal_moves(&self, state: &Self::State, player: PlayerId) -> MoveList<Self::Move>;

    /// Apply a move, returning the successor state.
    fn apply(&self, state: &Self::State, player: PlayerId, mv: Self::Move) -> Result<Self::State>;

    // === Convenience Methods ===

    /// Check if the game is over with `player` to act.
    ///
    /// A player with no legal move loses.
    fn is_terminal(&self, state: &Self::State, player: PlayerId) -> Option<GameResult> {
        if self.legal_moves(state, player).is_empty() {
            Some(GameResult::Winner(player.other()))
        } else {
            None
        }
    }

    /// Replay `moves` from the initial state, alternating from player 0.
    ///
    /// Returns the final state and the player to act in it.
    fn replay(&self, moves: &[Self::Move]) -> Result<(Self::State, PlayerId)> {
        moves.iter().try_fold(
            (self.initial_state(), PlayerId::FIRST),
            |(state, player), &mv| Ok((self.apply(&state, player, mv)?, player.other())),
        )
    }
}
