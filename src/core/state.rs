//! Game state: the running sum and both players' remaining hands.
//!
//! `GameState` is an immutable value. Playing a card returns a new state and
//! leaves the parent untouched, so states can be queued, hashed, and kept in
//! move histories freely.
//!
//! Hands use `im::OrdSet`: O(1) clone with structural sharing, and ascending
//! iteration order, which fixes the order legal moves are offered in.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, PlayerMap};
use super::primes::PrimeTable;
use crate::error::{Error, Result};

/// Face value of a card.
pub type Card = u32;

/// The cards a player still holds.
pub type Hand = OrdSet<Card>;

/// Legal plays for one turn. A hand never holds more than a handful of
/// cards, so this stays on the stack.
pub type Moves = SmallVec<[Card; 10]>;

/// Snapshot of a game between plies.
///
/// Equality and hashing are by value: two states reached through different
/// move orders compare equal when their sums and hands match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Total of every card played so far.
    pub sum: Card,

    /// Remaining cards per player.
    pub hands: PlayerMap<Hand>,
}

impl GameState {
    /// Create a state where both players hold the same cards and nothing has
    /// been played yet.
    #[must_use]
    pub fn new(hand: impl IntoIterator<Item = Card>) -> Self {
        let hand: Hand = hand.into_iter().collect();
        Self {
            sum: 0,
            hands: PlayerMap::with_value(hand),
        }
    }

    /// The canonical opening: sum 0, both players holding 1 through 10.
    #[must_use]
    pub fn initial() -> Self {
        Self::new(1..=10)
    }

    /// Cards still held by `player`.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    /// Cards `player` may legally play on the current sum, ascending.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId, primes: &PrimeTable) -> Moves {
        legal_moves(self.hand(player), self.sum, primes)
    }

    /// Play `card` from `player`'s hand.
    ///
    /// Returns the successor state; `self` is unchanged. Only hand membership
    /// is checked here: callers draw `card` from `legal_moves`.
    pub fn play_card(&self, player: PlayerId, card: Card) -> Result<Self> {
        let mut next = self.clone();
        if next.hands[player].remove(&card).is_none() {
            return Err(Error::CardNotInHand { player, card });
        }
        next.sum += card;
        Ok(next)
    }

    /// Number of cards left across both hands.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.hands.iter().map(|(_, hand)| hand.len()).sum()
    }
}

/// Cards in `hand` that make `sum + card` prime, in ascending order.
#[must_use]
pub fn legal_moves(hand: &Hand, sum: Card, primes: &PrimeTable) -> Moves {
    hand.iter()
        .copied()
        .filter(|&card| primes.is_prime(sum + card))
        .collect()
}
