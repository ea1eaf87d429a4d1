//! Precomputed primality table.
//!
//! Primes up to an inclusive bound are found once by trial division and
//! stored as a dense lookup table, so `is_prime` is a single index.

use serde::{Deserialize, Serialize};

use super::state::Card;

/// Primality oracle for every value in `0..=bound`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeTable {
    bound: Card,
    table: Vec<bool>,
}

impl PrimeTable {
    /// Build the table for all values up to and including `bound`.
    ///
    /// A candidate is prime iff no value in `2..candidate` divides it.
    #[must_use]
    pub fn new(bound: Card) -> Self {
        let table = (0..=bound)
            .map(|candidate| candidate >= 2 && (2..candidate).all(|d| candidate % d != 0))
            .collect();

        Self { bound, table }
    }

    /// Largest value this table can answer for.
    #[must_use]
    pub fn bound(&self) -> Card {
        self.bound
    }

    /// Is `n` prime?
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the bound. A validated `GameConfig` sizes the
    /// table to cover every reachable sum.
    #[inline]
    #[must_use]
    pub fn is_prime(&self, n: Card) -> bool {
        assert!(n <= self.bound, "Prime query {} exceeds table bound {}", n, self.bound);
        self.table[n as usize]
    }

    /// Iterate over all primes in the table, ascending.
    pub fn primes(&self) -> impl Iterator<Item = Card> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, &prime)| prime)
            .map(|(n, _)| n as Card)
    }
}
