//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe identifier for the two seats of a prime-sum game.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//! Equality and hashing are structural, so a `PlayerMap` can live inside a
//! hashed game state.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table. The game is defined for two players only.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player to act is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who opens the game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who answers the opening card.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    ///
    /// Toggles the low bit, which is only meaningful for seats 0 and 1.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both player IDs in seat order.
    ///
    /// ```
    /// use prime_cards::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use prime_cards::core::{PlayerId, PlayerMap};
///
/// let mut played: PlayerMap<u32> = PlayerMap::with_value(0);
/// played[PlayerId::SECOND] = 3;
///
/// assert_eq!(played[PlayerId::FIRST], 0);
/// assert_eq!(played[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::both().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 1");
    }

    #[test]
    fn test_other_toggles_between_seats() {
        assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
        assert_eq!(PlayerId::FIRST.other().other(), PlayerId::FIRST);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(0);

        map[PlayerId::FIRST] = 10;
        map[PlayerId::SECOND] = 20;

        assert_eq!(map[PlayerId::FIRST], 10);
        assert_eq!(map[PlayerId::SECOND], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.0);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::FIRST, &0), (PlayerId::SECOND, &1)]);
    }

    #[test]
    fn test_player_map_structural_equality() {
        let a: PlayerMap<Vec<u32>> = PlayerMap::new(|_| vec![1, 2]);
        let b: PlayerMap<Vec<u32>> = PlayerMap::with_value(vec![1, 2]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
