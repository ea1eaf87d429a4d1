//! Core game types: players, cards, state, primality, configuration, RNG.

pub mod config;
pub mod player;
pub mod primes;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use primes::PrimeTable;
pub use rng::GameRng;
pub use state::{legal_moves, Card, GameState, Hand, Moves};
