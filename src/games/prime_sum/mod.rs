//! The prime-sum card game.
//!
//! - Both players start with the same hand (1 through 10 by default)
//! - On your turn: play a card so that the running sum becomes prime
//! - A player with no such card loses
//!
//! Player 0 always opens on a sum of 0.

mod game;

pub use game::PrimeSumGame;
