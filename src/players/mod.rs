//! Player strategies for single games.
//!
//! All strategies implement `Player`, a single `choose` capability that
//! returns one of the legal cards for the seat to act.

mod human;
mod strategy;

pub use human::{ConsolePlayer, HumanPlayer};
pub use strategy::{FirstPlayer, Player, RandomPlayer};
