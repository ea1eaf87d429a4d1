//! Rules engine trait for game implementations.
//!
//! Defines the `RulesEngine` trait that games implement to specify their
//! rules, and `GameResult` for completed games.

mod engine;

pub use engine::{GameResult, MoveList, RulesEngine};
