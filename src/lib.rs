//! # prime-cards
//!
//! A two-player card game in which every card played must turn the running
//! sum into a prime, plus an exhaustive analysis of every way it can go.
//!
//! ## Rules
//!
//! Both players start with the same hand (1 through 10 by default) and the
//! sum at 0. Players alternate, player 0 first. On your turn you must play a
//! card from your hand whose value, added to the sum, gives a prime. A
//! player who cannot do so loses.
//!
//! ## Architecture
//!
//! - **Immutable States**: `GameState` is a value; playing a card returns a
//!   new state. Hands use `im` persistent sets for O(1) cloning.
//!
//! - **Rules Seam**: exploration is written against `RulesEngine`, which the
//!   prime-sum game implements.
//!
//! - **Arena Tree**: collected sequences fold into an index-addressed
//!   shared-prefix tree.
//!
//! ## Modules
//!
//! - `core`: Players, cards, state, primality table, configuration, RNG
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The prime-sum game
//! - `players`: Human, first-choice, and random strategies
//! - `play`: Single-game loop
//! - `analysis`: Breadth-first enumeration, sequence tree, reports

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod players;
pub mod play;
pub mod analysis;

// Re-export commonly used types
pub use crate::core::{
    Card, GameConfig, GameRng, GameState, Hand, Moves, PlayerId, PlayerMap, PrimeTable,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{GameResult, MoveList, RulesEngine};

pub use crate::games::PrimeSumGame;

pub use crate::players::{ConsolePlayer, FirstPlayer, HumanPlayer, Player, RandomPlayer};

pub use crate::play::{play_game, GameRecord, Ply};

pub use crate::analysis::{
    analyze, count_complete_games, enumerate_games, render_dot,
    Analysis, AnalysisReport, Enumeration, EnumerationStats,
    NodeId, SequenceNode, SequenceTree, TreeStats,
};
