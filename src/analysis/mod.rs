//! Exhaustive analysis of the prime-sum game.
//!
//! ## Overview
//!
//! - **Enumeration**: breadth-first search over `(turn, state)` pairs with a
//!   visited set, collecting every terminal move sequence
//! - **Counting**: memoised count of all distinct complete games
//! - **Sequence tree**: the collected sequences folded into a shared-prefix
//!   tree held in an arena
//! - **Reporting**: summary statistics and GraphViz DOT output
//!
//! ## Usage
//!
//! ```rust
//! use prime_cards::analysis::analyze;
//! use prime_cards::games::PrimeSumGame;
//!
//! let analysis = analyze(&PrimeSumGame::default()).unwrap();
//! assert_eq!(analysis.report.total_plays, 108);
//! assert!(analysis.dot().starts_with("digraph G {"));
//! ```

pub mod enumerate;
pub mod report;
pub mod stats;
pub mod tree;

pub use enumerate::{count_complete_games, enumerate_games, Enumeration};
pub use report::{render_dot, AnalysisReport, DotGraph};
pub use stats::EnumerationStats;
pub use tree::{NodeId, SequenceNode, SequenceTree, TreeStats};

use crate::core::Card;
use crate::error::Result;
use crate::games::PrimeSumGame;

/// Everything produced by one analysis run.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Sequences found by the breadth-first traversal.
    pub enumeration: Enumeration<Card>,

    /// Shared-prefix tree of those sequences.
    pub tree: SequenceTree,

    /// Summary statistics.
    pub report: AnalysisReport,

    player_names: [String; 2],
}

impl Analysis {
    /// GraphViz DOT text for the sequence tree.
    #[must_use]
    pub fn dot(&self) -> String {
        render_dot(&self.tree, &self.player_names)
    }
}

/// Enumerate, count, and summarise every game of `game`.
pub fn analyze(game: &PrimeSumGame) -> Result<Analysis> {
    let enumeration = enumerate_games(game)?;
    let complete_games = count_complete_games(game)?;
    let tree = SequenceTree::from_sequences(enumeration.iter());
    let report = AnalysisReport::new(&enumeration, &tree, complete_games);

    Ok(Analysis {
        enumeration,
        tree,
        report,
        player_names: game.config().player_names.clone(),
    })
}
