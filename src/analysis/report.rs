//! Summary statistics and GraphViz rendering of an analysis run.

use std::fmt;

use serde::Serialize;

use super::enumerate::Enumeration;
use super::stats::EnumerationStats;
use super::tree::{NodeId, SequenceNode, SequenceTree, TreeStats};
use crate::core::Card;

/// Aggregate results of enumerating every game.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    /// Number of distinct games found by the breadth-first traversal.
    pub total_plays: usize,

    /// First longest game found.
    pub longest: Vec<Card>,

    /// First shortest game found.
    pub shortest: Vec<Card>,

    /// Largest final sum over all games.
    pub highest_score: Card,

    /// Smallest final sum over all games.
    pub lowest_score: Card,

    /// Every distinct complete game, without merging shared states.
    pub complete_games: u128,

    /// Shape of the sequence tree.
    pub tree: TreeStats,

    /// Traversal statistics.
    pub enumeration: EnumerationStats,

    /// Every game found, in discovery order.
    pub plays: Vec<Vec<Card>>,
}

impl AnalysisReport {
    /// Summarise an enumeration and the tree built from it.
    pub fn new(enumeration: &Enumeration<Card>, tree: &SequenceTree, complete_games: u128) -> Self {
        let sequences = &enumeration.sequences;
        let score = |s: &Vec<Card>| s.iter().sum::<Card>();

        // Ties keep the earliest sequence.
        let longest = sequences
            .iter()
            .reduce(|best, s| if s.len() > best.len() { s } else { best });
        let shortest = sequences
            .iter()
            .reduce(|best, s| if s.len() < best.len() { s } else { best });

        Self {
            total_plays: sequences.len(),
            longest: longest.cloned().unwrap_or_default(),
            shortest: shortest.cloned().unwrap_or_default(),
            highest_score: sequences.iter().map(score).max().unwrap_or(0),
            lowest_score: sequences.iter().map(score).min().unwrap_or(0),
            complete_games,
            tree: tree.stats(),
            enumeration: enumeration.stats.clone(),
            plays: sequences.clone(),
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "STATS:")?;
        writeln!(f, "Total plays: {}", self.total_plays)?;
        writeln!(f, "Longest play: {:?}", self.longest)?;
        writeln!(f, "Shortest play: {:?}", self.shortest)?;
        writeln!(f, "Highest score: {}", self.highest_score)?;
        writeln!(f, "Lowest score: {}", self.lowest_score)?;
        writeln!(f, "Total tree nodes: {}", self.tree.node_count)?;
        writeln!(f, "Complete games without state merging: {}", self.complete_games)?;
        writeln!(
            f,
            "States expanded: {} ({} duplicates skipped)",
            self.enumeration.states_expanded, self.enumeration.duplicates_skipped
        )?;
        writeln!(
            f,
            "Queue entries processed: {} ({:.1}% duplicates)",
            self.enumeration.entries_processed(),
            self.enumeration.duplicate_ratio() * 100.0
        )?;
        writeln!(f, "ALL PLAYS:")?;
        for play in &self.plays {
            writeln!(f, "{:?}", play)?;
        }
        Ok(())
    }
}

/// GraphViz DOT rendering of a sequence tree.
///
/// Node ids are arena indices. Nodes are listed in pre-order, then edges in
/// depth-first order.
pub struct DotGraph<'a> {
    tree: &'a SequenceTree,
    player_names: &'a [String; 2],
}

impl<'a> DotGraph<'a> {
    /// Render `tree`, labelling moves with the given seat names.
    pub fn new(tree: &'a SequenceTree, player_names: &'a [String; 2]) -> Self {
        Self { tree, player_names }
    }

    fn label(&self, node: &SequenceNode) -> String {
        match (node.player(), node.card) {
            (Some(player), Some(card)) => {
                format!("{} / {}", escape_label(&self.player_names[player.index()]), card)
            }
            _ => "Start".to_string(),
        }
    }

    fn color(node: &SequenceNode) -> &'static str {
        match node.player() {
            None => "lightgrey",
            Some(player) if player.index() == 0 => "lightblue",
            Some(_) => "lightpink",
        }
    }
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        writeln!(f, "node [style = \"filled\"; fontname = \"Arial\"; colorscheme = ylgnbu3;];")?;

        for id in self.tree.preorder() {
            let node = self.tree.get(id);
            writeln!(
                f,
                "\"{}\" [label=\"{}\"; fillcolor=\"{}\" ];",
                id.raw(),
                self.label(node),
                Self::color(node)
            )?;
        }

        let mut stack: Vec<(NodeId, NodeId)> = Vec::new();
        let push_children = |stack: &mut Vec<(NodeId, NodeId)>, parent: NodeId| {
            let children = &self.tree.get(parent).children;
            stack.extend(children.iter().rev().map(|&child| (parent, child)));
        };

        push_children(&mut stack, self.tree.root());
        while let Some((parent, child)) = stack.pop() {
            writeln!(f, "\"{}\" -> \"{}\";", parent.raw(), child.raw())?;
            push_children(&mut stack, child);
        }

        writeln!(f, "}}")
    }
}

/// Escape a string for use inside a quoted DOT id.
fn escape_label(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render a sequence tree as GraphViz DOT text.
pub fn render_dot(tree: &SequenceTree, player_names: &[String; 2]) -> String {
    DotGraph::new(tree, player_names).to_string()
}
