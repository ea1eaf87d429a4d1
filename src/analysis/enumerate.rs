//! Breadth-first enumeration of complete games.
//!
//! The explorer walks the graph whose nodes are `(turn, state)` pairs and
//! whose edges are legal plays, starting from the opening with player 0 to
//! act. Each `(turn, state)` pair is expanded at most once: the first queue
//! entry to reach it carries its history forward and later arrivals are
//! dropped. When the player to act has no legal move, the entry's history is
//! a complete game and is recorded.
//!
//! Because later arrivals are dropped, games that pass through a shared state
//! via a different prefix are not recorded. `count_complete_games` counts
//! every distinct game without that pruning.

use std::collections::VecDeque;

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};

use super::stats::EnumerationStats;
use crate::core::PlayerId;
use crate::error::Result;
use crate::rules::RulesEngine;

/// Pending work: the player to act, the state they face, and the moves that
/// led there.
#[derive(Clone, Debug)]
struct QueueEntry<S, M: Clone> {
    turn: PlayerId,
    state: S,
    history: Vector<M>,
}

/// Every terminal move sequence found by `enumerate_games`.
#[derive(Clone, Debug)]
pub struct Enumeration<M> {
    /// Distinct complete games in discovery order.
    pub sequences: Vec<Vec<M>>,

    /// Traversal statistics.
    pub stats: EnumerationStats,
}

impl<M> Enumeration<M> {
    /// Number of distinct games found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Check if no games were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Iterate over the sequences in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &[M]> {
        self.sequences.iter().map(Vec::as_slice)
    }
}

/// Enumerate complete games breadth-first from the initial state.
///
/// Legal moves are queued in the order the engine offers them, so the
/// discovery order is reproducible.
pub fn enumerate_games<E: RulesEngine>(engine: &E) -> Result<Enumeration<E::Move>> {
    let mut queue = VecDeque::new();
    queue.push_back(QueueEntry {
        turn: PlayerId::FIRST,
        state: engine.initial_state(),
        history: Vector::new(),
    });

    let mut visited: FxHashSet<(PlayerId, E::State)> = FxHashSet::default();
    let mut seen: FxHashSet<Vec<E::Move>> = FxHashSet::default();
    let mut sequences = Vec::new();
    let mut stats = EnumerationStats::new();
    let mut depth = 0;

    stats.max_queue_len = queue.len();

    while let Some(entry) = queue.pop_front() {
        if !visited.insert((entry.turn, entry.state.clone())) {
            stats.duplicates_skipped += 1;
            continue;
        }
        stats.states_expanded += 1;

        if entry.history.len() > depth {
            depth = entry.history.len();
            log::debug!("{:<32}{:<8}{:<8}", "enumerating depth", depth, queue.len());
        }

        let moves = engine.legal_moves(&entry.state, entry.turn);
        if moves.is_empty() {
            stats.terminal_states += 1;
            let sequence: Vec<E::Move> = entry.history.iter().cloned().collect();
            if seen.insert(sequence.clone()) {
                log::trace!("{:<32}{:?}", "complete game", sequence);
                sequences.push(sequence);
            }
            continue;
        }

        let next = entry.turn.other();
        for mv in moves {
            let mut history = entry.history.clone();
            history.push_back(mv);
            queue.push_back(QueueEntry {
                turn: next,
                state: engine.apply(&entry.state, entry.turn, mv)?,
                history,
            });
        }
        stats.max_queue_len = stats.max_queue_len.max(queue.len());
    }

    log::info!(
        "enumerated {} games ({} states expanded, {} duplicates skipped)",
        sequences.len(),
        stats.states_expanded,
        stats.duplicates_skipped
    );

    Ok(Enumeration { sequences, stats })
}

/// Count every distinct complete game from the initial state.
///
/// Depth-first with memoisation on `(turn, state)`: the number of ways to
/// finish from a state does not depend on how it was reached.
pub fn count_complete_games<E: RulesEngine>(engine: &E) -> Result<u128> {
    let mut memo = FxHashMap::default();
    let count = count_from(engine, PlayerId::FIRST, engine.initial_state(), &mut memo)?;
    log::info!("{} distinct complete games ({} states)", count, memo.len());
    Ok(count)
}

fn count_from<E: RulesEngine>(
    engine: &E,
    turn: PlayerId,
    state: E::State,
    memo: &mut FxHashMap<(PlayerId, E::State), u128>,
) -> Result<u128> {
    if let Some(&count) = memo.get(&(turn, state.clone())) {
        return Ok(count);
    }

    let moves = engine.legal_moves(&state, turn);
    let count = if moves.is_empty() {
        1
    } else {
        let mut total = 0;
        for mv in moves {
            let next = engine.apply(&state, turn, mv)?;
            total += count_from(engine, turn.other(), next, memo)?;
        }
        total
    };

    memo.insert((turn, state), count);
    Ok(count)
}
