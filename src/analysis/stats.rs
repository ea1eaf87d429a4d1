//! Enumeration statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during a breadth-first enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Distinct `(turn, state)` pairs expanded.
    pub states_expanded: usize,

    /// Queue entries discarded because their `(turn, state)` was already expanded.
    pub duplicates_skipped: usize,

    /// Expanded states in which the player to act had no legal move.
    pub terminal_states: usize,

    /// Largest size the work queue reached.
    pub max_queue_len: usize,
}

impl EnumerationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total queue entries taken off the queue.
    #[must_use]
    pub fn entries_processed(&self) -> usize {
        self.states_expanded + self.duplicates_skipped
    }

    /// Fraction of processed entries that were duplicates.
    #[must_use]
    pub fn duplicate_ratio(&self) -> f64 {
        let processed = self.entries_processed();
        if processed == 0 {
            0.0
        } else {
            self.duplicates_skipped as f64 / processed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = EnumerationStats::new();
        assert_eq!(stats.states_expanded, 0);
        assert_eq!(stats.entries_processed(), 0);
        assert_eq!(stats.duplicate_ratio(), 0.0);
    }

    #[test]
    fn test_duplicate_ratio() {
        let stats = EnumerationStats {
            states_expanded: 3,
            duplicates_skipped: 1,
            ..Default::default()
        };

        assert_eq!(stats.entries_processed(), 4);
        assert_eq!(stats.duplicate_ratio(), 0.25);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = EnumerationStats {
            states_expanded: 42,
            ..Default::default()
        };

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: EnumerationStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
