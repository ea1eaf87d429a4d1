//! Exhaustive analysis integration tests on the standard game.

use prime_cards::{
    analyze, enumerate_games, GameConfig, PlayerId, PrimeSumGame, RulesEngine, SequenceTree,
};

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn test_standard_game_statistics() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();
    let report = &analysis.report;

    assert_eq!(report.total_plays, 108);
    assert_eq!(report.longest, vec![7, 4, 2, 10, 6, 8, 4, 2, 10, 6, 8]);
    assert_eq!(report.shortest, vec![2, 3, 6, 6]);
    assert_eq!(report.highest_score, 67);
    assert_eq!(report.lowest_score, 17);
    assert_eq!(report.tree.node_count, 397);
    assert_eq!(report.complete_games, 247);
}

#[test]
fn test_discovery_order_is_breadth_first() {
    let result = enumerate_games(&PrimeSumGame::default()).unwrap();

    assert_eq!(result.sequences[0], vec![2, 3, 6, 6]);
    assert_eq!(result.sequences[1], vec![2, 5, 6, 4]);
    assert!(result.iter().zip(result.iter().skip(1)).all(|(a, b)| a.len() <= b.len()));
}

#[test]
fn test_enumeration_is_idempotent() {
    let game = PrimeSumGame::default();
    let first = enumerate_games(&game).unwrap();
    let second = enumerate_games(&game).unwrap();

    assert_eq!(first.sequences, second.sequences);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_every_sequence_ends_in_terminal_state() {
    let game = PrimeSumGame::default();
    let result = enumerate_games(&game).unwrap();

    for sequence in result.iter() {
        let (state, to_act) = game.replay(sequence).unwrap();
        assert!(game.legal_moves(&state, to_act).is_empty(), "{:?} is not terminal", sequence);
        assert_eq!(state.sum, sequence.iter().sum::<u32>());
    }
}

#[test]
fn test_every_move_was_legal_when_played() {
    let game = PrimeSumGame::default();
    let result = enumerate_games(&game).unwrap();

    for sequence in result.iter() {
        let mut state = game.initial_state();
        let mut turn = PlayerId::FIRST;
        for &card in sequence {
            assert!(game.legal_moves(&state, turn).contains(&card));
            state = game.play_legal(&state, turn, card).unwrap();
            turn = turn.other();
        }
    }
}

#[test]
fn test_sequence_length_parity_names_the_loser() {
    let game = PrimeSumGame::default();
    let result = enumerate_games(&game).unwrap();

    for sequence in result.iter() {
        assert!(sequence.len() <= 20);
        let (_, to_act) = game.replay(sequence).unwrap();
        let expected = if sequence.len() % 2 == 0 { PlayerId::FIRST } else { PlayerId::SECOND };
        assert_eq!(to_act, expected);
    }
}

// =============================================================================
// Tree
// =============================================================================

#[test]
fn test_tree_size_bounds() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();
    let total_moves: usize = analysis.enumeration.iter().map(<[u32]>::len).sum();
    let longest = analysis.report.longest.len();

    assert!(analysis.tree.len() <= total_moves + 1);
    assert!(analysis.tree.len() > longest);
}

#[test]
fn test_tree_leaves_are_the_sequences() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();

    let mut leaves: Vec<_> = analysis.tree.leaves().map(|id| analysis.tree.path(id)).collect();
    let mut sequences = analysis.enumeration.sequences.clone();
    leaves.sort();
    sequences.sort();

    assert_eq!(leaves, sequences);
}

#[test]
fn test_tree_depth_parity_matches_player() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();

    for (_, node) in analysis.tree.iter().skip(1) {
        let player = node.player().unwrap();
        assert_eq!(player.index() as i32, node.depth % 2);
    }
}

#[test]
fn test_tree_from_two_openings() {
    let tree = SequenceTree::from_sequences([&[2, 3][..], &[2, 5][..]]);
    let root = tree.get(tree.root());

    assert_eq!(root.children.len(), 1);
    let two = tree.get(root.children[0]);
    assert_eq!((two.card, two.depth), (Some(2), 0));
    assert_eq!(two.children.len(), 2);
    assert_eq!(tree.len() - 1, 3);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_dot_lists_every_node_and_edge() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();
    let dot = analysis.dot();

    let nodes = dot.lines().filter(|l| l.contains("[label=")).count();
    let edges = dot.lines().filter(|l| l.contains(" -> ")).count();

    assert_eq!(nodes, 397);
    assert_eq!(edges, 396);
    assert!(dot.starts_with("digraph G {\nnode [style = \"filled\"; fontname = \"Arial\"; colorscheme = ylgnbu3;];\n"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("\"1\" [label=\"Jo / 2\"; fillcolor=\"lightblue\" ];"));
}

#[test]
fn test_dot_uses_configured_names() {
    let config = GameConfig::default().with_player_names("Ann", "Bob");
    let analysis = analyze(&PrimeSumGame::new(config).unwrap()).unwrap();
    let dot = analysis.dot();

    assert!(dot.contains("label=\"Ann / "));
    assert!(dot.contains("label=\"Bob / "));
    assert!(!dot.contains("Jo / "));
}

#[test]
fn test_report_text_shows_queue_work() {
    // 531 states expanded plus 99 duplicates dropped off the queue.
    let analysis = analyze(&PrimeSumGame::default()).unwrap();
    let text = analysis.report.to_string();

    assert!(text.contains("States expanded: 531 (99 duplicates skipped)\n"));
    assert!(text.contains("Queue entries processed: 630 (15.7% duplicates)\n"));
    assert!(text.contains("Complete games without state merging: 247\n"));
}

#[test]
fn test_report_json() {
    let analysis = analyze(&PrimeSumGame::default()).unwrap();
    let json: serde_json::Value = serde_json::to_value(&analysis.report).unwrap();

    assert_eq!(json["total_plays"], 108);
    assert_eq!(json["highest_score"], 67);
    assert_eq!(json["tree"]["node_count"], 397);
    assert_eq!(json["plays"].as_array().unwrap().len(), 108);
}
