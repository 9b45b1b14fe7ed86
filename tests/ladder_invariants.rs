//! Property-based invariant tests for ladder generation and path resolution.
//!
//! 1. Same seed, same board; same board and lane, same trace.
//! 2. No row of a generated board has two rungs meeting at one lane.
//! 3. Exit lanes over all start lanes form a permutation.
//! 4. Waypoint y never decreases.
//! 5. Traces start at the top anchor of the start lane and end at the bottom
//!    anchor of the exit lane.
//! 6. Malformed boards still resolve, deterministically and in range.

use glam::Vec2;
use ladder_mate::ladder::resolve_all;
use ladder_mate::{Board, LadderError, resolve};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (2usize..=12, 1usize..=16)
}

fn any_rungs(max_lanes: usize, max_rows: usize) -> impl Strategy<Value = (usize, Vec<Vec<bool>>)> {
    (2..=max_lanes, 1..=max_rows).prop_flat_map(|(lanes, rows)| {
        (
            Just(lanes),
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), lanes - 1), rows),
        )
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_board((lanes, rows) in dims(), seed in any::<u64>()) {
        let a = Board::from_seed(lanes, rows, seed).unwrap();
        let b = Board::from_seed(lanes, rows, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn same_input_same_trace((lanes, rows) in dims(), seed in any::<u64>()) {
        let board = Board::from_seed(lanes, rows, seed).unwrap();
        for lane in 0..lanes {
            prop_assert_eq!(resolve(&board, lane).unwrap(), resolve(&board, lane).unwrap());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. No adjacent rungs
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn generated_boards_have_no_adjacent_rungs((lanes, rows) in dims(), seed in any::<u64>()) {
        let board = Board::from_seed(lanes, rows, seed).unwrap();
        prop_assert_eq!(board.row_count(), rows);
        for (r, row) in board.rows().iter().enumerate() {
            prop_assert_eq!(row.len(), lanes - 1);
            for i in 0..row.len().saturating_sub(1) {
                prop_assert!(!(row[i] && row[i + 1]), "adjacent rungs at row {} gap {}", r, i);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Exit lanes are a permutation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exits_form_permutation((lanes, rows) in dims(), seed in any::<u64>()) {
        let board = Board::from_seed(lanes, rows, seed).unwrap();
        let mut exits = resolve_all(&board);
        prop_assert_eq!(exits.len(), lanes);
        exits.sort_unstable();
        prop_assert_eq!(exits, (0..lanes).collect::<Vec<_>>());
    }

    #[test]
    fn well_formed_tables_form_permutation((lanes, rungs) in any_rungs(8, 10)) {
        let board = Board::from_rungs(lanes, rungs).unwrap();
        prop_assume!(board.is_well_formed());
        let mut exits = resolve_all(&board);
        exits.sort_unstable();
        prop_assert_eq!(exits, (0..lanes).collect::<Vec<_>>());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Waypoint shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn waypoints_descend_between_anchors((lanes, rows) in dims(), seed in any::<u64>()) {
        let board = Board::from_seed(lanes, rows, seed).unwrap();
        for lane in 0..lanes {
            let trace = resolve(&board, lane).unwrap();
            prop_assert!(!trace.waypoints.is_empty());
            prop_assert_eq!(trace.waypoints[0], Vec2::new(lane as f32, 0.0));
            prop_assert_eq!(
                *trace.waypoints.last().unwrap(),
                Vec2::new(trace.exit_lane as f32, (rows + 1) as f32)
            );
            for pair in trace.waypoints.windows(2) {
                prop_assert!(pair[0].y <= pair[1].y);
                // Segments are either vertical or one lane wide
                prop_assert!(pair[0].x == pair[1].x || (pair[0].x - pair[1].x).abs() == 1.0);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Robustness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn malformed_boards_resolve((lanes, rungs) in any_rungs(8, 10)) {
        let board = Board::from_rungs(lanes, rungs).unwrap();
        for lane in 0..lanes {
            let trace = resolve(&board, lane).unwrap();
            prop_assert!(trace.exit_lane < lanes);
            prop_assert_eq!(&trace, &resolve(&board, lane).unwrap());
        }
    }

    #[test]
    fn out_of_range_lanes_rejected((lanes, rows) in dims(), extra in 0usize..100) {
        let board = Board::from_seed(lanes, rows, 1).unwrap();
        let is_invalid_lane = matches!(
            resolve(&board, lanes + extra),
            Err(LadderError::InvalidStartLane { .. })
        );
        prop_assert!(is_invalid_lane);
    }
}
