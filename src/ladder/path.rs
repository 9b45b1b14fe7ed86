//! Path resolution
//!
//! Traces a start lane down the board in one pass and returns the whole
//! polyline at once. Playback (see `playback`) reveals it afterwards.
//!
//! Waypoints are in grid space:
//! - `x`: lane index
//! - `y`: 0 at the top anchor, `row + 1` at row `row`, `row_count + 1` at the
//!   bottom anchor
//!
//! Use [`LadderLayout`](super::LadderLayout) to map them onto a view.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::error::{LadderError, Result};

/// The resolved path for one start lane on one board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub start_lane: usize,
    /// Polyline from the top anchor of `start_lane` to the bottom anchor of `exit_lane`
    pub waypoints: Vec<Vec2>,
    pub exit_lane: usize,
}

impl Trace {
    /// Number of lane changes along the path
    pub fn crossings(&self) -> usize {
        self.waypoints
            .windows(2)
            .filter(|pair| pair[0].x != pair[1].x)
            .count()
    }
}

/// Vertical grid level of a row
#[inline]
fn row_level(row: usize) -> f32 {
    (row + 1) as f32
}

#[inline]
fn point(lane: usize, level: f32) -> Vec2 {
    Vec2::new(lane as f32, level)
}

/// Resolve the path taken from `start_lane`.
///
/// A well-formed board never offers a rung on both sides of a lane in one row.
/// If it does anyway, the rung to the right wins.
pub fn resolve(board: &Board, start_lane: usize) -> Result<Trace> {
    let lane_count = board.lane_count();
    if start_lane >= lane_count {
        return Err(LadderError::InvalidStartLane {
            start_lane,
            lane_count,
        });
    }

    let row_count = board.row_count();
    // Top anchor, at most three points per row, bottom anchor
    let mut waypoints = Vec::with_capacity(row_count * 3 + 2);
    let mut lane = start_lane;

    waypoints.push(point(lane, 0.0));

    for row in 0..row_count {
        let y = row_level(row);
        let go_right = lane < lane_count - 1 && board.has_rung(row, lane);
        let go_left = lane > 0 && board.has_rung(row, lane - 1);

        let next = if go_right {
            Some(lane + 1)
        } else if go_left {
            Some(lane - 1)
        } else {
            None
        };

        if let Some(next) = next {
            waypoints.push(point(lane, y));
            lane = next;
            waypoints.push(point(lane, y));
        }

        if row + 1 < row_count {
            waypoints.push(point(lane, row_level(row + 1)));
        }
    }

    waypoints.push(point(lane, (row_count + 1) as f32));

    log::debug!(
        "Resolved lane {} -> {} ({} waypoints)",
        start_lane,
        lane,
        waypoints.len()
    );

    Ok(Trace {
        start_lane,
        waypoints,
        exit_lane: lane,
    })
}

/// Exit lane for every start lane, indexed by start lane
pub fn resolve_all(board: &Board) -> Vec<usize> {
    (0..board.lane_count())
        .filter_map(|lane| resolve(board, lane).ok())
        .map(|trace| trace.exit_lane)
        .collect()
}
