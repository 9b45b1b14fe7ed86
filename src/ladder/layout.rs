//! Mapping between grid space and view coordinates
//!
//! Lanes are spaced evenly across the width with one spacing of margin on
//! each side. The top and bottom anchors sit `anchor_inset` from the view
//! edges and the rows divide the height between them evenly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::path::Trace;
use crate::consts::ANCHOR_INSET;

/// View geometry for drawing a board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderLayout {
    /// View size in points
    pub size: Vec2,
    /// Distance from the top/bottom edge to the anchor circles
    pub anchor_inset: f32,
}

impl LadderLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            anchor_inset: ANCHOR_INSET,
        }
    }

    /// Horizontal distance between neighbouring lanes
    #[inline]
    pub fn lane_spacing(&self, lane_count: usize) -> f32 {
        self.size.x / (lane_count + 1) as f32
    }

    /// X coordinate of a lane
    #[inline]
    pub fn lane_x(&self, lane: f32, lane_count: usize) -> f32 {
        self.lane_spacing(lane_count) * (lane + 1.0)
    }

    /// Y coordinate of a grid level (0 = top anchor, `row_count + 1` = bottom anchor)
    #[inline]
    pub fn level_y(&self, level: f32, row_count: usize) -> f32 {
        let usable = self.size.y - 2.0 * self.anchor_inset;
        self.anchor_inset + usable / (row_count + 1) as f32 * level
    }

    /// Map a grid-space point into the view
    pub fn project(&self, point: Vec2, lane_count: usize, row_count: usize) -> Vec2 {
        Vec2::new(
            self.lane_x(point.x, lane_count),
            self.level_y(point.y, row_count),
        )
    }

    /// Map a whole trace into the view
    pub fn project_trace(&self, trace: &Trace, board: &Board) -> Vec<Vec2> {
        trace
            .waypoints
            .iter()
            .map(|&p| self.project(p, board.lane_count(), board.row_count()))
            .collect()
    }

    /// Top anchor (start circle) of a lane
    pub fn top_anchor(&self, lane: usize, lane_count: usize) -> Vec2 {
        Vec2::new(self.lane_x(lane as f32, lane_count), self.anchor_inset)
    }

    /// Bottom anchor (result circle) of a lane
    pub fn bottom_anchor(&self, lane: usize, lane_count: usize) -> Vec2 {
        Vec2::new(
            self.lane_x(lane as f32, lane_count),
            self.size.y - self.anchor_inset,
        )
    }

    /// Nearest lane to an x coordinate, clamped onto the board
    pub fn lane_at(&self, x: f32, lane_count: usize) -> usize {
        let spacing = self.lane_spacing(lane_count);
        if lane_count == 0 || spacing <= 0.0 {
            return 0;
        }
        let lane = (x / spacing).round() - 1.0;
        (lane.max(0.0) as usize).min(lane_count - 1)
    }

    /// Line segments for every rung on the board
    pub fn rung_segments(&self, board: &Board) -> Vec<(Vec2, Vec2)> {
        let lanes = board.lane_count();
        let rows = board.row_count();
        let mut segments = Vec::with_capacity(board.rung_count());

        for (row, gaps) in board.rows().iter().enumerate() {
            let y = self.level_y((row + 1) as f32, rows);
            for (gap, _) in gaps.iter().enumerate().filter(|&(_, &r)| r) {
                segments.push((
                    Vec2::new(self.lane_x(gap as f32, lanes), y),
                    Vec2::new(self.lane_x((gap + 1) as f32, lanes), y),
                ));
            }
        }

        segments
    }
}

impl Default for LadderLayout {
    fn default() -> Self {
        // Ladder card on a phone in portrait
        Self::new(350.0, 380.0)
    }
}
