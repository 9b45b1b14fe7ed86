//! Error types
//!
//! Every failure is an input-validation error the caller can correct.

use thiserror::Error;

/// Unified result type for the ladder crate.
pub type Result<T> = std::result::Result<T, LadderError>;

/// Caller-correctable errors; no operation leaves partial state behind.
#[derive(Debug, Error)]
pub enum LadderError {
    #[error("invalid board dimensions: {lane_count} lanes x {row_count} rows (need >= 2 lanes, >= 1 row)")]
    InvalidDimensions { lane_count: usize, row_count: usize },
    #[error("start lane {start_lane} out of range for {lane_count} lanes")]
    InvalidStartLane { start_lane: usize, lane_count: usize },
    #[error("row {row} has {found} rung slots, expected {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
