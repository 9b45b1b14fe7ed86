//! Ladder Mate - the ladder (Amidakuji) engine behind the GameMate mini-games
//!
//! Core modules:
//! - `ladder`: Board generation, path resolution, layout and playback
//! - `settings`: Ladder preferences (JSON, falls back to defaults)
//! - `history`: Result log shared by all mini-games
//! - `error`: Input-validation errors

pub mod error;
pub mod history;
pub mod ladder;
pub mod settings;

pub use error::{LadderError, Result};
pub use history::{GameKind, History, LogEntry};
pub use ladder::{Board, LadderGame, LadderLayout, Playback, Trace, generate, resolve};
pub use settings::Settings;

/// Ladder configuration constants
pub mod consts {
    /// Fewest lanes a board can have
    pub const MIN_LANES: usize = 2;
    /// Most lanes the lane-count stepper allows
    pub const MAX_LANES: usize = 6;
    /// Lane count on first launch
    pub const DEFAULT_LANES: usize = 4;
    /// Horizontal layers between the top and bottom anchors
    pub const DEFAULT_ROWS: usize = 6;
    /// Most rows a stored setting can ask for
    pub const MAX_ROWS: usize = 24;

    /// Distance from the view edge to the top/bottom anchor circles
    pub const ANCHOR_INSET: f32 = 30.0;

    /// Rungs fade in for this long before the path starts drawing
    pub const REVEAL_DELAY_SECS: f32 = 0.5;
    /// Time to draw the whole path, regardless of its length
    pub const PLAYBACK_SECS: f32 = 1.5;
    /// Pause between the last waypoint and the result announcement
    pub const RESULT_DELAY_SECS: f32 = 0.2;

    /// History entries kept before the oldest are dropped
    pub const HISTORY_LIMIT: usize = 100;
}

/// Clamp a requested lane count into the stepper range
#[inline]
pub fn clamp_lanes(lanes: usize) -> usize {
    lanes.clamp(consts::MIN_LANES, consts::MAX_LANES)
}
