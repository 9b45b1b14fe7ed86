//! Ladder settings and preferences
//!
//! Stored by the host app as a JSON string under [`Settings::STORAGE_KEY`].

use serde::{Deserialize, Serialize};

use crate::clamp_lanes;
use crate::consts::*;

/// Ladder game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lanes on a new board (stepper range 2-6)
    pub lane_count: usize,
    /// Rows on a new board
    pub row_count: usize,

    // === Playback ===
    /// Rung fade-in before the path starts drawing (seconds)
    pub reveal_delay_secs: f32,
    /// Time to draw the whole path (seconds)
    pub playback_secs: f32,
    /// Pause before the exit lane is announced (seconds)
    pub result_delay_secs: f32,

    // === History ===
    /// Entries kept in the result history
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lane_count: DEFAULT_LANES,
            row_count: DEFAULT_ROWS,

            reveal_delay_secs: REVEAL_DELAY_SECS,
            playback_secs: PLAYBACK_SECS,
            result_delay_secs: RESULT_DELAY_SECS,

            history_limit: HISTORY_LIMIT,
        }
    }
}

impl Settings {
    /// Key the host app stores the JSON under
    pub const STORAGE_KEY: &'static str = "GameMateLadderSettings";

    /// Lane count forced into the stepper range
    pub fn clamped_lane_count(&self) -> usize {
        clamp_lanes(self.lane_count)
    }

    /// Row count forced into `1..=MAX_ROWS`
    pub fn clamped_row_count(&self) -> usize {
        self.row_count.clamp(1, MAX_ROWS)
    }

    /// Parse stored settings, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded ladder settings");
                settings
            }
            Err(err) => {
                log::info!("Using default ladder settings ({})", err);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
