//! Timed reveal of a precomputed trace
//!
//! The path is resolved in full before playback starts; this only decides how
//! much of it is visible after `elapsed` seconds. The caller owns the clock
//! and starts it when the lane is picked: rungs fade in for the reveal delay,
//! then the waypoints step in, then the exit lane is announced.

use glam::Vec2;

use super::path::Trace;
use crate::settings::Settings;

/// Reveal schedule for one trace
#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    /// Seconds before the first waypoint appears
    reveal_delay: f32,
    /// Seconds between consecutive waypoints
    point_delay: f32,
    result_delay: f32,
}

impl Playback {
    pub fn new(trace: Trace, settings: &Settings) -> Self {
        let count = trace.waypoints.len().max(1);
        Self {
            reveal_delay: settings.reveal_delay_secs.max(0.0),
            point_delay: settings.playback_secs.max(0.0) / count as f32,
            result_delay: settings.result_delay_secs.max(0.0),
            trace,
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    #[inline]
    pub fn reveal_delay(&self) -> f32 {
        self.reveal_delay
    }

    #[inline]
    pub fn point_delay(&self) -> f32 {
        self.point_delay
    }

    /// Waypoints visible after `elapsed` seconds (none during the reveal delay)
    pub fn visible_count(&self, elapsed: f32) -> usize {
        let len = self.trace.waypoints.len();
        let drawing = elapsed - self.reveal_delay;
        if len == 0 || drawing < 0.0 {
            return 0;
        }
        if self.point_delay <= 0.0 {
            return len;
        }
        let shown = (drawing / self.point_delay).floor() as usize + 1;
        shown.min(len)
    }

    pub fn visible(&self, elapsed: f32) -> &[Vec2] {
        &self.trace.waypoints[..self.visible_count(elapsed)]
    }

    /// Whether the last waypoint has been reached
    pub fn is_drawn(&self, elapsed: f32) -> bool {
        self.visible_count(elapsed) == self.trace.waypoints.len()
    }

    /// Time at which the exit lane is announced
    pub fn total_secs(&self) -> f32 {
        let last = self.trace.waypoints.len().saturating_sub(1);
        self.reveal_delay + last as f32 * self.point_delay + self.result_delay
    }

    /// Exit lane, once the result delay after the last waypoint has passed
    pub fn revealed_exit(&self, elapsed: f32) -> Option<usize> {
        (elapsed >= self.total_secs()).then_some(self.trace.exit_lane)
    }
}
