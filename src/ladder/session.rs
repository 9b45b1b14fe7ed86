//! Ladder game state
//!
//! Holds the current board and at most one trace. A board stays fixed until
//! the next shuffle, so a trace being played back is never resolved against a
//! board that has since been replaced.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::board::{Board, generate};
use super::path::{Trace, resolve};
use crate::clamp_lanes;
use crate::error::{LadderError, Result};
use crate::settings::Settings;

/// One ladder game: board, selection and the RNG used for shuffles
#[derive(Debug, Clone)]
pub struct LadderGame<R: Rng = Pcg32> {
    rng: R,
    row_count: usize,
    board: Board,
    trace: Option<Trace>,
}

impl LadderGame<Pcg32> {
    /// Create a game with a seeded RNG (same seed, same sequence of boards)
    pub fn seeded(settings: &Settings, seed: u64) -> Result<Self> {
        Self::new(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> LadderGame<R> {
    /// Create a game and generate its first board
    pub fn new(settings: &Settings, mut rng: R) -> Result<Self> {
        let row_count = settings.clamped_row_count();
        let board = generate(settings.clamped_lane_count(), row_count, &mut rng)?;
        Ok(Self {
            rng,
            row_count,
            board,
            trace: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lane_count(&self) -> usize {
        self.board.lane_count()
    }

    /// The trace of the selected lane, if one was picked since the last reset
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Rungs stay hidden until a start lane is chosen
    pub fn rungs_visible(&self) -> bool {
        self.trace.is_some()
    }

    /// Change the lane count (clamped to the stepper range) and shuffle
    pub fn set_lane_count(&mut self, lanes: usize) -> Result<()> {
        let lanes = clamp_lanes(lanes);
        log::info!("Ladder lane count -> {}", lanes);
        self.trace = None;
        self.board = generate(lanes, self.row_count, &mut self.rng)?;
        Ok(())
    }

    /// Clear the selection and keep the board
    pub fn reset(&mut self) {
        self.trace = None;
    }

    /// Clear the selection and replace the board
    pub fn shuffle(&mut self) -> Result<()> {
        self.trace = None;
        self.board = generate(self.board.lane_count(), self.row_count, &mut self.rng)?;
        log::info!(
            "Shuffled ladder: {} lanes, {} rungs",
            self.board.lane_count(),
            self.board.rung_count()
        );
        Ok(())
    }

    /// Pick a start lane.
    ///
    /// Returns `Ok(None)` if a trace is already showing; the game must be reset
    /// or shuffled before another lane can be picked.
    pub fn select(&mut self, start_lane: usize) -> Result<Option<&Trace>> {
        if start_lane >= self.board.lane_count() {
            return Err(LadderError::InvalidStartLane {
                start_lane,
                lane_count: self.board.lane_count(),
            });
        }
        if self.trace.is_some() {
            log::debug!("Ignoring lane {} while a trace is shown", start_lane);
            return Ok(None);
        }

        let trace = resolve(&self.board, start_lane)?;
        log::info!(
            "Ladder {} -> {}",
            trace.start_lane + 1,
            trace.exit_lane + 1
        );
        let trace: &Trace = self.trace.insert(trace);
        Ok(Some(trace))
    }
}
