//! Ladder board: lanes, rows and the rungs between them
//!
//! A board is generated once per shuffle and never mutated afterwards. A reset
//! re-uses the same board; the next shuffle replaces it wholesale.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};

/// An immutable rung layout for `lane_count` lanes and `row_count` rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    lane_count: usize,
    /// `rungs[row][gap]` connects lane `gap` with lane `gap + 1`
    rungs: Vec<Vec<bool>>,
}

/// Stored form of a board, checked by [`Board::from_rungs`] on the way in
#[derive(Deserialize)]
struct RawBoard {
    lane_count: usize,
    rungs: Vec<Vec<bool>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = LadderError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::from_rungs(raw.lane_count, raw.rungs)
    }
}

/// Generate a random board.
///
/// Gaps are scanned left to right within each row; a gap whose left neighbour
/// already holds a rung is forced empty, every other gap gets one fair coin
/// flip. The scan only looks backward, so the layout is slightly biased toward
/// the left but never has two rungs meeting at one lane.
pub fn generate<R: Rng + ?Sized>(
    lane_count: usize,
    row_count: usize,
    rng: &mut R,
) -> Result<Board> {
    check_dimensions(lane_count, row_count)?;

    let gaps = lane_count - 1;
    let mut rungs = Vec::with_capacity(row_count);
    for _ in 0..row_count {
        let mut row = vec![false; gaps];
        for i in 0..gaps {
            row[i] = if i > 0 && row[i - 1] {
                false
            } else {
                rng.random::<bool>()
            };
        }
        rungs.push(row);
    }

    log::debug!(
        "Generated {}x{} board with {} rungs",
        lane_count,
        row_count,
        rungs.iter().flatten().filter(|&&r| r).count()
    );

    Ok(Board { lane_count, rungs })
}

fn check_dimensions(lane_count: usize, row_count: usize) -> Result<()> {
    if lane_count < 2 || row_count < 1 {
        return Err(LadderError::InvalidDimensions {
            lane_count,
            row_count,
        });
    }
    Ok(())
}

impl Board {
    /// Generate a board from a seed (same seed, same board)
    pub fn from_seed(lane_count: usize, row_count: usize, seed: u64) -> Result<Self> {
        let mut rng = Pcg32::seed_from_u64(seed);
        generate(lane_count, row_count, &mut rng)
    }

    /// Build a board from an explicit rung table.
    ///
    /// Only the shape is checked. Adjacent rungs in one row are accepted so
    /// that boards from other sources can still be resolved; see
    /// [`Board::is_well_formed`].
    pub fn from_rungs(lane_count: usize, rungs: Vec<Vec<bool>>) -> Result<Self> {
        check_dimensions(lane_count, rungs.len())?;

        let expected = lane_count - 1;
        if let Some((row, found)) = rungs
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(LadderError::MalformedRow {
                row,
                expected,
                found,
            });
        }

        Ok(Self { lane_count, rungs })
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rungs.len()
    }

    /// Number of rung slots per row
    #[inline]
    pub fn gap_count(&self) -> usize {
        self.lane_count - 1
    }

    /// Whether a rung joins `gap` and `gap + 1` at `row` (false when out of range)
    #[inline]
    pub fn has_rung(&self, row: usize, gap: usize) -> bool {
        self.rungs
            .get(row)
            .and_then(|r| r.get(gap))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rungs
    }

    /// Total number of rungs on the board
    pub fn rung_count(&self) -> usize {
        self.rungs.iter().flatten().filter(|&&r| r).count()
    }

    /// True if no row has two rungs meeting at the same lane
    pub fn is_well_formed(&self) -> bool {
        self.rungs
            .iter()
            .all(|row| !row.windows(2).any(|pair| pair[0] && pair[1]))
    }
}
