//! Motion commands and the prediction (motion) update.

use gridloc_math::floor_mod;

use super::belief::Belief;
use super::error::{FilterError, Result};

/// One commanded displacement on the grid.
///
/// Axis order is row-first: `dy` moves along rows (positive is down) and
/// `dx` along columns (positive is right), so "move right one cell" is
/// `MotionCommand { dy: 0, dx: 1 }` and "move down one cell" is
/// `MotionCommand { dy: 1, dx: 0 }`. Both axes wrap toroidally, and
/// negative displacements are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionCommand {
    /// Row displacement; positive moves down.
    pub dy: i64,
    /// Column displacement; positive moves right.
    pub dx: i64,
}

impl MotionCommand {
    /// A displacement of `dy` rows and `dx` columns.
    pub fn new(dy: i64, dx: i64) -> Self {
        Self { dy, dx }
    }

    /// No displacement.
    pub fn stay() -> Self {
        Self::new(0, 0)
    }

    /// One row down.
    pub fn down() -> Self {
        Self::new(1, 0)
    }

    /// One row up.
    pub fn up() -> Self {
        Self::new(-1, 0)
    }

    /// One column right.
    pub fn right() -> Self {
        Self::new(0, 1)
    }

    /// One column left.
    pub fn left() -> Self {
        Self::new(0, -1)
    }
}

impl std::fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.dy, self.dx)
    }
}

/// Motion execution model: a commanded move succeeds with probability
/// `p_move`, otherwise the robot stays put. Overshoot is not modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    p_move: f64,
}

impl MotionModel {
    /// Fails when `p_move` is NaN or outside `[0, 1]`.
    pub fn new(p_move: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&p_move) {
            return Err(FilterError::InvalidParameter {
                name: "p_move",
                value: p_move,
            });
        }
        Ok(Self { p_move })
    }

    /// Success probability of a commanded move.
    pub fn p_move(&self) -> f64 {
        self.p_move
    }

    /// Prediction step: convolve the belief with the two-outcome motion
    /// kernel.
    ///
    /// Each destination cell receives `p_move` times the mass of the cell
    /// the motion departs from, plus `1 - p_move` times its own mass. The
    /// source index uses floored modulo, so negative displacements wrap
    /// correctly. Total mass is conserved by construction and the result
    /// is not renormalized.
    pub fn predict(&self, belief: &Belief, motion: MotionCommand) -> Belief {
        let rows = belief.rows();
        let cols = belief.cols();
        // Reduce displacements once so the per-cell index math stays in
        // range for any i64 command.
        let dy = floor_mod(motion.dy, rows);
        let dx = floor_mod(motion.dx, cols);
        let stay = 1.0 - self.p_move;
        let mut next = vec![0.0; belief.cell_count()];
        for i in 0..rows {
            let src_i = (i + rows - dy) % rows;
            for j in 0..cols {
                let src_j = (j + cols - dx) % cols;
                next[i * cols + j] =
                    self.p_move * belief.prob(src_i, src_j) + stay * belief.prob(i, j);
            }
        }
        Belief::from_vec_unchecked(rows, cols, next)
    }
}
