//! Position belief: a probability distribution over grid cells.

use gridloc_math::{argmax, entropy};

use super::error::{FilterError, Result};

/// Probability distribution over the cells of a grid, stored row-major.
///
/// A belief is a value: every update reads one belief and produces a fresh
/// one, so a prior is never observed half-updated.
#[derive(Debug, Clone, PartialEq)]
pub struct Belief {
    rows: usize,
    cols: usize,
    probs: Vec<f64>,
}

impl Belief {
    /// Uniform distribution: every cell gets `1 / (rows * cols)`.
    pub fn uniform(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(FilterError::DimensionError {
                message: format!("belief dimensions must be positive, got {}x{}", rows, cols),
            });
        }
        let p = 1.0 / (rows * cols) as f64;
        Ok(Self {
            rows,
            cols,
            probs: vec![p; rows * cols],
        })
    }

    /// Build a belief from row-major probabilities.
    ///
    /// Validates the shape, the `[0, 1]` range of every entry, and that
    /// the total is 1 within `1e-6`.
    pub fn from_probs(rows: usize, cols: usize, probs: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 || probs.len() != rows * cols {
            return Err(FilterError::DimensionError {
                message: format!(
                    "{} probabilities do not fill a {}x{} grid",
                    probs.len(),
                    rows,
                    cols
                ),
            });
        }
        for &p in &probs {
            if !(0.0..=1.0).contains(&p) {
                return Err(FilterError::InvalidParameter {
                    name: "probability",
                    value: p,
                });
            }
        }
        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(FilterError::DegenerateDistribution { index: None, sum });
        }
        Ok(Self { rows, cols, probs })
    }

    /// Constructor for update results whose invariants hold by
    /// construction.
    pub(crate) fn from_vec_unchecked(rows: usize, cols: usize, probs: Vec<f64>) -> Self {
        debug_assert_eq!(probs.len(), rows * cols);
        Self { rows, cols, probs }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.probs.len()
    }

    /// Probability of the cell at row `i`, column `j`.
    ///
    /// Panics when an index is out of bounds.
    pub fn prob(&self, i: usize, j: usize) -> f64 {
        self.probs[i * self.cols + j]
    }

    /// Total probability mass (1 up to float rounding).
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Most likely cell as `(row, col)`, ties resolving to the first cell
    /// in row-major order.
    pub fn argmax(&self) -> (usize, usize) {
        let idx = argmax(&self.probs).unwrap_or(0);
        (idx / self.cols, idx % self.cols)
    }

    /// Probability of the most likely cell.
    pub fn max_prob(&self) -> f64 {
        self.probs.iter().cloned().fold(0.0, f64::max)
    }

    /// Shannon entropy of the distribution, in nats.
    pub fn entropy(&self) -> f64 {
        entropy(&self.probs)
    }

    /// Row-major view of the probabilities.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Probabilities as rows, for rendering and reports.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.probs.chunks(self.cols).map(|c| c.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn uniform_spreads_mass_evenly() {
        let belief = Belief::uniform(4, 5).unwrap();
        assert_eq!(belief.cell_count(), 20);
        for i in 0..4 {
            for j in 0..5 {
                assert!(approx_eq(belief.prob(i, j), 0.05, 1e-12));
            }
        }
        assert!(approx_eq(belief.sum(), 1.0, 1e-12));
    }

    #[test]
    fn uniform_rejects_zero_dimensions() {
        assert!(matches!(
            Belief::uniform(0, 5),
            Err(FilterError::DimensionError { .. })
        ));
        assert!(matches!(
            Belief::uniform(3, 0),
            Err(FilterError::DimensionError { .. })
        ));
    }

    #[test]
    fn from_probs_validates_shape() {
        let result = Belief::from_probs(2, 2, vec![0.5, 0.5]);
        assert!(matches!(result, Err(FilterError::DimensionError { .. })));
    }

    #[test]
    fn from_probs_validates_range() {
        let result = Belief::from_probs(1, 2, vec![1.5, -0.5]);
        assert!(matches!(
            result,
            Err(FilterError::InvalidParameter { name: "probability", .. })
        ));

        let result = Belief::from_probs(1, 2, vec![f64::NAN, 1.0]);
        assert!(matches!(result, Err(FilterError::InvalidParameter { .. })));
    }

    #[test]
    fn from_probs_validates_sum() {
        let result = Belief::from_probs(1, 2, vec![0.6, 0.6]);
        match result {
            Err(FilterError::DegenerateDistribution { index: None, sum }) => {
                assert!(approx_eq(sum, 1.2, 1e-12));
            }
            other => panic!("expected DegenerateDistribution, got {other:?}"),
        }
    }

    #[test]
    fn argmax_and_max_prob_agree() {
        let belief = Belief::from_probs(2, 3, vec![0.1, 0.1, 0.1, 0.1, 0.5, 0.1]).unwrap();
        assert_eq!(belief.argmax(), (1, 1));
        assert!(approx_eq(belief.max_prob(), 0.5, 1e-12));
    }

    #[test]
    fn argmax_ties_resolve_to_first_cell() {
        let belief = Belief::from_probs(2, 2, vec![0.3, 0.3, 0.3, 0.1]).unwrap();
        assert_eq!(belief.argmax(), (0, 0));
    }

    #[test]
    fn entropy_of_point_mass_is_zero() {
        let belief = Belief::from_probs(1, 3, vec![0.0, 1.0, 0.0]).unwrap();
        assert!(approx_eq(belief.entropy(), 0.0, 1e-12));
    }

    #[test]
    fn to_rows_matches_layout() {
        let belief = Belief::from_probs(2, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(belief.to_rows(), vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
    }
}
