//! Color sensing and the correction (measurement) update.

use gridloc_math::normalize_in_place;

use super::belief::Belief;
use super::error::{FilterError, Result};
use super::world::{Color, World};

/// Sensor accuracy model: a reading matches the true cell color with
/// probability `sensor_right`.
///
/// `sensor_right = 0.5` makes the sensor uninformative (correction becomes
/// a no-op after normalization) and is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorModel {
    sensor_right: f64,
}

impl SensorModel {
    /// Fails when `sensor_right` is NaN or outside `[0, 1]`.
    pub fn new(sensor_right: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&sensor_right) {
            return Err(FilterError::InvalidParameter {
                name: "sensor_right",
                value: sensor_right,
            });
        }
        Ok(Self { sensor_right })
    }

    /// Probability of a correct reading.
    pub fn sensor_right(&self) -> f64 {
        self.sensor_right
    }

    /// Likelihood of a reading given whether the cell matches it.
    pub fn likelihood(&self, hit: bool) -> f64 {
        if hit {
            self.sensor_right
        } else {
            1.0 - self.sensor_right
        }
    }

    /// Correction step: weight each cell by the likelihood of
    /// `measurement` and renormalize.
    ///
    /// Fails with `DegenerateDistribution` when all weighted mass is zero
    /// (a perfect sensor reading a color the prior rules out), so the
    /// division never produces NaN.
    pub fn correct(&self, world: &World, belief: &Belief, measurement: Color) -> Result<Belief> {
        if belief.rows() != world.rows() || belief.cols() != world.cols() {
            return Err(FilterError::DimensionError {
                message: format!(
                    "belief is {}x{} but world is {}x{}",
                    belief.rows(),
                    belief.cols(),
                    world.rows(),
                    world.cols()
                ),
            });
        }
        let rows = world.rows();
        let cols = world.cols();
        let mut weights = vec![0.0; belief.cell_count()];
        for i in 0..rows {
            for j in 0..cols {
                let hit = world.color_at(i, j) == measurement;
                weights[i * cols + j] = belief.prob(i, j) * self.likelihood(hit);
            }
        }
        match normalize_in_place(&mut weights) {
            Some(_) => Ok(Belief::from_vec_unchecked(rows, cols, weights)),
            None => Err(FilterError::DegenerateDistribution {
                index: None,
                sum: weights.iter().sum(),
            }),
        }
    }
}
