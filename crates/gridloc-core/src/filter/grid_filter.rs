//! The grid filter: interleaved motion and measurement updates.

use tracing::debug;

use super::belief::Belief;
use super::error::{FilterError, Result};
use super::motion::{MotionCommand, MotionModel};
use super::sensor::SensorModel;
use super::world::{Color, World};

/// Recursive Bayesian position estimator over a toroidal color grid.
///
/// Owns the world map and both noise models. Updates are pure with respect
/// to beliefs: they read a prior and return a fresh posterior.
#[derive(Debug, Clone)]
pub struct GridFilter {
    world: World,
    sensor: SensorModel,
    motion: MotionModel,
}

impl GridFilter {
    /// Build a filter over `world` with the given noise parameters.
    ///
    /// The world's shape is validated at its own construction; this checks
    /// `sensor_right` and `p_move`.
    pub fn new(world: World, sensor_right: f64, p_move: f64) -> Result<Self> {
        let sensor = SensorModel::new(sensor_right)?;
        let motion = MotionModel::new(p_move)?;
        Ok(Self {
            world,
            sensor,
            motion,
        })
    }

    /// The world map.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The sensor noise model.
    pub fn sensor(&self) -> &SensorModel {
        &self.sensor
    }

    /// The motion noise model.
    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    /// Uniform prior over the world's cells.
    pub fn uniform_prior(&self) -> Belief {
        let n = self.world.cell_count();
        Belief::from_vec_unchecked(
            self.world.rows(),
            self.world.cols(),
            vec![1.0 / n as f64; n],
        )
    }

    /// Motion update: checks the belief's shape against the world, then
    /// applies the prediction step.
    pub fn predict(&self, belief: &Belief, motion: MotionCommand) -> Result<Belief> {
        self.check_shape(belief)?;
        Ok(self.motion.predict(belief, motion))
    }

    /// Measurement update.
    pub fn correct(&self, belief: &Belief, measurement: Color) -> Result<Belief> {
        self.sensor.correct(&self.world, belief, measurement)
    }

    /// One time step: motion first, then measurement.
    ///
    /// The order is a protocol contract: an observation pairs the motion
    /// executed during the step with the reading taken after it.
    pub fn step(
        &self,
        belief: &Belief,
        motion: MotionCommand,
        measurement: Color,
    ) -> Result<Belief> {
        let predicted = self.predict(belief, motion)?;
        self.correct(&predicted, measurement)
    }

    /// Run the full cycle from a uniform prior, returning the final
    /// belief.
    ///
    /// `motions[k]` and `measurements[k]` describe the same time step.
    /// Fails before any computation when the sequences differ in length; a
    /// degenerate correction mid-sequence is reported with the index of
    /// its observation. Empty sequences return the uniform prior.
    pub fn run(&self, motions: &[MotionCommand], measurements: &[Color]) -> Result<Belief> {
        check_lengths(motions, measurements)?;
        let mut belief = self.uniform_prior();
        for (idx, (&motion, &measurement)) in motions.iter().zip(measurements.iter()).enumerate() {
            belief = self
                .step(&belief, motion, measurement)
                .map_err(|e| at_observation(e, idx))?;
            debug!(
                step = idx,
                max_prob = belief.max_prob(),
                entropy = belief.entropy(),
                "belief updated"
            );
        }
        Ok(belief)
    }

    /// Like [`GridFilter::run`], returning the belief after every step.
    ///
    /// The returned history has one entry per observation; the run itself
    /// retains nothing.
    pub fn run_with_history(
        &self,
        motions: &[MotionCommand],
        measurements: &[Color],
    ) -> Result<Vec<Belief>> {
        check_lengths(motions, measurements)?;
        let mut history = Vec::with_capacity(motions.len());
        let mut belief = self.uniform_prior();
        for (idx, (&motion, &measurement)) in motions.iter().zip(measurements.iter()).enumerate() {
            belief = self
                .step(&belief, motion, measurement)
                .map_err(|e| at_observation(e, idx))?;
            history.push(belief.clone());
        }
        Ok(history)
    }

    fn check_shape(&self, belief: &Belief) -> Result<()> {
        if belief.rows() != self.world.rows() || belief.cols() != self.world.cols() {
            return Err(FilterError::DimensionError {
                message: format!(
                    "belief is {}x{} but world is {}x{}",
                    belief.rows(),
                    belief.cols(),
                    self.world.rows(),
                    self.world.cols()
                ),
            });
        }
        Ok(())
    }
}

fn check_lengths(motions: &[MotionCommand], measurements: &[Color]) -> Result<()> {
    if motions.len() != measurements.len() {
        return Err(FilterError::DimensionError {
            message: format!(
                "{} motions paired with {} measurements",
                motions.len(),
                measurements.len()
            ),
        });
    }
    Ok(())
}

fn at_observation(err: FilterError, index: usize) -> FilterError {
    match err {
        FilterError::DegenerateDistribution { index: None, sum } => {
            FilterError::DegenerateDistribution {
                index: Some(index),
                sum,
            }
        }
        other => other,
    }
}

/// One-call convenience: build a filter over `world` and run the
/// observation cycle from a uniform prior.
pub fn localize(
    world: World,
    measurements: &[Color],
    motions: &[MotionCommand],
    sensor_right: f64,
    p_move: f64,
) -> Result<Belief> {
    let filter = GridFilter::new(world, sensor_right, p_move)?;
    filter.run(motions, measurements)
}
