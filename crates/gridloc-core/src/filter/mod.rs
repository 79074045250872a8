//! Grid-based recursive Bayesian localization.
//!
//! The estimator tracks a probability distribution over the cells of a
//! toroidal color grid and refines it with two alternating updates:
//!
//! - prediction: `b'[i][j] = p_move * b[(i - dy) mod H][(j - dx) mod W]
//!   + (1 - p_move) * b[i][j]`
//! - correction: weight each cell by `sensor_right` when the reading
//!   matches the map (`1 - sensor_right` when it does not), then
//!   renormalize.
//!
//! Within one time step the motion update always precedes the measurement
//! update. Motion displacements are `(dy, dx)` with the row axis first.

pub mod belief;
pub mod error;
pub mod grid_filter;
pub mod motion;
pub mod sensor;
pub mod world;

pub use belief::Belief;
pub use error::{FilterError, Result};
pub use grid_filter::{localize, GridFilter};
pub use motion::{MotionCommand, MotionModel};
pub use sensor::SensorModel;
pub use world::{Color, World};
