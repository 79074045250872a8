//! Scenario files: the world map, observation sequences, and noise
//! parameters that drive a localization run.
//!
//! Scenarios are JSON documents validated in two layers: serde checks the
//! shape, the filter constructors check the semantics. `Scenario::demo()`
//! is the built-in example the CLI falls back to when no file is given.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::{Belief, Color, FilterError, GridFilter, MotionCommand, World};

/// Schema version for scenario files.
pub const SCENARIO_SCHEMA_VERSION: &str = "1.0.0";

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid JSON in scenario file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    #[error("Invalid scenario: {0}")]
    Invalid(#[from] FilterError),
}

/// A complete localization problem: map, observations, and noise
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Scenario {
    /// Scenario file format version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Grid map as rows of cell colors.
    pub world: Vec<Vec<Color>>,
    /// Sensor readings, one per time step.
    pub measurements: Vec<Color>,
    /// Motions as `[dy, dx]` pairs (row displacement first), one per time
    /// step, each executed before the same step's measurement.
    pub motions: Vec<[i64; 2]>,
    /// Probability that a reading matches the true cell color.
    pub sensor_right: f64,
    /// Probability that a commanded motion is executed.
    pub p_move: f64,
}

fn default_schema_version() -> String {
    SCENARIO_SCHEMA_VERSION.to_string()
}

impl Scenario {
    /// The built-in demonstration scenario: a 4x5 two-color map, five
    /// all-green readings, and a mostly-rightward path.
    pub fn demo() -> Self {
        use Color::{Green as G, Red as R};
        Self {
            schema_version: default_schema_version(),
            name: Some("demo".to_string()),
            world: vec![
                vec![R, G, G, R, R],
                vec![R, R, G, R, R],
                vec![R, R, G, G, R],
                vec![R, R, R, R, R],
            ],
            measurements: vec![G, G, G, G, G],
            motions: vec![[0, 0], [0, 1], [1, 0], [1, 0], [0, 1]],
            sensor_right: 0.7,
            p_move: 0.8,
        }
    }

    /// Motions as typed commands.
    pub fn motion_commands(&self) -> Vec<MotionCommand> {
        self.motions
            .iter()
            .map(|&[dy, dx]| MotionCommand::new(dy, dx))
            .collect()
    }

    /// Build the world map, validating its shape.
    pub fn build_world(&self) -> Result<World, FilterError> {
        World::from_rows(&self.world)
    }

    /// Build the configured filter, validating the map and both noise
    /// parameters.
    pub fn build_filter(&self) -> Result<GridFilter, FilterError> {
        let world = self.build_world()?;
        GridFilter::new(world, self.sensor_right, self.p_move)
    }

    /// Check everything a run would check, without running.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.schema_version != SCENARIO_SCHEMA_VERSION {
            return Err(ScenarioError::VersionMismatch {
                expected: SCENARIO_SCHEMA_VERSION.to_string(),
                actual: self.schema_version.clone(),
            });
        }
        if self.motions.len() != self.measurements.len() {
            return Err(ScenarioError::Invalid(FilterError::DimensionError {
                message: format!(
                    "{} motions paired with {} measurements",
                    self.motions.len(),
                    self.measurements.len()
                ),
            }));
        }
        self.build_filter()?;
        Ok(())
    }

    /// Run the scenario from a uniform prior to its final belief.
    pub fn run(&self) -> Result<Belief, ScenarioError> {
        let filter = self.build_filter()?;
        let belief = filter.run(&self.motion_commands(), &self.measurements)?;
        Ok(belief)
    }
}

/// A scenario read from disk, with provenance for reports.
#[derive(Debug, Clone)]
pub struct LoadedScenario {
    /// The parsed and validated scenario.
    pub scenario: Scenario,
    /// Path the scenario was read from.
    pub path: PathBuf,
    /// SHA-256 hex digest of the file bytes.
    pub sha256: String,
}

/// Read, parse, and validate a scenario file.
pub fn load_scenario(path: &Path) -> Result<LoadedScenario, ScenarioError> {
    if !path.exists() {
        return Err(ScenarioError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario =
        serde_json::from_slice(&bytes).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    scenario.validate()?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let sha256 = hex::encode(hasher.finalize());

    Ok(LoadedScenario {
        scenario,
        path: path.to_path_buf(),
        sha256,
    })
}
