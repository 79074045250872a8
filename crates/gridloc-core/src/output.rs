//! Output rendering: posterior grids for humans, run reports for
//! machines.
//!
//! Nothing in this module computes; it only formats beliefs the filter
//! produced.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::Serialize;

use crate::filter::Belief;

/// Report format version.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Output format selector for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-precision probability grid.
    #[default]
    Table,
    /// Full run report as JSON.
    Json,
    /// One-line outcome summary.
    Summary,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Render a belief as bracketed rows of 5-decimal probabilities.
pub fn render_grid(belief: &Belief) -> String {
    let rows: Vec<String> = belief
        .to_rows()
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|p| format!("{:.5}", p)).collect();
            format!("[{}]", cells.join(","))
        })
        .collect();
    format!("[{}]", rows.join(",\n "))
}

/// One-line human summary of a final belief.
pub fn render_summary(belief: &Belief) -> String {
    let (i, j) = belief.argmax();
    format!(
        "most likely cell ({}, {}) with p={:.5}, entropy {:.4} nats",
        i,
        j,
        belief.max_prob(),
        belief.entropy()
    )
}

/// Machine-readable envelope for one localization run.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RunReport {
    /// Report format version.
    pub schema_version: String,
    /// Correlation id for this invocation.
    pub run_id: String,
    /// UTC timestamp the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Scenario name, when the scenario declared one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    /// SHA-256 of the scenario file, when one was loaded from disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_sha256: Option<String>,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Number of observation steps applied.
    pub steps: usize,
    /// Final posterior as rows of probabilities.
    pub posterior: Vec<Vec<f64>>,
    /// Most likely cell as `[row, col]`.
    pub argmax: [usize; 2],
    /// Probability of the most likely cell.
    pub max_prob: f64,
    /// Entropy of the posterior, in nats.
    pub entropy: f64,
}

impl RunReport {
    /// Build a report from a run's final belief.
    pub fn new(run_id: impl Into<String>, steps: usize, belief: &Belief) -> Self {
        let (i, j) = belief.argmax();
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_string(),
            run_id: run_id.into(),
            generated_at: Utc::now(),
            scenario: None,
            scenario_sha256: None,
            rows: belief.rows(),
            cols: belief.cols(),
            steps,
            posterior: belief.to_rows(),
            argmax: [i, j],
            max_prob: belief.max_prob(),
            entropy: belief.entropy(),
        }
    }

    /// Attach scenario provenance.
    pub fn with_scenario(mut self, name: Option<String>, sha256: Option<String>) -> Self {
        self.scenario = name;
        self.scenario_sha256 = sha256;
        self
    }
}
