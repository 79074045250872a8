//! Gridloc Core Library
//!
//! Grid-based Bayesian localization over a toroidal color world:
//! - Filter types and updates (predict/correct/run)
//! - Scenario files and the built-in demo
//! - Output rendering and run reports
//! - Exit codes and logging for the CLI
//!
//! The binary entry point is in `main.rs`.

pub mod exit_codes;
pub mod filter;
pub mod logging;
pub mod output;
pub mod scenario;
pub mod schema;
