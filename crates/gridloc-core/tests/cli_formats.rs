//! CLI output format tests.
//!
//! The built-in demo scenario is deterministic, so these tests pin real
//! output rather than just shape.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

use gridloc_core::scenario::Scenario;

/// Get a Command for the gridloc binary.
fn gridloc() -> Command {
    Command::cargo_bin("gridloc").expect("gridloc binary should exist")
}

fn demo_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let json = serde_json::to_string_pretty(&Scenario::demo()).expect("demo serializes");
    file.write_all(json.as_bytes()).expect("write scenario");
    file
}

// ============================================================================
// Run command output
// ============================================================================

mod run_output {
    use super::*;

    #[test]
    fn bare_invocation_runs_the_demo() {
        gridloc()
            .assert()
            .success()
            .stdout(predicate::str::contains("0.35351"));
    }

    #[test]
    fn run_without_file_uses_the_demo() {
        gridloc()
            .arg("run")
            .assert()
            .success()
            .stdout(predicate::str::contains("0.35351"));
    }

    #[test]
    fn run_demo_flag_matches_bare_run() {
        let bare = gridloc().arg("run").output().expect("run");
        let flagged = gridloc().args(["run", "--demo"]).output().expect("run --demo");
        assert_eq!(bare.stdout, flagged.stdout);
    }

    #[test]
    fn table_output_is_a_bracketed_grid() {
        let output = gridloc().arg("run").output().expect("run");
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let grid = stdout.trim();
        assert!(grid.starts_with("[["), "grid: {grid}");
        assert!(grid.ends_with("]]"), "grid: {grid}");
        assert_eq!(grid.lines().count(), 4, "one line per world row");
    }

    #[test]
    fn summary_output_names_the_peak_cell() {
        gridloc()
            .args(["run", "-f", "summary"])
            .assert()
            .success()
            .stdout(predicate::str::contains("most likely cell (2, 3)"))
            .stdout(predicate::str::contains("p=0.35351"));
    }

    #[test]
    fn json_output_is_a_complete_report() {
        let output = gridloc().args(["run", "-f", "json"]).output().expect("run");
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let report: serde_json::Value =
            serde_json::from_str(&stdout).expect("report should be valid JSON");

        assert_eq!(report["schema_version"], "1.0.0");
        assert_eq!(report["scenario"], "demo");
        assert_eq!(report["rows"], 4);
        assert_eq!(report["cols"], 5);
        assert_eq!(report["steps"], 5);
        assert_eq!(report["argmax"], serde_json::json!([2, 3]));

        let run_id = report["run_id"].as_str().expect("run_id is a string");
        assert!(run_id.starts_with("run-"), "run_id: {run_id}");

        let max_prob = report["max_prob"].as_f64().expect("max_prob is a number");
        assert!((max_prob - 0.353507229552127).abs() < 1e-12);

        // No file was loaded, so there is no digest to report.
        assert!(report.get("scenario_sha256").is_none());
    }

    #[test]
    fn run_from_file_reports_the_digest() {
        let file = demo_file();
        let output = gridloc()
            .args(["run", "-f", "json"])
            .arg(file.path())
            .output()
            .expect("run");
        assert!(output.status.success());

        let report: serde_json::Value =
            serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
                .expect("report should be valid JSON");
        let digest = report["scenario_sha256"]
            .as_str()
            .expect("digest is a string");
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn file_run_matches_demo_run() {
        let file = demo_file();
        let from_file = gridloc().arg("run").arg(file.path()).output().expect("run");
        let from_demo = gridloc().arg("run").output().expect("run");
        assert_eq!(from_file.stdout, from_demo.stdout);
    }

    #[test]
    fn trace_steps_prints_intermediate_beliefs() {
        gridloc()
            .args(["run", "--trace-steps"])
            .assert()
            .success()
            .stderr(predicate::str::contains("belief after step 0:"))
            .stderr(predicate::str::contains("belief after step 4:"));
    }
}

// ============================================================================
// Check command output
// ============================================================================

mod check_output {
    use super::*;

    #[test]
    fn check_reports_scenario_shape() {
        let file = demo_file();
        gridloc()
            .arg("check")
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: demo"))
            .stdout(predicate::str::contains("5 steps"))
            .stdout(predicate::str::contains("4x5 world"));
    }
}

// ============================================================================
// Schema command output
// ============================================================================

mod schema_output {
    use super::*;

    #[test]
    fn schema_list_names_both_types() {
        gridloc()
            .args(["schema", "--list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Scenario"))
            .stdout(predicate::str::contains("RunReport"));
    }

    #[test]
    fn named_schema_is_valid_json() {
        let output = gridloc().args(["schema", "Scenario"]).output().expect("schema");
        assert!(output.status.success());

        let schema: serde_json::Value =
            serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
                .expect("schema should be valid JSON");
        assert_eq!(schema["title"], "Scenario");
        assert!(schema["properties"].get("world").is_some());
        assert!(schema["properties"].get("sensor_right").is_some());
    }

    #[test]
    fn schema_all_bundles_every_type() {
        let output = gridloc().args(["schema", "--all"]).output().expect("schema");
        assert!(output.status.success());

        let bundle: serde_json::Value =
            serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
                .expect("bundle should be valid JSON");
        assert!(bundle.get("Scenario").is_some());
        assert!(bundle.get("RunReport").is_some());
    }
}

// ============================================================================
// Version output
// ============================================================================

mod version_output {
    use super::*;

    #[test]
    fn version_contains_name_and_number() {
        gridloc()
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("gridloc"))
            .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
    }

    #[test]
    fn json_version_is_structured() {
        let output = gridloc()
            .args(["-f", "json", "version"])
            .output()
            .expect("version");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
                .expect("version should be valid JSON");
        assert_eq!(value["name"], "gridloc");
    }

    #[test]
    fn version_flag_also_works() {
        gridloc()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
    }
}

// ============================================================================
// Help output
// ============================================================================

mod help_output {
    use super::*;

    #[test]
    fn help_lists_commands_and_options() {
        gridloc()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("Commands:"))
            .stdout(predicate::str::contains("run"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("schema"));
    }

    #[test]
    fn run_help_documents_the_demo_flag() {
        gridloc()
            .args(["run", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--demo"))
            .stdout(predicate::str::contains("--trace-steps"));
    }
}
