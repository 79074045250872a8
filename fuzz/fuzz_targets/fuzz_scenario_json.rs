//! Fuzz target for scenario file parsing.
//!
//! Tests that JSON scenario parsing and validation handle arbitrary input
//! without panicking. Scenario files may come from untrusted sources.

#![no_main]

use gridloc_core::scenario::Scenario;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing should never panic, only return an error
    let Ok(scenario) = serde_json::from_slice::<Scenario>(data) else {
        return;
    };

    // Validation is cheap for any shape
    let valid = scenario.validate().is_ok();

    // Only run bounded scenarios so the fuzzer spends time on parsing
    // rather than on giant grids
    let cells: usize = scenario.world.iter().map(|row| row.len()).sum();
    if valid && cells <= 4096 && scenario.measurements.len() <= 64 {
        let _ = scenario.run();
    }
});
