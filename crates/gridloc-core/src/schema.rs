//! JSON Schema generation for agent-facing types.
//!
//! Schemas let agents validate scenario files before submitting them and
//! parse run reports without guessing at the format.
//!
//! # Usage
//!
//! ```bash
//! # List available schema types
//! gridloc schema --list
//!
//! # Generate schema for a specific type
//! gridloc schema Scenario
//!
//! # Generate all schemas
//! gridloc schema --all
//! ```

use schemars::schema_for;
use serde_json::Value;
use std::collections::BTreeMap;

pub use crate::output::RunReport;
pub use crate::scenario::Scenario;

/// Available schema types with their descriptions.
pub fn available_schemas() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Scenario",
            "Localization problem: map, observations, noise parameters",
        ),
        ("RunReport", "Result envelope for one localization run"),
    ]
}

/// Generate JSON Schema for a type by name.
///
/// Returns the schema as a serde_json::Value, or None if the type is
/// unknown.
pub fn generate_schema(type_name: &str) -> Option<Value> {
    let schema = match type_name {
        "Scenario" => schema_for!(Scenario),
        "RunReport" => schema_for!(RunReport),
        _ => return None,
    };

    Some(serde_json::to_value(schema).expect("schema serialization should not fail"))
}

/// Generate all schemas as a map from type name to schema.
pub fn generate_all_schemas() -> BTreeMap<String, Value> {
    let mut schemas = BTreeMap::new();
    for (name, _desc) in available_schemas() {
        if let Some(schema) = generate_schema(name) {
            schemas.insert(name.to_string(), schema);
        }
    }
    schemas
}
