//! Common test utilities for SCIM schema validation testing.
//!
//! Provides the shared schemas, a logging hook and small helpers used by the
//! integration test files.

#![allow(dead_code)]

use scim_schema::schema::{AttributeDefinition, Mutability, Returned, Schema, SchemaRegistry};
use serde_json::{Map, Value};

pub const DEVICE_SCHEMA_ID: &str = "urn:example:params:scim:schemas:2.0:Device";

/// Initialise `env_logger` once so `RUST_LOG=trace` shows validation logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Registry with the embedded core schemas.
pub fn core_registry() -> SchemaRegistry {
    init_logging();
    SchemaRegistry::new().expect("embedded schemas must load")
}

/// A custom schema exercising every mutability class and data type.
pub fn device_schema() -> Schema {
    Schema::new(
        DEVICE_SCHEMA_ID,
        vec![
            AttributeDefinition::string("serialNumber")
                .required()
                .case_exact()
                .with_mutability(Mutability::Immutable),
            AttributeDefinition::string("label"),
            AttributeDefinition::string("firmwareHash").with_mutability(Mutability::ReadOnly),
            AttributeDefinition::string("enrollmentSecret")
                .with_mutability(Mutability::WriteOnly)
                .with_returned(Returned::Never),
            AttributeDefinition::integer("slots"),
            AttributeDefinition::decimal("weightKg"),
            AttributeDefinition::boolean("managed"),
            AttributeDefinition::date_time("purchasedAt"),
            AttributeDefinition::binary("certificate"),
            AttributeDefinition::complex(
                "location",
                vec![
                    AttributeDefinition::string("building").required(),
                    AttributeDefinition::string("room"),
                    AttributeDefinition::string("rackId").with_mutability(Mutability::Immutable),
                ],
            ),
            AttributeDefinition::complex(
                "interfaces",
                vec![
                    AttributeDefinition::string("mac").required(),
                    AttributeDefinition::string("kind").with_canonical_values(["ethernet", "wifi"]),
                    AttributeDefinition::boolean("primary"),
                ],
            )
            .multi_valued(),
        ],
    )
    .expect("device schema must be well formed")
    .with_name("Device")
    .with_description("Network-attached device")
}

/// Turn a JSON object literal into PATCH path/value pairs.
pub fn patch_values(values: Value) -> Map<String, Value> {
    match values {
        Value::Object(map) => map,
        other => panic!("patch values must be an object, got {}", other),
    }
}
