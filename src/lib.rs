//! SCIM 2.0 schema engine for Rust.
//!
//! Validates resource documents and PATCH operations against RFC 7643
//! schemas: case-insensitive attribute matching, per-type value checks,
//! sub-attribute path resolution and mutability rules. Schemas are immutable
//! once built, so one instance can serve any number of concurrent requests.
//!
//! # Core Components
//!
//! - [`Schema`] - Validates resources and PATCH operations
//! - [`SchemaRegistry`] - Holds the core and custom schemas by id
//! - [`ValidationError`] - Closed `invalidSyntax` / `invalidValue` error taxonomy
//!
//! # Quick Start
//!
//! ```rust
//! use scim_schema::{SchemaRegistry, ValidationErrorKind};
//! use scim_schema::schema::USER_SCHEMA_ID;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//!
//! let err = registry
//!     .validate_resource(USER_SCHEMA_ID, &json!({"userName": "a", "USERNAME": "b"}))
//!     .unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::InvalidSyntax);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{
    SchemaError, SchemaResult, ValidationError, ValidationErrorKind, ValidationResult,
};
pub use schema::{
    AttributeDefinition, AttributeType, Mutability, PatchOperation, Schema, SchemaRegistry,
    ValidatedAttributes,
};
