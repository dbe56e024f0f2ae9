//! Schema definitions and validation for SCIM resources.
//!
//! This module provides the schema model, the validation engine for resource
//! documents and PATCH operations, and the registry implementing RFC 7643
//! SCIM core schemas.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema definition with attributes and metadata
//! - [`AttributeDefinition`] - Individual attribute specifications and constraints
//! - [`SchemaRegistry`] - Registry for managing and accessing schemas
//! - [`PatchOperation`] - PATCH operation kinds and their mutability rules
//!
//! # Examples
//!
//! ```rust
//! use scim_schema::schema::SchemaRegistry;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let user_schema = registry.get_user_schema().ok_or("no user schema")?;
//!
//! let attributes = user_schema.validate(&json!({"username": "bjensen"}))?;
//! assert_eq!(attributes["userName"], json!("bjensen"));
//!
//! let patch = json!({"name.familyName": "Jensen"});
//! user_schema.validate_patch_operation_value("replace", patch.as_object().ok_or("not an object")?)?;
//! # Ok(())
//! # }
//! ```

mod attribute;
pub mod embedded;
pub mod mutability;
pub mod path;
pub mod registry;
pub mod resolver;
mod serialization;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use embedded::{GROUP_SCHEMA_ID, USER_SCHEMA_ID};
pub use mutability::PatchOperation;
pub use path::AttributePath;
pub use registry::SchemaRegistry;
pub use resolver::resolve_attribute;
pub use serialization::{AttributeDocument, SchemaDocument};
pub use types::{AttributeDefinition, AttributeType, Mutability, Returned, Schema, Uniqueness};
pub use validation::ValidatedAttributes;
