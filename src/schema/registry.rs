//! Schema registry for loading, managing, and accessing SCIM schemas.
//!
//! The registry owns immutable [`Schema`] values keyed by id and routes
//! validation requests to them. Wrap it in an `Arc` to share it between
//! request handlers; nothing in it is mutated after loading.

use super::embedded::{self, GROUP_SCHEMA_ID, USER_SCHEMA_ID};
use super::types::Schema;
use super::validation::ValidatedAttributes;
use crate::error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
use log::{debug, info};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Registry for SCIM schemas with validation capabilities.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl SchemaRegistry {
    /// Create a new schema registry with the embedded core schemas.
    pub fn new() -> SchemaResult<Self> {
        Self::with_embedded_schemas()
    }

    /// Create a registry holding the embedded core User and Group schemas.
    pub fn with_embedded_schemas() -> SchemaResult<Self> {
        let mut registry = Self::default();
        registry.add_schema(Self::load_schema_from_str(embedded::core_user_schema())?);
        registry.add_schema(Self::load_schema_from_str(embedded::core_group_schema())?);
        Ok(registry)
    }

    /// Create a schema registry from every `*.json` file in a directory.
    ///
    /// Two files declaring the same schema id is an error.
    pub fn from_schema_dir<P: AsRef<Path>>(schema_dir: P) -> SchemaResult<Self> {
        let mut registry = Self::default();

        let mut paths: Vec<_> = fs::read_dir(schema_dir.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        paths.retain(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"));
        paths.sort();

        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        for path in paths {
            let schema = Self::load_schema_from_file(&path)?;
            if let Some(first) = sources.get(schema.id()) {
                return Err(SchemaError::DuplicateSchemaId {
                    id: schema.id().to_string(),
                    first: first.display().to_string(),
                    second: path.display().to_string(),
                });
            }
            debug!("Loaded schema '{}' from {}", schema.id(), path.display());
            sources.insert(schema.id().to_string(), path);
            registry.add_schema(schema);
        }

        info!(
            "Loaded {} schema(s) from {}",
            registry.schemas.len(),
            schema_dir.as_ref().display()
        );
        Ok(registry)
    }

    /// Load a schema from a JSON file.
    pub fn load_schema_from_file<P: AsRef<Path>>(path: P) -> SchemaResult<Schema> {
        let content = fs::read_to_string(path)?;
        Self::load_schema_from_str(&content)
    }

    /// Load a schema from a JSON string.
    pub fn load_schema_from_str(content: &str) -> SchemaResult<Schema> {
        Ok(serde_json::from_str(content)?)
    }

    /// Add a schema to the registry, replacing any schema with the same id.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas.insert(schema.id().to_string(), schema);
    }

    /// Get all available schemas, ordered by id.
    pub fn get_schemas(&self) -> Vec<&Schema> {
        let mut schemas: Vec<&Schema> = self.schemas.values().collect();
        schemas.sort_by(|a, b| a.id().cmp(b.id()));
        schemas
    }

    /// Get a specific schema by ID.
    pub fn get_schema(&self, id: &str) -> Option<&Schema> {
        self.schemas.get(id)
    }

    /// Get the core User schema, if loaded.
    pub fn get_user_schema(&self) -> Option<&Schema> {
        self.get_schema(USER_SCHEMA_ID)
    }

    /// Get the core Group schema, if loaded.
    pub fn get_group_schema(&self) -> Option<&Schema> {
        self.get_schema(GROUP_SCHEMA_ID)
    }

    /// Validate a resource against the schema with the given id.
    pub fn validate_resource(
        &self,
        schema_id: &str,
        resource: &Value,
    ) -> ValidationResult<ValidatedAttributes> {
        self.require_schema(schema_id)?.validate(resource)
    }

    /// Validate the path/value pairs of a PATCH operation against the schema
    /// with the given id.
    pub fn validate_patch(
        &self,
        schema_id: &str,
        operation: &str,
        values: &Map<String, Value>,
    ) -> ValidationResult<()> {
        self.require_schema(schema_id)?
            .validate_patch_operation_value(operation, values)
    }

    fn require_schema(&self, schema_id: &str) -> ValidationResult<&Schema> {
        self.get_schema(schema_id)
            .ok_or_else(|| ValidationError::UnknownSchema {
                schema_id: schema_id.to_string(),
            })
    }
}
