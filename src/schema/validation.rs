//! Resource and PATCH validation against a schema.
//!
//! Both entry points are pure reads over an immutable [`Schema`], so the same
//! schema can validate any number of requests concurrently. The first failure
//! aborts the call; no partially validated output is ever returned.

use super::mutability::PatchOperation;
use super::resolver::resolve_attribute;
use super::types::{AttributeDefinition, Schema};
use crate::error::{ValidationError, ValidationResult};
use log::{debug, trace};
use serde_json::{Map, Value};

/// Normalized attributes keyed by their schema-declared names.
pub type ValidatedAttributes = Map<String, Value>;

impl Schema {
    /// Validate a resource document against this schema.
    ///
    /// Document keys are matched to attribute names case-insensitively. Two
    /// keys matching the same attribute is a syntax error. Keys that match no
    /// declared attribute are not part of this schema and are ignored.
    ///
    /// ```rust
    /// use scim_schema::schema::{AttributeDefinition, Schema};
    /// use serde_json::json;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let schema = Schema::new(
    ///     "urn:example:schemas:Device",
    ///     vec![AttributeDefinition::string("serialNumber").required()],
    /// )?;
    ///
    /// let attributes = schema.validate(&json!({"SERIALNUMBER": "X-1"}))?;
    /// assert_eq!(attributes["serialNumber"], json!("X-1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn validate(&self, resource: &Value) -> ValidationResult<ValidatedAttributes> {
        debug!("Validating resource against schema '{}'", self.id);

        let obj = resource.as_object().ok_or_else(|| ValidationError::NotAnObject {
            actual: value_type(resource),
        })?;

        let attributes = validate_attributes(&self.attributes, obj).inspect_err(|e| {
            debug!("Resource rejected by schema '{}': {}", self.id, e);
        })?;

        debug!(
            "Resource valid against schema '{}' ({} attributes)",
            self.id,
            attributes.len()
        );
        Ok(attributes)
    }

    /// Validate the path/value pairs of one PATCH operation.
    ///
    /// Every path must resolve to an attribute the operation may touch. For
    /// `remove` the target only has to exist; for every other operation the
    /// value is validated by the target attribute. Nothing is modified.
    pub fn validate_patch_operation_value(
        &self,
        operation: &str,
        values: &Map<String, Value>,
    ) -> ValidationResult<()> {
        let operation = PatchOperation::parse(operation);
        debug!(
            "Validating PATCH '{}' with {} target(s) against schema '{}'",
            operation,
            values.len(),
            self.id
        );

        for (path, value) in values {
            let attr = resolve_attribute(&operation, path, &self.attributes)?;

            if operation != PatchOperation::Remove {
                attr.validate(Some(value))?;
            }
        }

        Ok(())
    }

    /// Validate a single RFC 7644 PATCH operation.
    ///
    /// With a `path`, the value is checked against the attribute it targets.
    /// Without one, the value must be an object whose keys are attribute paths.
    /// A `remove` must always name a path.
    pub fn validate_patch_operation(
        &self,
        operation: &str,
        path: Option<&str>,
        value: Option<&Value>,
    ) -> ValidationResult<()> {
        match path {
            Some(path) => {
                let mut values = Map::new();
                values.insert(path.to_string(), value.cloned().unwrap_or(Value::Null));
                self.validate_patch_operation_value(operation, &values)
            }
            None if operation == PatchOperation::Remove.as_str() => Err(
                ValidationError::invalid_path("", "remove operation requires a path"),
            ),
            None => match value {
                Some(Value::Object(values)) => self.validate_patch_operation_value(operation, values),
                Some(other) => Err(ValidationError::NotAnObject {
                    actual: value_type(other),
                }),
                None => Err(ValidationError::NotAnObject { actual: "null" }),
            },
        }
    }
}

/// Match object keys to attribute definitions and validate each attribute.
///
/// Shared by top-level resource validation and complex attribute values.
pub(crate) fn validate_attributes(
    attributes: &[AttributeDefinition],
    obj: &Map<String, Value>,
) -> ValidationResult<ValidatedAttributes> {
    let mut validated = Map::new();

    for attr in attributes {
        let mut matches = obj.iter().filter(|(key, _)| names_match(attr.name(), key));
        let hit = matches.next();
        if let Some((first, _)) = hit {
            if let Some((second, _)) = matches.next() {
                return Err(ValidationError::DuplicateAttribute {
                    attribute: attr.name().to_string(),
                    keys: vec![first.clone(), second.clone()],
                });
            }
        }

        trace!("Validating attribute '{}'", attr.name());
        let value = attr.validate(hit.map(|(_, value)| value))?;
        validated.insert(attr.name().to_string(), value);
    }

    Ok(validated)
}

/// Case-insensitive name comparison used for all attribute lookups.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Get the type name of a JSON value for error messages.
pub(crate) fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "decimal",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
