//! Per-attribute value validation.
//!
//! Each [`AttributeDefinition`] checks and normalizes the value supplied for
//! it according to its data type, plurality and required flag. The resource
//! and PATCH validators only decide *which* value reaches which definition.

use super::types::{AttributeDefinition, AttributeType, Mutability};
use super::validation::{validate_attributes, value_type};
use crate::error::{ValidationError, ValidationResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::DateTime;
use log::trace;
use serde_json::{Number, Value};

impl AttributeDefinition {
    /// Validate a value for this attribute and return its normalized form.
    ///
    /// `None` (or JSON `null`) means the attribute was not supplied. Optional
    /// absent attributes normalize to `null`; required ones fail. Values sent
    /// for read-only attributes are ignored and normalize to `null`, since the
    /// service provider owns them.
    pub fn validate(&self, value: Option<&Value>) -> ValidationResult<Value> {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            if self.required {
                return Err(ValidationError::missing_required(&self.name));
            }
            return Ok(Value::Null);
        };

        if self.mutability == Mutability::ReadOnly {
            trace!("Ignoring client value for read-only attribute '{}'", self.name);
            return Ok(Value::Null);
        }

        if !self.multi_valued {
            return self.validate_singular(value);
        }

        match value {
            Value::Array(items) => {
                if self.required && items.is_empty() {
                    return Err(ValidationError::EmptyMultiValue {
                        attribute: self.name.clone(),
                    });
                }
                items
                    .iter()
                    .map(|item| self.validate_singular(item))
                    .collect::<ValidationResult<Vec<_>>>()
                    .map(Value::Array)
            }
            // A lone complex value is accepted as a one-element collection
            Value::Object(_) if self.data_type == AttributeType::Complex => {
                Ok(Value::Array(vec![self.validate_singular(value)?]))
            }
            _ => Err(ValidationError::ExpectedMultiValue {
                attribute: self.name.clone(),
            }),
        }
    }

    /// Validate one value against the attribute's data type.
    fn validate_singular(&self, value: &Value) -> ValidationResult<Value> {
        match self.data_type {
            AttributeType::String | AttributeType::Reference => match value {
                Value::String(_) => Ok(value.clone()),
                _ => Err(self.type_mismatch(value)),
            },
            AttributeType::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                _ => Err(self.type_mismatch(value)),
            },
            AttributeType::Integer => match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
                _ => Err(self.type_mismatch(value)),
            },
            AttributeType::Decimal => value
                .as_f64()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| self.type_mismatch(value)),
            AttributeType::DateTime => {
                let text = value.as_str().ok_or_else(|| self.type_mismatch(value))?;
                DateTime::parse_from_rfc3339(text).map_err(|_| {
                    ValidationError::InvalidDateTimeFormat {
                        attribute: self.name.clone(),
                        value: text.to_string(),
                    }
                })?;
                Ok(value.clone())
            }
            AttributeType::Binary => {
                let text = value.as_str().ok_or_else(|| self.type_mismatch(value))?;
                STANDARD
                    .decode(text)
                    .map_err(|e| ValidationError::InvalidBinaryData {
                        attribute: self.name.clone(),
                        details: e.to_string(),
                    })?;
                Ok(value.clone())
            }
            AttributeType::Complex => {
                let obj = value.as_object().ok_or_else(|| self.type_mismatch(value))?;
                validate_attributes(&self.sub_attributes, obj).map(Value::Object)
            }
        }
    }

    fn type_mismatch(&self, value: &Value) -> ValidationError {
        ValidationError::invalid_type(&self.name, self.data_type.as_str(), value_type(value))
    }
}
