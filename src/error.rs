//! Error types for SCIM schema operations.
//!
//! Validation failures are a closed set: every [`ValidationError`] classifies
//! as either [`ValidationErrorKind::InvalidSyntax`] or
//! [`ValidationErrorKind::InvalidValue`], matching the `invalidSyntax` and
//! `invalidValue` SCIM error types of RFC 7644 Section 3.12. Mapping a kind to
//! an HTTP response is left to the caller.
//!
//! Problems with the schema definitions themselves are reported separately as
//! [`SchemaError`], since they are configuration mistakes rather than bad input.

use crate::schema::Mutability;

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The request body is not parsable or structurally ambiguous.
    InvalidSyntax,
    /// An attribute value, path or target is incompatible with the schema.
    InvalidValue,
}

impl ValidationErrorKind {
    /// The SCIM `scimType` keyword for this kind.
    pub fn scim_type(&self) -> &'static str {
        match self {
            Self::InvalidSyntax => "invalidSyntax",
            Self::InvalidValue => "invalidValue",
        }
    }
}

/// Error raised when a resource document or PATCH operation does not conform
/// to a schema.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The resource is not a JSON object
    #[error("Resource must be a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// More than one key matches the same attribute name case-insensitively
    #[error("Attribute '{attribute}' is supplied more than once: {keys:?}")]
    DuplicateAttribute { attribute: String, keys: Vec<String> },

    /// The path expression could not be parsed
    #[error("Invalid attribute path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// No schema is registered under the requested id
    #[error("Unknown schema '{schema_id}'")]
    UnknownSchema { schema_id: String },

    /// The path does not name an attribute of the schema
    #[error("Unknown attribute '{attribute}'")]
    UnknownAttribute { attribute: String },

    /// The operation is not permitted by the attribute's mutability
    #[error("Operation '{operation}' is not permitted on {mutability} attribute '{attribute}'")]
    MutabilityViolation {
        attribute: String,
        operation: String,
        mutability: Mutability,
    },

    /// A required attribute is absent or null
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// The value has the wrong JSON type for the attribute
    #[error("Attribute '{attribute}' has invalid type, expected {expected}, got {actual}")]
    InvalidDataType {
        attribute: String,
        expected: String,
        actual: String,
    },

    /// A multi-valued attribute was given something other than an array
    #[error("Attribute '{attribute}' must be multi-valued (array)")]
    ExpectedMultiValue { attribute: String },

    /// A required multi-valued attribute was given an empty array
    #[error("Required multi-valued attribute '{attribute}' cannot be empty")]
    EmptyMultiValue { attribute: String },

    /// A dateTime value is not RFC 3339
    #[error("Attribute '{attribute}' has invalid datetime format: {value}")]
    InvalidDateTimeFormat { attribute: String, value: String },

    /// A binary value is not valid base64
    #[error("Attribute '{attribute}' has invalid binary data: {details}")]
    InvalidBinaryData { attribute: String, details: String },
}

impl ValidationError {
    /// The closed SCIM classification of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NotAnObject { .. }
            | Self::DuplicateAttribute { .. }
            | Self::ExpectedMultiValue { .. } => ValidationErrorKind::InvalidSyntax,
            _ => ValidationErrorKind::InvalidValue,
        }
    }

    /// Create a missing required attribute error
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        attribute: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidDataType {
            attribute: attribute.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
        }
    }
}

/// Errors raised while building or loading schema definitions.
///
/// These are programming or configuration errors and should surface at
/// startup rather than during request handling.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Attribute name does not follow the ATTRNAME grammar of RFC 7643
    #[error("Invalid attribute name '{name}'")]
    InvalidAttributeName { name: String },

    /// Two sibling attributes share a name, ignoring case
    #[error("Duplicate attribute name '{name}' in '{parent}'")]
    DuplicateAttributeName { name: String, parent: String },

    /// Complex attribute declared without sub-attributes
    #[error("Complex attribute '{attribute}' must have sub-attributes")]
    MissingSubAttributes { attribute: String },

    /// Non-complex attribute declared with sub-attributes
    #[error("Attribute '{attribute}' of type {data_type} cannot have sub-attributes")]
    UnexpectedSubAttributes { attribute: String, data_type: String },

    /// Canonical values declared on a non-string attribute
    #[error("Canonical values are only allowed on string attributes, found on '{attribute}'")]
    CanonicalValuesNotAllowed { attribute: String },

    /// caseExact or uniqueness declared on a type that does not carry them
    #[error("Attribute '{attribute}' of type {data_type} cannot declare {characteristic}")]
    CharacteristicNotAllowed {
        attribute: String,
        characteristic: &'static str,
        data_type: String,
    },

    /// Two schema files in one directory declare the same id
    #[error("Schema '{id}' is declared by both {first} and {second}")]
    DuplicateSchemaId {
        id: String,
        first: String,
        second: String,
    },

    /// Schema id is empty
    #[error("Schema id cannot be empty")]
    EmptySchemaId,

    /// Schema file could not be read
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Schema document could not be parsed
    #[error("Failed to parse schema document: {0}")]
    Json(#[from] serde_json::Error),
}

// Result type aliases for convenience
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type SchemaResult<T> = Result<T, SchemaError>;
