//! Core schema type definitions for SCIM resources.
//!
//! This module contains the data structures that define SCIM schemas,
//! attribute definitions, and their characteristics as specified in RFC 7643.
//! Definitions are checked when they are built and are immutable afterwards,
//! so a [`Schema`] can be shared freely between concurrent validations.

use super::path::is_valid_attribute_name;
use super::serialization::{AttributeDocument, SchemaDocument};
use crate::error::{SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A SCIM schema definition.
///
/// Represents a complete schema with its metadata and attribute definitions.
/// Each schema defines the structure and validation rules for a specific
/// resource type like User or Group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "SchemaDocument")]
pub struct Schema {
    pub(crate) id: String,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) attributes: Vec<AttributeDefinition>,
}

impl Schema {
    /// Build a schema from its id and top-level attributes.
    ///
    /// Fails if the id is empty or any attribute definition is malformed,
    /// including two top-level attributes whose names differ only by case.
    pub fn new(id: impl Into<String>, attributes: Vec<AttributeDefinition>) -> SchemaResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(SchemaError::EmptySchemaId);
        }

        check_unique_names(&attributes, &id)?;
        for attr in &attributes {
            attr.validate_definition()?;
        }

        Ok(Self {
            id,
            name: None,
            description: None,
            attributes,
        })
    }

    /// Set the human-readable schema name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the schema description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unique schema identifier (URI)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable schema name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Schema description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Top-level attribute definitions in declaration order
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }
}

/// Definition of a SCIM attribute.
///
/// Defines all characteristics of an attribute including type,
/// constraints, and sub-attributes. Built with the type-specific
/// constructors and chained setters:
///
/// ```rust
/// use scim_schema::schema::{AttributeDefinition, Mutability};
///
/// let name = AttributeDefinition::complex(
///     "name",
///     vec![
///         AttributeDefinition::string("familyName"),
///         AttributeDefinition::string("givenName"),
///     ],
/// );
/// let id = AttributeDefinition::string("id")
///     .case_exact()
///     .with_mutability(Mutability::ReadOnly);
/// assert_eq!(name.sub_attributes().len(), 2);
/// assert_eq!(id.mutability(), Mutability::ReadOnly);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "AttributeDocument")]
pub struct AttributeDefinition {
    pub(crate) name: String,
    pub(crate) data_type: AttributeType,
    pub(crate) multi_valued: bool,
    pub(crate) required: bool,
    pub(crate) case_exact: bool,
    pub(crate) mutability: Mutability,
    pub(crate) returned: Returned,
    pub(crate) uniqueness: Uniqueness,
    pub(crate) description: Option<String>,
    pub(crate) canonical_values: Vec<String>,
    pub(crate) reference_types: Vec<String>,
    pub(crate) sub_attributes: Vec<AttributeDefinition>,
}

impl AttributeDefinition {
    /// Create a single-valued, optional, read-write attribute of the given type.
    pub fn new(name: impl Into<String>, data_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            data_type,
            multi_valued: false,
            required: false,
            case_exact: false,
            mutability: Mutability::ReadWrite,
            returned: Returned::Default,
            uniqueness: Uniqueness::None,
            description: None,
            canonical_values: Vec::new(),
            reference_types: Vec::new(),
            sub_attributes: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::String)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Boolean)
    }

    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Decimal)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Integer)
    }

    pub fn date_time(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::DateTime)
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Binary)
    }

    /// Create a reference attribute pointing at the given resource types
    /// (e.g. `"User"`, `"external"`, `"uri"`).
    pub fn reference<I, S>(name: impl Into<String>, reference_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut attr = Self::new(name, AttributeType::Reference);
        attr.reference_types = reference_types.into_iter().map(Into::into).collect();
        attr
    }

    /// Create a complex attribute with the given sub-attributes.
    pub fn complex(name: impl Into<String>, sub_attributes: Vec<AttributeDefinition>) -> Self {
        let mut attr = Self::new(name, AttributeType::Complex);
        attr.sub_attributes = sub_attributes;
        attr
    }

    /// Mark the attribute as multi-valued.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark string comparison on this attribute as case-sensitive.
    pub fn case_exact(mut self) -> Self {
        self.case_exact = true;
        self
    }

    pub fn with_mutability(mut self, mutability: Mutability) -> Self {
        self.mutability = mutability;
        self
    }

    pub fn with_returned(mut self, returned: Returned) -> Self {
        self.returned = returned;
        self
    }

    pub fn with_uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_canonical_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.canonical_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> AttributeType {
        self.data_type
    }

    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_case_exact(&self) -> bool {
        self.case_exact
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn returned(&self) -> Returned {
        self.returned
    }

    pub fn uniqueness(&self) -> Uniqueness {
        self.uniqueness
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn canonical_values(&self) -> &[String] {
        &self.canonical_values
    }

    pub fn reference_types(&self) -> &[String] {
        &self.reference_types
    }

    /// Sub-attributes in declaration order; empty for non-complex attributes.
    pub fn sub_attributes(&self) -> &[AttributeDefinition] {
        &self.sub_attributes
    }

    /// Check this definition and its sub-attributes for structural errors.
    ///
    /// The attribute tree is owned, so it cannot contain cycles; what remains
    /// to check is naming, sibling uniqueness and type consistency.
    pub fn validate_definition(&self) -> SchemaResult<()> {
        self.check_node()?;
        self.sub_attributes
            .iter()
            .try_for_each(AttributeDefinition::validate_definition)
    }

    /// Structural checks on this node alone, without descending into
    /// sub-attributes beyond their names.
    pub(crate) fn check_node(&self) -> SchemaResult<()> {
        if !is_valid_attribute_name(&self.name) {
            return Err(SchemaError::InvalidAttributeName {
                name: self.name.clone(),
            });
        }

        if !self.canonical_values.is_empty() && self.data_type != AttributeType::String {
            return Err(SchemaError::CanonicalValuesNotAllowed {
                attribute: self.name.clone(),
            });
        }

        // caseExact and uniqueness are not rendered for these types
        if !self.data_type.has_value_characteristics() {
            let characteristic = if self.case_exact {
                Some("caseExact")
            } else if self.uniqueness != Uniqueness::None {
                Some("uniqueness")
            } else {
                None
            };
            if let Some(characteristic) = characteristic {
                return Err(SchemaError::CharacteristicNotAllowed {
                    attribute: self.name.clone(),
                    characteristic,
                    data_type: self.data_type.to_string(),
                });
            }
        }

        match self.data_type {
            AttributeType::Complex if self.sub_attributes.is_empty() => {
                Err(SchemaError::MissingSubAttributes {
                    attribute: self.name.clone(),
                })
            }
            AttributeType::Complex => check_unique_names(&self.sub_attributes, &self.name),
            _ if !self.sub_attributes.is_empty() => Err(SchemaError::UnexpectedSubAttributes {
                attribute: self.name.clone(),
                data_type: self.data_type.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Reject sibling attributes whose names collide case-insensitively.
fn check_unique_names(attributes: &[AttributeDefinition], parent: &str) -> SchemaResult<()> {
    for (i, attr) in attributes.iter().enumerate() {
        if attributes[..i]
            .iter()
            .any(|earlier| earlier.name.eq_ignore_ascii_case(&attr.name))
        {
            return Err(SchemaError::DuplicateAttributeName {
                name: attr.name.clone(),
                parent: parent.to_string(),
            });
        }
    }
    Ok(())
}

/// SCIM attribute data types.
///
/// Represents the valid data types for SCIM attributes as defined in RFC 7643.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    /// String value
    String,
    /// Boolean value
    Boolean,
    /// Decimal number
    Decimal,
    /// Integer number
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// Binary data (base64 encoded)
    Binary,
    /// URI reference
    Reference,
    /// Complex attribute with sub-attributes
    Complex,
}

impl AttributeType {
    /// The RFC 7643 keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "dateTime",
            Self::Binary => "binary",
            Self::Reference => "reference",
            Self::Complex => "complex",
        }
    }

    /// Whether `caseExact` and `uniqueness` apply to values of this type.
    pub fn has_value_characteristics(&self) -> bool {
        !matches!(self, Self::Complex | Self::Boolean)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute mutability characteristics.
///
/// Defines whether and how an attribute can be modified.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    /// Read-only attribute (managed by server)
    ReadOnly,
    /// Read-write attribute (can be modified by clients)
    #[default]
    ReadWrite,
    /// Immutable attribute (set once, never modified)
    Immutable,
    /// Write-only attribute (passwords, etc.)
    WriteOnly,
}

impl Mutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadOnly => "readOnly",
            Self::ReadWrite => "readWrite",
            Self::Immutable => "immutable",
            Self::WriteOnly => "writeOnly",
        }
    }
}

impl fmt::Display for Mutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When an attribute is returned in a response.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Returned {
    /// Always returned, regardless of `attributes` parameters
    Always,
    /// Never returned
    Never,
    /// Returned unless excluded
    #[default]
    Default,
    /// Returned only when explicitly requested
    Request,
}

/// Attribute uniqueness constraints.
///
/// Defines the scope of uniqueness for attribute values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Uniqueness {
    /// No uniqueness constraint
    #[default]
    None,
    /// Unique within the server
    Server,
    /// Globally unique
    Global,
}
