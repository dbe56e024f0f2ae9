//! Resolution of PATCH paths to attribute definitions.

use super::mutability::PatchOperation;
use super::path::AttributePath;
use super::types::AttributeDefinition;
use super::validation::names_match;
use crate::error::{ValidationError, ValidationResult};
use log::{trace, warn};

/// Find the attribute definition a PATCH `path` targets.
///
/// Each hop is checked against the operation's mutability rules, so a blocked
/// parent blocks all of its sub-attributes. When the path continues below an
/// attribute that has no sub-attributes, the remainder is treated as
/// addressing within that attribute and the attribute itself is returned.
pub fn resolve_attribute<'a>(
    operation: &PatchOperation,
    path: &str,
    attributes: &'a [AttributeDefinition],
) -> ValidationResult<&'a AttributeDefinition> {
    let parsed = AttributePath::parse(path)?;

    let attr = attributes
        .iter()
        .find(|attr| names_match(attr.name(), parsed.attribute()))
        .ok_or_else(|| ValidationError::unknown_attribute(parsed.attribute()))?;

    trace!("Resolved '{}' to attribute '{}'", path, attr.name());

    if operation.blocked_by(attr.mutability()) {
        warn!(
            "PATCH '{}' rejected: attribute '{}' is {}",
            operation,
            attr.name(),
            attr.mutability()
        );
        return Err(ValidationError::MutabilityViolation {
            attribute: attr.name().to_string(),
            operation: operation.to_string(),
            mutability: attr.mutability(),
        });
    }

    match parsed.sub_path() {
        Some(sub_path) if !attr.sub_attributes().is_empty() => {
            resolve_attribute(operation, sub_path, attr.sub_attributes())
        }
        _ => Ok(attr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Mutability;

    fn attributes() -> Vec<AttributeDefinition> {
        vec![
            AttributeDefinition::string("userName").required(),
            AttributeDefinition::complex(
                "name",
                vec![
                    AttributeDefinition::string("familyName"),
                    AttributeDefinition::string("givenName"),
                ],
            ),
            AttributeDefinition::complex(
                "meta",
                vec![AttributeDefinition::string("version")],
            )
            .with_mutability(Mutability::ReadOnly),
            AttributeDefinition::string("nickName"),
        ]
    }

    #[test]
    fn test_resolves_nested_sub_attribute() {
        let attrs = attributes();
        let attr = resolve_attribute(&PatchOperation::Replace, "name.familyName", &attrs).unwrap();
        assert_eq!(attr.name(), "familyName");
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let attrs = attributes();
        let attr = resolve_attribute(&PatchOperation::Add, "NAME.FAMILYNAME", &attrs).unwrap();
        assert_eq!(attr.name(), "familyName");
    }

    #[test]
    fn test_unknown_sub_attribute() {
        let attrs = attributes();
        let err = resolve_attribute(&PatchOperation::Add, "name.bogus", &attrs).unwrap_err();
        assert_eq!(err, ValidationError::unknown_attribute("bogus"));
    }

    #[test]
    fn test_blocked_parent_blocks_children() {
        let attrs = attributes();
        let err = resolve_attribute(&PatchOperation::Add, "meta.version", &attrs).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MutabilityViolation { ref attribute, .. } if attribute == "meta"
        ));
    }

    #[test]
    fn test_sub_path_on_simple_attribute_stops_descent() {
        let attrs = attributes();
        let attr = resolve_attribute(&PatchOperation::Replace, "nickName.whatever", &attrs).unwrap();
        assert_eq!(attr.name(), "nickName");
    }

    #[test]
    fn test_unparsable_path() {
        let attrs = attributes();
        let err = resolve_attribute(&PatchOperation::Add, "name[", &attrs).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPath { .. }));
    }
}
