//! Attribute path parsing.
//!
//! Splits a SCIM attribute path (RFC 7644 Section 3.10) into the attribute it
//! names and whatever addresses into that attribute:
//!
//! ```text
//! PATH      = [URI ":"] ATTRNAME ["[" valFilter "]"] ["." subPath]
//! ATTRNAME  = ALPHA *(nameChar)
//! nameChar  = "-" / "_" / "$" / DIGIT / ALPHA
//! ```
//!
//! The value filter is kept as opaque text; evaluating it is not the job of
//! schema validation.

use crate::error::{ValidationError, ValidationResult};

/// A parsed attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    uri: Option<String>,
    attribute: String,
    filter: Option<String>,
    sub_path: Option<String>,
}

impl AttributePath {
    /// Parse a path expression such as `name.familyName`,
    /// `emails[type eq "work"].value` or
    /// `urn:ietf:params:scim:schemas:core:2.0:User:userName`.
    pub fn parse(path: &str) -> ValidationResult<Self> {
        if path.is_empty() {
            return Err(ValidationError::invalid_path(path, "path is empty"));
        }

        let (uri, rest) = split_schema_uri(path);
        let end = rest.find(['.', '[']).unwrap_or(rest.len());
        let attribute = &rest[..end];
        if !is_valid_attribute_name(attribute) {
            return Err(ValidationError::invalid_path(
                path,
                format!("'{}' is not a valid attribute name", attribute),
            ));
        }

        let mut remainder = &rest[end..];
        let mut filter = None;
        if remainder.starts_with('[') {
            let close = closing_bracket(remainder)
                .ok_or_else(|| ValidationError::invalid_path(path, "unterminated value filter"))?;
            let expression = remainder[1..close].trim();
            if expression.is_empty() {
                return Err(ValidationError::invalid_path(path, "empty value filter"));
            }
            filter = Some(expression.to_string());
            remainder = &remainder[close + 1..];
        }

        let sub_path = match remainder {
            "" => None,
            _ => match remainder.strip_prefix('.') {
                Some("") => {
                    return Err(ValidationError::invalid_path(path, "empty sub-attribute"));
                }
                Some(sub) => Some(sub.to_string()),
                None => {
                    return Err(ValidationError::invalid_path(
                        path,
                        format!("unexpected '{}' after attribute", remainder),
                    ));
                }
            },
        };

        Ok(Self {
            uri: uri.map(str::to_string),
            attribute: attribute.to_string(),
            filter,
            sub_path,
        })
    }

    /// Schema URI prefix, if the path was fully qualified
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// The top-level attribute name
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Opaque value filter between brackets
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Remaining path below the attribute, without the leading dot
    pub fn sub_path(&self) -> Option<&str> {
        self.sub_path.as_deref()
    }
}

/// Split a leading `urn:...:` schema URI off the path.
///
/// The URI ends at the last colon before any value filter, since the filter
/// itself may contain quoted colons.
fn split_schema_uri(path: &str) -> (Option<&str>, &str) {
    let is_urn = path
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("urn:"));
    if !is_urn {
        return (None, path);
    }

    let head_end = path.find('[').unwrap_or(path.len());
    match path[..head_end].rfind(':') {
        Some(colon) => (Some(&path[..colon]), &path[colon + 1..]),
        None => (None, path),
    }
}

/// Byte index of the `]` closing the filter that opens at index 0,
/// skipping over quoted strings.
fn closing_bracket(s: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ']' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

/// Whether `name` follows the ATTRNAME grammar. `$ref` is allowed as the one
/// reserved name starting with `$`.
pub(crate) fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '$'))
}
