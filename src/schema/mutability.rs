//! PATCH operation kinds and the mutability rules that gate them.
//!
//! RFC 7643 Section 7 defines four mutability classes. For PATCH requests:
//!
//! | mutability  | add     | replace | remove  | other   |
//! |-------------|---------|---------|---------|---------|
//! | `readOnly`  | blocked | blocked | blocked | blocked |
//! | `immutable` | allowed | blocked | blocked | allowed |
//! | `readWrite` | allowed | allowed | allowed | allowed |
//! | `writeOnly` | allowed | allowed | allowed | allowed |

use super::types::Mutability;
use std::fmt;

/// The `op` of a PATCH operation.
///
/// Only the exact lowercase keywords are recognized; anything else is carried
/// as [`PatchOperation::Other`], which the mutability table does not restrict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatchOperation {
    Add,
    Replace,
    Remove,
    Other(String),
}

impl PatchOperation {
    pub fn parse(op: &str) -> Self {
        match op {
            "add" => Self::Add,
            "replace" => Self::Replace,
            "remove" => Self::Remove,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Add => "add",
            Self::Replace => "replace",
            Self::Remove => "remove",
            Self::Other(op) => op,
        }
    }

    /// Whether this operation is forbidden on an attribute with the given
    /// mutability.
    pub fn blocked_by(&self, mutability: Mutability) -> bool {
        match mutability {
            Mutability::ReadOnly => true,
            Mutability::Immutable => matches!(self, Self::Replace | Self::Remove),
            Mutability::ReadWrite | Mutability::WriteOnly => false,
        }
    }
}

impl From<&str> for PatchOperation {
    fn from(op: &str) -> Self {
        Self::parse(op)
    }
}

impl fmt::Display for PatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
