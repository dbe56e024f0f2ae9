//! Embedded core SCIM schemas.
//!
//! The RFC 7643 User and Group schemas compiled into the library, so a
//! [`SchemaRegistry`](super::SchemaRegistry) works without schema files on
//! disk. Characteristics left out of a definition take their RFC 7643
//! defaults (single-valued, optional, `readWrite`, returned by default,
//! not unique).

/// Schema URI of the core User resource.
pub const USER_SCHEMA_ID: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// Schema URI of the core Group resource.
pub const GROUP_SCHEMA_ID: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

/// Returns the core User schema as a JSON string.
pub fn core_user_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:User",
  "name": "User",
  "description": "User Account",
  "attributes": [
    {"name": "id", "type": "string", "caseExact": true, "mutability": "readOnly",
     "returned": "always", "uniqueness": "server",
     "description": "Unique identifier for the SCIM resource as defined by the Service Provider."},
    {"name": "externalId", "type": "string", "caseExact": true,
     "description": "Identifier for the resource as defined by the provisioning client."},
    {"name": "userName", "type": "string", "required": true, "uniqueness": "server",
     "description": "Unique identifier for the User, typically used by the user to directly authenticate to the service provider."},
    {"name": "name", "type": "complex",
     "description": "The components of the user's real name.",
     "subAttributes": [
       {"name": "formatted", "type": "string"},
       {"name": "familyName", "type": "string"},
       {"name": "givenName", "type": "string"},
       {"name": "middleName", "type": "string"},
       {"name": "honorificPrefix", "type": "string"},
       {"name": "honorificSuffix", "type": "string"}
     ]},
    {"name": "displayName", "type": "string"},
    {"name": "nickName", "type": "string"},
    {"name": "profileUrl", "type": "reference", "referenceTypes": ["external"]},
    {"name": "title", "type": "string"},
    {"name": "userType", "type": "string"},
    {"name": "preferredLanguage", "type": "string"},
    {"name": "locale", "type": "string"},
    {"name": "timezone", "type": "string"},
    {"name": "active", "type": "boolean"},
    {"name": "password", "type": "string", "mutability": "writeOnly", "returned": "never",
     "description": "The User's cleartext password."},
    {"name": "emails", "type": "complex", "multiValued": true,
     "subAttributes": [
       {"name": "value", "type": "string"},
       {"name": "display", "type": "string"},
       {"name": "type", "type": "string", "canonicalValues": ["work", "home", "other"]},
       {"name": "primary", "type": "boolean"}
     ]},
    {"name": "phoneNumbers", "type": "complex", "multiValued": true,
     "subAttributes": [
       {"name": "value", "type": "string"},
       {"name": "display", "type": "string"},
       {"name": "type", "type": "string",
        "canonicalValues": ["work", "home", "mobile", "fax", "pager", "other"]},
       {"name": "primary", "type": "boolean"}
     ]},
    {"name": "addresses", "type": "complex", "multiValued": true,
     "subAttributes": [
       {"name": "formatted", "type": "string"},
       {"name": "streetAddress", "type": "string"},
       {"name": "locality", "type": "string"},
       {"name": "region", "type": "string"},
       {"name": "postalCode", "type": "string"},
       {"name": "country", "type": "string"},
       {"name": "type", "type": "string", "canonicalValues": ["work", "home", "other"]},
       {"name": "primary", "type": "boolean"}
     ]},
    {"name": "groups", "type": "complex", "multiValued": true, "mutability": "readOnly",
     "description": "Groups to which the user belongs, managed by the service provider.",
     "subAttributes": [
       {"name": "value", "type": "string", "mutability": "readOnly"},
       {"name": "$ref", "type": "reference", "referenceTypes": ["User", "Group"], "mutability": "readOnly"},
       {"name": "display", "type": "string", "mutability": "readOnly"},
       {"name": "type", "type": "string", "canonicalValues": ["direct", "indirect"], "mutability": "readOnly"}
     ]},
    {"name": "x509Certificates", "type": "complex", "multiValued": true,
     "subAttributes": [
       {"name": "value", "type": "binary"},
       {"name": "display", "type": "string"},
       {"name": "type", "type": "string"},
       {"name": "primary", "type": "boolean"}
     ]},
    {"name": "meta", "type": "complex", "mutability": "readOnly",
     "description": "Resource metadata maintained by the service provider.",
     "subAttributes": [
       {"name": "resourceType", "type": "string", "caseExact": true, "mutability": "readOnly"},
       {"name": "created", "type": "dateTime", "mutability": "readOnly"},
       {"name": "lastModified", "type": "dateTime", "mutability": "readOnly"},
       {"name": "location", "type": "reference", "referenceTypes": ["uri"], "mutability": "readOnly"},
       {"name": "version", "type": "string", "caseExact": true, "mutability": "readOnly"}
     ]}
  ]
}"#
}

/// Returns the core Group schema as a JSON string.
pub fn core_group_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:Group",
  "name": "Group",
  "description": "Group",
  "attributes": [
    {"name": "id", "type": "string", "caseExact": true, "mutability": "readOnly",
     "returned": "always", "uniqueness": "server"},
    {"name": "externalId", "type": "string", "caseExact": true},
    {"name": "displayName", "type": "string",
     "description": "A human-readable name for the Group."},
    {"name": "members", "type": "complex", "multiValued": true,
     "description": "A list of members of the Group.",
     "subAttributes": [
       {"name": "value", "type": "string", "mutability": "immutable"},
       {"name": "$ref", "type": "reference", "referenceTypes": ["User", "Group"], "mutability": "immutable"},
       {"name": "type", "type": "string", "canonicalValues": ["User", "Group"], "mutability": "immutable"},
       {"name": "display", "type": "string", "mutability": "readOnly"}
     ]},
    {"name": "meta", "type": "complex", "mutability": "readOnly",
     "subAttributes": [
       {"name": "resourceType", "type": "string", "caseExact": true, "mutability": "readOnly"},
       {"name": "created", "type": "dateTime", "mutability": "readOnly"},
       {"name": "lastModified", "type": "dateTime", "mutability": "readOnly"},
       {"name": "location", "type": "reference", "referenceTypes": ["uri"], "mutability": "readOnly"},
       {"name": "version", "type": "string", "caseExact": true, "mutability": "readOnly"}
     ]}
  ]
}"#
}
