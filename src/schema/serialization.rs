//! Canonical JSON representation of schemas.
//!
//! A schema renders as exactly `{id, name, description, attributes}`, with an
//! absent name or description rendered as `null` so consumers always see the
//! same key set. Attributes keep their declaration order.
//!
//! Loading goes the other way through [`SchemaDocument`] and
//! [`AttributeDocument`], and every loaded definition passes the same
//! structural checks as one built in code.

use super::types::{
    AttributeDefinition, AttributeType, Mutability, Returned, Schema, Uniqueness,
};
use crate::error::SchemaError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value, json};

impl Schema {
    /// Render the schema as its canonical document.
    pub fn to_document(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "attributes": self
                .attributes
                .iter()
                .map(AttributeDefinition::to_document)
                .collect::<Vec<_>>(),
        })
    }
}

impl AttributeDefinition {
    /// Render the attribute as it appears in a schema's `attributes` list.
    ///
    /// `caseExact` and `uniqueness` are meaningless for complex and boolean
    /// attributes and are left out for them.
    pub fn to_document(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("name".into(), json!(self.name));
        doc.insert("type".into(), json!(self.data_type));
        doc.insert("multiValued".into(), json!(self.multi_valued));
        doc.insert("description".into(), json!(self.description));
        doc.insert("required".into(), json!(self.required));
        doc.insert("mutability".into(), json!(self.mutability));
        doc.insert("returned".into(), json!(self.returned));

        if !self.canonical_values.is_empty() {
            doc.insert("canonicalValues".into(), json!(self.canonical_values));
        }
        if !self.reference_types.is_empty() {
            doc.insert("referenceTypes".into(), json!(self.reference_types));
        }
        if !self.sub_attributes.is_empty() {
            let subs: Vec<Value> = self.sub_attributes.iter().map(Self::to_document).collect();
            doc.insert("subAttributes".into(), Value::Array(subs));
        }
        if self.data_type.has_value_characteristics() {
            doc.insert("caseExact".into(), json!(self.case_exact));
            doc.insert("uniqueness".into(), json!(self.uniqueness));
        }

        Value::Object(doc)
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

impl Serialize for AttributeDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_document().serialize(serializer)
    }
}

/// Schema as read from JSON, before structural checks.
#[derive(Debug, Deserialize)]
pub struct SchemaDocument {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    attributes: Vec<AttributeDefinition>,
}

impl TryFrom<SchemaDocument> for Schema {
    type Error = SchemaError;

    fn try_from(doc: SchemaDocument) -> Result<Self, Self::Error> {
        let mut schema = Schema::new(doc.id, doc.attributes)?;
        schema.name = doc.name;
        schema.description = doc.description;
        Ok(schema)
    }
}

/// Attribute definition as read from JSON, before structural checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDocument {
    name: String,
    #[serde(rename = "type")]
    data_type: AttributeType,
    #[serde(default)]
    multi_valued: bool,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    case_exact: bool,
    #[serde(default)]
    mutability: Mutability,
    #[serde(default)]
    returned: Returned,
    #[serde(default)]
    uniqueness: Uniqueness,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    canonical_values: Vec<String>,
    #[serde(default)]
    reference_types: Vec<String>,
    #[serde(default)]
    sub_attributes: Vec<AttributeDefinition>,
}

impl TryFrom<AttributeDocument> for AttributeDefinition {
    type Error = SchemaError;

    fn try_from(doc: AttributeDocument) -> Result<Self, Self::Error> {
        let attr = AttributeDefinition {
            name: doc.name,
            data_type: doc.data_type,
            multi_valued: doc.multi_valued,
            required: doc.required,
            case_exact: doc.case_exact,
            mutability: doc.mutability,
            returned: doc.returned,
            uniqueness: doc.uniqueness,
            description: doc.description,
            canonical_values: doc.canonical_values,
            reference_types: doc.reference_types,
            sub_attributes: doc.sub_attributes,
        };
        // Sub-attributes were checked when they were deserialized
        attr.check_node()?;
        Ok(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::new(
            "urn:example:schemas:Device",
            vec![
                AttributeDefinition::string("serialNumber")
                    .required()
                    .case_exact()
                    .with_uniqueness(Uniqueness::Server),
                AttributeDefinition::boolean("enabled"),
                AttributeDefinition::complex(
                    "location",
                    vec![
                        AttributeDefinition::string("building"),
                        AttributeDefinition::string("kind").with_canonical_values(["rack", "desk"]),
                    ],
                ),
            ],
        )
        .unwrap()
        .with_name("Device")
    }

    #[test]
    fn test_fixed_key_set() {
        let doc = sample_schema().to_document();
        let obj = doc.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["attributes", "description", "id", "name"]);
        assert_eq!(doc["name"], json!("Device"));
        assert_eq!(doc["description"], Value::Null);
    }

    #[test]
    fn test_attribute_order_preserved() {
        let doc = sample_schema().to_document();
        let names: Vec<&str> = doc["attributes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["serialNumber", "enabled", "location"]);
    }

    #[test]
    fn test_characteristics_by_type() {
        let doc = sample_schema().to_document();
        let attrs = doc["attributes"].as_array().unwrap();

        assert_eq!(attrs[0]["caseExact"], json!(true));
        assert_eq!(attrs[0]["uniqueness"], json!("server"));
        assert!(attrs[0].get("subAttributes").is_none());

        assert!(attrs[1].get("caseExact").is_none());
        assert!(attrs[1].get("uniqueness").is_none());

        assert!(attrs[2].get("caseExact").is_none());
        assert_eq!(attrs[2]["type"], json!("complex"));
        assert_eq!(attrs[2]["subAttributes"][1]["canonicalValues"], json!(["rack", "desk"]));
    }

    #[test]
    fn test_document_round_trip() {
        let schema = sample_schema();
        let text = serde_json::to_string(&schema).unwrap();
        let loaded: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(loaded, schema);
    }

    #[test]
    fn test_loading_rejects_duplicate_sub_attributes() {
        let text = r#"{
            "id": "urn:example:schemas:Bad",
            "attributes": [{
                "name": "name",
                "type": "complex",
                "subAttributes": [
                    {"name": "givenName", "type": "string"},
                    {"name": "GivenName", "type": "string"}
                ]
            }]
        }"#;
        let err = serde_json::from_str::<Schema>(text).unwrap_err();
        assert!(err.to_string().contains("Duplicate attribute name"));
    }

    #[test]
    fn test_loading_rejects_characteristics_that_would_not_render() {
        let text = r#"{"name": "active", "type": "boolean", "uniqueness": "server"}"#;
        let err = serde_json::from_str::<AttributeDefinition>(text).unwrap_err();
        assert!(err.to_string().contains("cannot declare uniqueness"));

        let text = r#"{
            "id": "urn:example:schemas:Bad",
            "attributes": [{
                "name": "emails",
                "type": "complex",
                "subAttributes": [
                    {"name": "value", "type": "string"},
                    {"name": "primary", "type": "boolean", "caseExact": true}
                ]
            }]
        }"#;
        let err = serde_json::from_str::<Schema>(text).unwrap_err();
        assert!(err.to_string().contains("cannot declare caseExact"));
    }

    #[test]
    fn test_loaded_definitions_survive_rewrite() {
        let text = r#"{
            "id": "urn:example:schemas:Device",
            "attributes": [
                {"name": "managed", "type": "boolean"},
                {"name": "tag", "type": "string", "caseExact": true, "uniqueness": "global"}
            ]
        }"#;
        let loaded: Schema = serde_json::from_str(text).unwrap();
        let reloaded: Schema = serde_json::from_value(loaded.to_document()).unwrap();
        assert_eq!(reloaded, loaded);
        assert_eq!(reloaded.attributes()[1].uniqueness(), Uniqueness::Global);
    }
}
