//! Whole-document validation against custom and core schemas.

mod common;

use common::{DEVICE_SCHEMA_ID, core_registry, device_schema, init_logging};
use scim_schema::schema::USER_SCHEMA_ID;
use scim_schema::{ValidationError, ValidationErrorKind};
use serde_json::{Value, json};

fn valid_device() -> Value {
    json!({
        "serialNumber": "SN-0042",
        "label": "core switch",
        "slots": 48,
        "weightKg": 7.5,
        "managed": true,
        "purchasedAt": "2023-04-01T09:30:00Z",
        "certificate": "TUlJQkNnS0NBUUVB",
        "location": {"building": "HQ", "room": "B12"},
        "interfaces": [
            {"mac": "00:1b:44:11:3a:b7", "kind": "ethernet", "primary": true},
            {"mac": "00:1b:44:11:3a:b8", "kind": "wifi"}
        ]
    })
}

#[test]
fn test_valid_document_produces_every_declared_attribute() {
    init_logging();
    let schema = device_schema();

    let attributes = schema.validate(&valid_device()).unwrap();

    assert_eq!(attributes.len(), schema.attributes().len());
    assert_eq!(attributes["serialNumber"], json!("SN-0042"));
    assert_eq!(attributes["slots"], json!(48));
    assert_eq!(attributes["weightKg"], json!(7.5));
    assert_eq!(attributes["location"]["building"], json!("HQ"));
    assert_eq!(attributes["location"]["rackId"], Value::Null);
    assert_eq!(attributes["interfaces"].as_array().map(Vec::len), Some(2));
    assert_eq!(attributes["enrollmentSecret"], Value::Null);
}

#[test]
fn test_case_insensitive_keys_give_identical_results() {
    let schema = device_schema();

    let canonical = schema.validate(&json!({"serialNumber": "x"})).unwrap();
    let upper = schema.validate(&json!({"SERIALNUMBER": "x"})).unwrap();
    let lower = schema.validate(&json!({"serialnumber": "x"})).unwrap();

    assert_eq!(canonical, upper);
    assert_eq!(canonical, lower);
}

#[test]
fn test_core_user_name_case_insensitive() {
    let registry = core_registry();

    let a = registry
        .validate_resource(USER_SCHEMA_ID, &json!({"USERNAME": "x"}))
        .unwrap();
    let b = registry
        .validate_resource(USER_SCHEMA_ID, &json!({"userName": "x"}))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a["userName"], json!("x"));
}

#[test]
fn test_duplicate_keys_are_a_syntax_error() {
    let registry = core_registry();

    let err = registry
        .validate_resource(USER_SCHEMA_ID, &json!({"userName": "a", "USERNAME": "b"}))
        .unwrap_err();

    assert_eq!(err.kind(), ValidationErrorKind::InvalidSyntax);
    match err {
        ValidationError::DuplicateAttribute { attribute, keys } => {
            assert_eq!(attribute, "userName");
            assert_eq!(keys.len(), 2);
        }
        other => panic!("expected DuplicateAttribute, got {:?}", other),
    }
}

#[test]
fn test_duplicate_keys_in_optional_attribute_still_fail() {
    let schema = device_schema();
    let err = schema
        .validate(&json!({"serialNumber": "x", "label": "a", "Label": "b"}))
        .unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidSyntax);
}

#[test]
fn test_non_mapping_inputs_are_syntax_errors() {
    let schema = device_schema();
    for input in [json!("a string"), json!([1, 2, 3]), json!(null), json!(true), json!(3.5)] {
        let err = schema.validate(&input).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidSyntax, "input {}", input);
    }
}

#[test]
fn test_first_failing_attribute_aborts() {
    let schema = device_schema();
    let mut doc = valid_device();
    doc["slots"] = json!("forty-eight");
    doc["managed"] = json!("yes");

    let err = schema.validate(&doc).unwrap_err();
    // Attributes are processed in declaration order, so slots fails first
    assert!(matches!(
        err,
        ValidationError::InvalidDataType { ref attribute, .. } if attribute == "slots"
    ));
}

#[test]
fn test_attribute_level_failures_are_forwarded() {
    let schema = device_schema();
    let cases = [
        ("purchasedAt", json!("yesterday")),
        ("certificate", json!("%%%")),
        ("location", json!({"room": "B12"})),
        ("interfaces", json!("00:1b:44:11:3a:b7")),
        ("weightKg", json!("heavy")),
    ];

    for (attribute, value) in cases {
        let mut doc = valid_device();
        doc[attribute] = value;
        assert!(schema.validate(&doc).is_err(), "{} should be rejected", attribute);
    }
}

#[test]
fn test_multi_valued_shape_error_is_syntax() {
    let schema = device_schema();
    let mut doc = valid_device();
    doc["interfaces"] = json!(42);
    assert_eq!(
        schema.validate(&doc).unwrap_err().kind(),
        ValidationErrorKind::InvalidSyntax
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let schema = device_schema();
    let mut doc = valid_device();
    doc["schemas"] = json!([DEVICE_SCHEMA_ID]);
    doc["vendorSpecific"] = json!({"anything": true});

    let attributes = schema.validate(&doc).unwrap();
    assert!(!attributes.contains_key("schemas"));
    assert!(!attributes.contains_key("vendorSpecific"));
}

#[test]
fn test_missing_required_attribute() {
    let schema = device_schema();
    let err = schema.validate(&json!({"label": "orphan"})).unwrap_err();
    assert_eq!(err, ValidationError::missing_required("serialNumber"));
    assert_eq!(err.kind(), ValidationErrorKind::InvalidValue);
}

#[test]
fn test_null_counts_as_absent() {
    let schema = device_schema();
    assert!(schema.validate(&json!({"serialNumber": null})).is_err());

    let attributes = schema
        .validate(&json!({"serialNumber": "x", "label": null}))
        .unwrap();
    assert_eq!(attributes["label"], Value::Null);
}

#[test]
fn test_shared_schema_across_threads() {
    let registry = std::sync::Arc::new(core_registry());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                let user = json!({"userName": format!("user{}", i)});
                registry.validate_resource(USER_SCHEMA_ID, &user)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let attributes = handle.join().expect("validation thread panicked").unwrap();
        assert_eq!(attributes["userName"], json!(format!("user{}", i)));
    }
}
