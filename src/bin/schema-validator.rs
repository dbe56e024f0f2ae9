//! # SCIM Schema Validator
//!
//! A command-line utility for checking SCIM schema files and, optionally,
//! validating a resource document against a schema.
//!
//! ## Usage
//!
//! ### Validate a Single Schema File
//!
//! ```bash
//! cargo run --bin schema-validator schemas/User.json
//! ```
//!
//! ### Validate All Schemas in a Directory
//!
//! ```bash
//! cargo run --bin schema-validator ./schemas/
//! ```
//!
//! ### Validate a Resource Document
//!
//! ```bash
//! cargo run --bin schema-validator schemas/User.json user.json
//! ```
//!
//! Prints the normalized attributes on success, or the error and its SCIM
//! error type (`invalidSyntax` / `invalidValue`) on failure.
//!
//! Set `RUST_LOG=debug` to see validation logging.
//!
//! ## Exit Codes
//!
//! - `0`: All schemas (and the document, if given) are valid
//! - `1`: Something failed to load or validate

use scim_schema::schema::{AttributeType, Schema, SchemaRegistry};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <schema-file-or-directory> [document.json]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} schemas/User.json", args[0]);
        eprintln!("  {} ./schemas/", args[0]);
        eprintln!("  {} schemas/User.json user.json", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);

    if path.is_file() {
        let schema = validate_single_file(path);
        if let Some(document) = args.get(2) {
            validate_document(&schema, Path::new(document));
        }
    } else if path.is_dir() {
        if args.len() == 3 {
            eprintln!("Error: a document can only be validated against a single schema file");
            process::exit(1);
        }
        validate_directory(path);
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    }
}

fn validate_single_file(file_path: &Path) -> Schema {
    println!("Validating schema file: {}", file_path.display());

    match SchemaRegistry::load_schema_from_file(file_path) {
        Ok(schema) => {
            println!("✓ Schema is valid!");
            print_schema_summary(&schema);
            schema
        }
        Err(e) => {
            eprintln!("❌ Schema validation failed: {}", e);
            process::exit(1);
        }
    }
}

fn validate_directory(dir_path: &Path) {
    println!("Validating schemas in directory: {}", dir_path.display());

    match SchemaRegistry::from_schema_dir(dir_path) {
        Ok(registry) => {
            let schemas = registry.get_schemas();
            println!("✓ Schema registry loaded successfully");
            println!("  Total schemas loaded: {}", schemas.len());
            for schema in schemas {
                println!(
                    "    - {} ({})",
                    schema.name().unwrap_or("<unnamed>"),
                    schema.id()
                );
            }
        }
        Err(e) => {
            eprintln!("❌ Failed to load schema registry: {}", e);
            process::exit(1);
        }
    }
}

fn validate_document(schema: &Schema, document_path: &Path) {
    println!();
    println!("Validating document: {}", document_path.display());

    let document = match fs::read_to_string(document_path)
        .map_err(|e| e.to_string())
        .and_then(|content| {
            serde_json::from_str::<serde_json::Value>(&content).map_err(|e| e.to_string())
        }) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("❌ Failed to read document: {}", e);
            process::exit(1);
        }
    };

    match schema.validate(&document) {
        Ok(attributes) => {
            println!("✓ Document is valid!");
            match serde_json::to_string_pretty(&attributes) {
                Ok(text) => println!("{}", text),
                Err(e) => eprintln!("Failed to render attributes: {}", e),
            }
        }
        Err(e) => {
            eprintln!("❌ {} ({})", e, e.kind().scim_type());
            process::exit(1);
        }
    }
}

fn print_schema_summary(schema: &Schema) {
    println!();
    println!("Schema Summary:");
    println!("  ID: {}", schema.id());
    println!("  Name: {}", schema.name().unwrap_or("<none>"));
    println!("  Description: {}", schema.description().unwrap_or("<none>"));
    println!("  Attributes: {}", schema.attributes().len());

    let mut type_counts: BTreeMap<AttributeType, usize> = BTreeMap::new();
    let mut required_count = 0;
    let mut multi_valued_count = 0;

    for attr in schema.attributes() {
        *type_counts.entry(attr.data_type()).or_insert(0) += 1;
        if attr.is_required() {
            required_count += 1;
        }
        if attr.is_multi_valued() {
            multi_valued_count += 1;
        }
    }

    println!("  Required attributes: {}", required_count);
    println!("  Multi-valued attributes: {}", multi_valued_count);
    println!("  Attribute types:");
    for (attr_type, count) in type_counts {
        println!("    - {}: {}", attr_type, count);
    }

    let required_attrs: Vec<&str> = schema
        .attributes()
        .iter()
        .filter(|attr| attr.is_required())
        .map(|attr| attr.name())
        .collect();

    if !required_attrs.is_empty() {
        println!("  Required attribute names: {}", required_attrs.join(", "));
    }
}
