use passengers_lib::render::passenger_rows;
use passengers_lib::types::ResponsePayload;
use passengers_lib::{Labels, TableRow};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("passengers_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn rendered_rows(fixture: Value, labels: &Labels) -> Value {
    let payload = ResponsePayload::from_json(fixture).expect("fixture is a payload");
    let rows: Vec<_> = passenger_rows(payload.records(), labels)
        .into_iter()
        .map(|row| match row {
            TableRow::Passenger(p) => p,
            other => panic!("unexpected row {:?}", other),
        })
        .collect();
    serde_json::to_value(rows).expect("rows serialize")
}

// ---------------------------------------------------------------------------
// Positive validation: rendered rows conform to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_rendered_rows_conform_to_schema() {
    let data = rendered_rows(load_fixture("passengers.json"), &Labels::zh_tw());
    let schema = load_schema("passenger_row.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("row schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("rendered rows failed validation: {e}");
    }
}

#[test]
fn test_empty_fixture_renders_empty_array() {
    let data = rendered_rows(load_fixture("passengers_empty.json"), &Labels::en());
    let schema = load_schema("passenger_row.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("row schema compiles");
    assert!(validator.is_valid(&data));
    assert_eq!(data.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_status_fixture_conforms_to_schema() {
    let data = load_fixture("status.json");
    let schema = load_schema("status.schema.json");

    let validator = jsonschema::draft202012::new(&schema).expect("status schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("status fixture failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: the schema rejects rows it should not accept
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_numeric_cells() {
    let schema = load_schema("passenger_row.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("row schema compiles");
    let bad = serde_json::json!([{
        "PassengerId": 1, "Name": "A", "Sex": "male", "Age": "N/A",
        "Survived": "No", "Pclass": "3", "Fare": "7.25"
    }]);
    assert!(!validator.is_valid(&bad));
}

#[test]
fn test_schema_rejects_missing_column() {
    let schema = load_schema("passenger_row.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("row schema compiles");
    let bad = serde_json::json!([{
        "PassengerId": "1", "Name": "A", "Sex": "male", "Age": "N/A",
        "Survived": "No", "Pclass": "3"
    }]);
    assert!(!validator.is_valid(&bad));
}
