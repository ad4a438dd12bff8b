use fixturegen_core::GenerationRequest;
use schemars::schema_for;
use serde_json::json;

#[test]
fn request_schema_names_every_field() {
    let schema = serde_json::to_value(schema_for!(GenerationRequest)).expect("serialize schema");
    let properties = schema["properties"]
        .as_object()
        .expect("request properties");
    for field in ["type_id", "count", "options", "prefix", "suffix"] {
        assert!(properties.contains_key(field), "missing {field}");
    }
    assert_eq!(schema["required"], json!(["type_id"]));
}

#[test]
fn request_defaults_count_and_options() {
    let request: GenerationRequest =
        serde_json::from_value(json!({"type_id": "uuid"})).expect("parse request");
    assert_eq!(request, GenerationRequest::new("uuid", 1));
}

#[test]
fn request_builder_round_trips_through_json() {
    let request = GenerationRequest::new("mac_address", 3)
        .with_option("separator", "-")
        .with_prefix("AA");
    let json = serde_json::to_value(&request).expect("serialize request");
    assert_eq!(
        json,
        json!({
            "type_id": "mac_address",
            "count": 3,
            "options": {"separator": "-"},
            "prefix": "AA"
        })
    );
}
