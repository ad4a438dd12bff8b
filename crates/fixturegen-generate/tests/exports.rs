use chrono::{TimeZone, Utc};
use fixturegen_core::{GenerationRequest, GenerationResult};
use fixturegen_generate::output::ExportDocument;
use fixturegen_generate::{OutputFormat, render_output};
use serde_json::json;

fn result(values: &[&str]) -> GenerationResult {
    GenerationResult {
        ok: true,
        values: values.iter().map(|value| value.to_string()).collect(),
        message: "🎯 Bullseye!".to_string(),
    }
}

#[test]
fn lines_output_has_one_value_per_line() {
    let request = GenerationRequest::new("ssn", 2);
    let bytes = render_output(
        OutputFormat::Lines,
        &request,
        &result(&["123-45-6789", "987-65-4321"]),
    )
    .expect("render lines");
    assert_eq!(
        String::from_utf8(bytes).expect("utf8"),
        "123-45-6789\n987-65-4321\n"
    );
}

#[test]
fn csv_output_quotes_multiline_values() {
    let request = GenerationRequest::new("address", 2);
    let bytes = render_output(
        OutputFormat::Csv,
        &request,
        &result(&["12 High Street\nLondon\nSW1 2AB", "1 Main St, Austin, TX 73301"]),
    )
    .expect("render csv");
    let text = String::from_utf8(bytes).expect("utf8");
    assert_eq!(
        text,
        "value\n\"12 High Street\nLondon\nSW1 2AB\"\n\"1 Main St, Austin, TX 73301\"\n"
    );
}

#[test]
fn json_export_document_shape() {
    let request = GenerationRequest::new("uuid", 1).with_prefix("ab");
    let generated_at = Utc
        .with_ymd_and_hms(2025, 3, 4, 5, 6, 7)
        .single()
        .expect("timestamp");
    let document = ExportDocument::new(
        &request,
        &result(&["ab3e4567-e89b-42d3-a456-426614174000"]),
        generated_at,
    );
    let value = serde_json::to_value(&document).expect("serialize");
    assert_eq!(
        value,
        json!({
            "type": "uuid",
            "prefix": "ab",
            "suffix": null,
            "count": 1,
            "generated_at": "2025-03-04T05:06:07.000Z",
            "message": "🎯 Bullseye!",
            "data": ["ab3e4567-e89b-42d3-a456-426614174000"]
        })
    );
}

#[test]
fn json_render_round_trips() {
    let request = GenerationRequest::new("ip", 2);
    let bytes = render_output(OutputFormat::Json, &request, &result(&["1.2.3.4", "5.6.7.8"]))
        .expect("render json");
    let document: ExportDocument = serde_json::from_slice(&bytes).expect("parse export");
    assert_eq!(document.type_id, "ip");
    assert_eq!(document.count, 2);
    assert_eq!(document.data, ["1.2.3.4", "5.6.7.8"]);
    assert!(document.generated_at.ends_with('Z'));
}
