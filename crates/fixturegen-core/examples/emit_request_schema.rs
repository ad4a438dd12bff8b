use fixturegen_core::{GenerationRequest, GenerationResult};
use schemars::schema_for;

fn main() {
    for schema in [
        schema_for!(GenerationRequest),
        schema_for!(GenerationResult),
    ] {
        let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
        println!("{json}");
    }
}
