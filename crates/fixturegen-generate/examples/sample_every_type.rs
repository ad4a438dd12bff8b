use fixturegen_core::{GenerationRequest, TypeId};
use fixturegen_generate::{EngineOptions, GenerationEngine};

fn main() {
    let engine = GenerationEngine::new(EngineOptions { seed: Some(1) });
    for id in TypeId::ALL {
        let result = engine
            .generate(&GenerationRequest::new(id.as_str(), 1))
            .expect("generate sample");
        let sample = result.values.join("").replace('\n', " | ");
        println!("{id:<12} {sample}");
    }
}
