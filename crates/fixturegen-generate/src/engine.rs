use std::time::Instant;

use fixturegen_core::tables::words::RESULT_MESSAGES;
use fixturegen_core::{
    GenerationRequest, GenerationResult, MAX_COUNT, MIN_COUNT, TypeDescriptor, TypeId, get_type,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::affix::{splice_affix, splice_uuid};
use crate::errors::GenerationError;
use crate::generators::{generator_for, pick};
use crate::params::OptionMap;

/// Options for the generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Seed every call's random source; `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

/// Entry point for turning requests into generated values.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: EngineOptions,
}

impl GenerationEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        self.generate_with_rng(request, &mut rng)
    }

    /// Like [`generate`](Self::generate) with a caller-supplied random source.
    pub fn generate_with_rng(
        &self,
        request: &GenerationRequest,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationResult, GenerationError> {
        let descriptor = get_type(&request.type_id).map_err(|err| {
            warn!(event = "request_rejected", type_id = %request.type_id, error = %err);
            GenerationError::from(err)
        })?;
        validate_count(request.count).inspect_err(|err| {
            warn!(event = "request_rejected", type_id = %descriptor.id, error = %err);
        })?;

        let start = Instant::now();
        let options = OptionMap::normalize(descriptor, &request.options);
        let generator = generator_for(descriptor.id);
        let affix = Affix::resolve(descriptor, request, &options);
        debug!(
            event = "generation_started",
            type_id = %descriptor.id,
            count = request.count,
            affix = affix.is_some()
        );

        let values: Vec<String> = (0..request.count)
            .map(|_| {
                let value = generator.generate(&options, rng);
                match &affix {
                    Some(affix) => affix.apply(descriptor.id, &value),
                    None => value,
                }
            })
            .collect();

        debug!(
            event = "generation_finished",
            type_id = %descriptor.id,
            values = values.len(),
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(GenerationResult {
            ok: true,
            values,
            message: random_message(rng),
        })
    }
}

/// Cosmetic message attached to successful results.
pub fn random_message(rng: &mut dyn RngCore) -> String {
    pick(RESULT_MESSAGES, rng).unwrap_or("Done!").to_string()
}

fn validate_count(count: i64) -> Result<(), GenerationError> {
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(GenerationError::InvalidCount {
            count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        })
    }
}

struct Affix {
    prefix: String,
    suffix: String,
}

impl Affix {
    /// Request fields win over declared `prefix`/`suffix` options.
    fn resolve(
        descriptor: &TypeDescriptor,
        request: &GenerationRequest,
        options: &OptionMap,
    ) -> Option<Self> {
        if !descriptor.supports_affix && descriptor.id != TypeId::Uuid {
            return None;
        }
        let prefix = request
            .prefix
            .clone()
            .or_else(|| options.get_text("prefix"))
            .unwrap_or_default();
        let suffix = request
            .suffix
            .clone()
            .or_else(|| options.get_text("suffix"))
            .unwrap_or_default();
        if prefix.is_empty() && suffix.is_empty() {
            return None;
        }
        Some(Self { prefix, suffix })
    }

    fn apply(&self, type_id: TypeId, value: &str) -> String {
        match type_id {
            TypeId::Uuid => splice_uuid(value, &self.prefix, &self.suffix),
            _ => splice_affix(value, &self.prefix, &self.suffix),
        }
    }
}
