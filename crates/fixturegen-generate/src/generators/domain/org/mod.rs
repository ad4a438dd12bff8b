use fixturegen_core::TypeId;
use fixturegen_core::tables::words::{COMPANY_PREFIXES, COMPANY_SUFFIXES, JOB_TITLES};
use rand::RngCore;

use crate::generators::{Generator, pick, pick_filtered};
use crate::params::OptionMap;

pub struct CompanyGenerator;

impl Generator for CompanyGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Company
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let head = options
            .get_text("starts_with")
            .unwrap_or_else(|| pick(COMPANY_PREFIXES, rng).unwrap_or("Acme").to_string());
        let suffix = pick(COMPANY_SUFFIXES, rng).unwrap_or("Inc");
        format!("{head} {suffix}")
    }
}

pub struct JobGenerator;

impl Generator for JobGenerator {
    fn type_id(&self) -> TypeId {
        TypeId::Job
    }

    fn generate(&self, options: &OptionMap, rng: &mut dyn RngCore) -> String {
        let seniority = options.get_choice("seniority").to_lowercase();
        let filtered: Vec<&str> = if seniority == "any" {
            JOB_TITLES.to_vec()
        } else {
            JOB_TITLES
                .iter()
                .copied()
                .filter(|title| title.to_lowercase().contains(&seniority))
                .collect()
        };
        pick_filtered(&filtered, JOB_TITLES, rng).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    fn run(generator: &dyn Generator, options: serde_json::Value, seed: u64) -> String {
        let options = OptionMap::for_type(generator.type_id(), &options);
        generator.generate(&options, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn company_uses_trimmed_head() {
        let company = run(&CompanyGenerator, json!({"starts_with": "  Initech "}), 2);
        let (head, suffix) = company.split_once(' ').expect("two parts");
        assert_eq!(head, "Initech");
        assert!(COMPANY_SUFFIXES.contains(&suffix));
    }

    #[test]
    fn job_filters_by_seniority() {
        for seed in 0..15 {
            let title = run(&JobGenerator, json!({"seniority": "senior"}), seed);
            assert!(title.starts_with("Senior"), "{title}");
            let title = run(&JobGenerator, json!({"seniority": "director"}), seed);
            assert!(title.contains("Director"), "{title}");
        }
    }
}
