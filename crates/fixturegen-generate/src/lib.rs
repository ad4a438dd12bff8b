//! Value generation engine for fixturegen.
//!
//! Resolves a request against the type catalog, runs the matching generator
//! `count` times with an injected random source, and splices caller affixes
//! into structured identifiers. Results can be rendered as lines, CSV or a
//! JSON export document.

pub mod affix;
pub mod checksum;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod output;
pub mod params;

pub use engine::{EngineOptions, GenerationEngine, random_message};
pub use errors::GenerationError;
pub use generators::{Generator, generator_for};
pub use output::{OutputFormat, render_output};
pub use params::OptionMap;
