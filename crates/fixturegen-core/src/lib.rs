//! Core contracts for fixturegen.
//!
//! This crate defines the closed catalog of generatable types, their option
//! schemas, the request/result contracts, and the static locale and format
//! tables shared by the generators.

pub mod error;
pub mod options;
pub mod registry;
pub mod request;
pub mod tables;
pub mod types;

pub use error::{Error, Result};
pub use options::{Bounds, OptionChoice, OptionKind, OptionSpec};
pub use registry::{TypeDescriptor, TypeSummary, get_type, get_type_options, list_types};
pub use request::{GenerationRequest, GenerationResult};
pub use types::{Category, TypeId};

/// Smallest accepted batch size for one generation request.
pub const MIN_COUNT: i64 = 1;
/// Largest accepted batch size for one generation request.
pub const MAX_COUNT: i64 = 1000;
