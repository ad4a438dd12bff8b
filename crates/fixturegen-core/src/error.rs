use thiserror::Error;

/// Core error type shared across fixturegen crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested type id is not part of the catalog.
    #[error("unknown type: {0}")]
    UnknownType(String),
}

/// Convenience alias for results returned by fixturegen crates.
pub type Result<T> = std::result::Result<T, Error>;
