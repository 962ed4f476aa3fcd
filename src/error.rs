//! Error types for the GA solver.

use thiserror::Error;

/// Errors reported by the solver.
///
/// Both variants are fatal precondition violations: the algorithm itself
/// has no I/O or external service dependency, so nothing is retried.
#[derive(Error, Debug)]
pub enum GaError {
    /// An invalid run configuration was provided.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The supplied dataset violates a precondition of the solver.
    #[error("dataset error: {0}")]
    Dataset(String),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, GaError>;
