//! Error types for simulation setup and control writes

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Local validation failures. None of these are fatal to the running frame loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("a body named '{0}' already exists")]
    DuplicateName(String),

    #[error("invalid orbit parameter: {0}")]
    InvalidOrbitParameter(String),

    #[error("{what} {value} is outside [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no body with handle {0}")]
    UnknownBody(usize),
}
