use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("Invalid dimension: expected {expected}, got {got}")]
    InvalidDimension {
        expected: usize,
        got: usize,
    },

    #[error("Invalid modulus: {modulus}")]
    InvalidModulus { modulus: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Short vector sampling did not converge after {iterations} iterations (bound {bound})")]
    SamplingDidNotConverge {
        iterations: usize,
        bound: u64,
    },
}

pub type Result<T> = std::result::Result<T, CommitmentError>;

impl CommitmentError {
    /// Shorthand used by parameter validation.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
