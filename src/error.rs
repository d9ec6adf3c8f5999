use thiserror::Error;

/// Errors returned by the vectorizer.
///
/// Every operation fails synchronously at the offending call and never
/// returns a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `min_frequency` must be at least 1.
    #[error("min_frequency must be at least 1, got {value}")]
    InvalidMinFrequency { value: usize },

    /// transform / inverse_transform / vocabulary used before fit.
    #[error("vectorizer instance is not fitted")]
    NotFitted,

    /// A row handed to inverse_transform does not have one slot per vocabulary entry.
    #[error("row {row} has length {actual}, but the vocabulary size is {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A serialized vocabulary listed the same token twice.
    #[error("duplicate token in vocabulary: {token:?}")]
    DuplicateToken { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;
