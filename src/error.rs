use thiserror::Error;

/// Errors returned by the clustering primitives.
///
/// Every variant is terminal: a failing call produces no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A cluster list that must be nonempty was empty.
    #[error("no clusters")]
    EmptyClusterSet,

    /// A dataset that must be nonempty was empty.
    #[error("no data")]
    NoData,

    /// Invalid parameter value.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Fewer unique points than requested clusters.
    #[error("not enough unique points: requested {requested}, found {unique}")]
    InsufficientData {
        /// Requested number of clusters.
        requested: usize,
        /// Number of unique vectors in the dataset.
        unique: usize,
    },

    /// Vectors of differing length were compared or combined.
    #[error("dimensions of vectors do not match: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A mean was requested over a zero total weight.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
