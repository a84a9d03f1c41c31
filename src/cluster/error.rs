use thiserror::Error;

/// Argument errors raised by [`KMeans::fit`](crate::cluster::KMeans::fit).
///
/// All variants are detected before the first iteration begins; a fit either
/// fails up front or runs to a usable terminal state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClusterError {
    #[error("input sample set is empty")]
    EmptyInput,

    /// The cluster count must satisfy 1 <= k <= number of samples.
    #[error("invalid cluster count: requested {requested} with {available} samples")]
    InvalidClusterCount { requested: usize, available: usize },

    #[error("iteration cap must be at least 1")]
    InvalidIterationCap,

    /// Samples must all share one dimension.
    #[error("sample {index} has dimension {found}, expected {expected}")]
    DimensionMismatch { index: usize, expected: usize, found: usize },
}
