//! Error types for filter construction and belief updates.

use std::fmt;

/// Errors surfaced by filter construction and belief updates.
///
/// All failures are synchronous and deterministic; nothing here is
/// retryable.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A probability parameter is NaN or outside `[0, 1]`.
    InvalidParameter { name: &'static str, value: f64 },
    /// World shape, belief shape, or sequence lengths are inconsistent.
    DimensionError { message: String },
    /// A correction step produced a zero or non-finite normalization sum.
    ///
    /// `index` carries the offending observation's position when the error
    /// is raised from a sequence run; a directly driven correction reports
    /// `None` because the caller owns step counting.
    DegenerateDistribution { index: Option<usize>, sum: f64 },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter {}: {} is not in [0, 1]", name, value)
            }
            FilterError::DimensionError { message } => {
                write!(f, "Dimension error: {}", message)
            }
            FilterError::DegenerateDistribution {
                index: Some(i),
                sum,
            } => {
                write!(
                    f,
                    "Degenerate belief at observation {}: normalization sum is {}",
                    i, sum
                )
            }
            FilterError::DegenerateDistribution { index: None, sum } => {
                write!(f, "Degenerate belief: normalization sum is {}", sum)
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
