use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the inaho workspace.
///
/// This wraps fitting failures, cell coercion diagnostics, argument validation
/// errors, input-table invariant violations, and an aggregate for whole-table
/// fitting attempts.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum InahoError {
    /// A grouping key has too few valid historical points to fit a trend line.
    #[error("insufficient data for {key}: {valid_points} valid point(s), need at least 2")]
    InsufficientData {
        /// Grouping key that could not be fit.
        key: String,
        /// Number of valid (non-missing, finite) points found for the key.
        valid_points: usize,
    },

    /// A cell value could not be coerced to a real number.
    ///
    /// Recoverable: the row is dropped from fitting and this condition is
    /// surfaced as a warning alongside a dropped-row count.
    #[error("non-numeric value for {key} in {year}: {raw:?}")]
    NonNumeric {
        /// Grouping key of the offending row.
        key: String,
        /// Year of the offending row.
        year: i32,
        /// Raw cell text as received from the loading layer.
        raw: String,
    },

    /// Invalid input argument (malformed window, zero step, year out of range).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the input or produced table (duplicate rows, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Every grouping key in the table failed to fit; contains the individual failures.
    #[error("all keys failed: {0:?}")]
    AllKeysFailed(Vec<InahoError>),
}

impl InahoError {
    /// Helper: build an `InsufficientData` error for a key and its valid-point count.
    pub fn insufficient_data(key: impl Into<String>, valid_points: usize) -> Self {
        Self::InsufficientData {
            key: key.into(),
            valid_points,
        }
    }

    /// Helper: build a `NonNumeric` diagnostic for a cell.
    pub fn non_numeric(key: impl Into<String>, year: i32, raw: impl Into<String>) -> Self {
        Self::NonNumeric {
            key: key.into(),
            year,
            raw: raw.into(),
        }
    }

    /// Helper: build an `InvalidArg` error from a message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from a message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Returns true if this error is recoverable by dropping the offending
    /// row or key rather than aborting the whole computation.
    ///
    /// Aggregates are classified based on their contents.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InsufficientData { .. } | Self::NonNumeric { .. } => true,
            Self::AllKeysFailed(inner) => inner.iter().all(Self::is_recoverable),
            _ => false,
        }
    }

    /// Flatten nested `AllKeysFailed` structures into a plain vector.
    ///
    /// This preserves other error variants as-is and unwraps recursively.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllKeysFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
