//! Report envelopes produced by the estimator and helpers.

use serde::{Deserialize, Serialize};

use crate::error::InahoError;

/// Diagnostics for a coercion pass over a raw table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CoercionReport {
    /// Number of rows whose value came out missing.
    pub dropped_rows: usize,
    /// Per-cell `NonNumeric` diagnostics for unparseable text. Cells carrying
    /// a recognized missing-value marker are dropped without a warning.
    pub warnings: Vec<InahoError>,
}

/// Diagnostics for a forecast-and-merge computation.
///
/// Carries the non-fatal side of the run: how many input rows were excluded
/// from fitting, which keys were skipped under
/// [`ShortSeriesPolicy::Skip`](crate::ShortSeriesPolicy), and any warnings
/// encountered while building the merged table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ForecastReport {
    /// Number of grouping keys that were successfully fit.
    pub fitted_keys: usize,
    /// Number of input rows excluded from fitting (missing or non-finite values).
    pub dropped_rows: usize,
    /// Keys left unforecast because they had too few valid points.
    pub skipped_keys: Vec<String>,
    /// Non-fatal issues encountered while building the merged table.
    pub warnings: Vec<InahoError>,
}

impl ForecastReport {
    /// Whether the run completed without dropping rows or skipping keys.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dropped_rows == 0 && self.skipped_keys.is_empty() && self.warnings.is_empty()
    }
}
