//! Row and table types exchanged between the loading layer, the estimator,
//! and the presentation layer.

use serde::{Deserialize, Serialize};

/// One textual cell exactly as the loading layer handed it over.
///
/// Spreadsheet exports carry thousands separators and placeholder markers for
/// suppressed or missing cells; the coercion pass turns these into
/// [`Observation`]s with per-cell diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Grouping key (e.g. prefecture name).
    pub key: String,
    /// Observation year.
    pub year: i32,
    /// Raw cell text.
    pub value: String,
}

/// One observed data point for a grouping key.
///
/// `value` is `None` for a missing cell. A present non-finite value (NaN or
/// ±inf) is likewise excluded from fitting and counted as dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Grouping key (e.g. prefecture name).
    pub key: String,
    /// Observation year. Must fall inside the configured historical window.
    pub year: i32,
    /// Observed value, if present.
    pub value: Option<f64>,
}

impl Observation {
    /// Convenience constructor for a present value.
    pub fn new(key: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            key: key.into(),
            year,
            value: Some(value),
        }
    }

    /// Convenience constructor for a missing value.
    pub fn missing(key: impl Into<String>, year: i32) -> Self {
        Self {
            key: key.into(),
            year,
            value: None,
        }
    }

    /// The value, if present and finite.
    #[must_use]
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }
}

/// One row of the merged output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    /// Grouping key.
    pub key: String,
    /// Year of the row.
    pub year: i32,
    /// Observed value for historical rows, fitted value for forecast rows.
    pub value: f64,
    /// True for forecast rows, false for observed rows. The rendering layer
    /// uses this to tell historical bars from forecast bars.
    pub projected: bool,
}

/// Merged table of historical and forecast rows.
///
/// Invariants upheld by the producing functions:
/// - `(key, year)` pairs are unique;
/// - rows are sorted by `(key, year)`;
/// - rows inside the historical window carry `projected = false`, rows beyond
///   it `projected = true`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MergedSeries {
    /// The merged rows.
    pub rows: Vec<SeriesRow>,
}

impl MergedSeries {
    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the rows for one grouping key, in year order.
    pub fn rows_for(&self, key: &str) -> impl Iterator<Item = &SeriesRow> {
        self.rows.iter().filter(move |r| r.key == key)
    }

    /// Iterate only the observed (non-forecast) rows.
    pub fn historical(&self) -> impl Iterator<Item = &SeriesRow> {
        self.rows.iter().filter(|r| !r.projected)
    }

    /// Iterate only the forecast rows.
    pub fn forecast(&self) -> impl Iterator<Item = &SeriesRow> {
        self.rows.iter().filter(|r| r.projected)
    }

    /// Distinct grouping keys, in table order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for r in &self.rows {
            if keys.last() != Some(&r.key.as_str()) && !keys.contains(&r.key.as_str()) {
                keys.push(&r.key);
            }
        }
        keys
    }
}
