use std::collections::BTreeMap;

use inaho_types::{
    ClampPolicy, ForecastReport, InahoConfig, InahoError, MergedSeries, Observation, SeriesRow,
    ShortSeriesPolicy,
};

use super::fit::fit_points;
use super::merge::merge_rows;

/// Result of an [`extend_with_forecast`] run: the merged table plus the
/// diagnostics record for the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    /// Historical and forecast rows, merged and sorted by `(key, year)`.
    pub series: MergedSeries,
    /// Dropped-row counts, skipped keys, and non-fatal warnings.
    pub report: ForecastReport,
}

/// Fit a linear trend per grouping key and append bounded future estimates
/// to the historical series.
///
/// - Rows with a missing or non-finite value are excluded from fitting and
///   counted in the report; they produce no output row.
/// - One least-squares line is fit per key over that key's own valid rows.
/// - Each projection-window year yields one forecast row per fitted key;
///   under [`ClampPolicy::ZeroFloor`] a negative estimate becomes 0.
///   Historical values are never clamped.
/// - Keys with fewer than two valid points follow the configured
///   [`ShortSeriesPolicy`]: `Fail` propagates the error, `Skip` keeps the
///   key's historical rows, emits no forecast for it, and records the key in
///   the report.
///
/// # Errors
/// - `InvalidArg` if the configuration is malformed or a row's year falls
///   outside the historical window.
/// - `Data` if a `(key, year)` pair appears twice.
/// - `InsufficientData` under `ShortSeriesPolicy::Fail` for the first key
///   with fewer than two valid points.
/// - `AllKeysFailed` under `ShortSeriesPolicy::Skip` when not a single key
///   could be fit from a non-empty table.
pub fn extend_with_forecast(
    rows: &[Observation],
    cfg: &InahoConfig,
) -> Result<ForecastOutcome, InahoError> {
    cfg.validate()?;

    // Group rows per key, rejecting duplicate (key, year) pairs and years
    // outside the observed range up front.
    let mut by_key: BTreeMap<&str, BTreeMap<i32, Option<f64>>> = BTreeMap::new();
    for row in rows {
        if !cfg.historical.contains(row.year) {
            return Err(InahoError::invalid_arg(format!(
                "{} in {} lies outside the historical window {}..={}",
                row.key, row.year, cfg.historical.start, cfg.historical.end
            )));
        }
        let series = by_key.entry(&row.key).or_default();
        if series.insert(row.year, row.value).is_some() {
            return Err(InahoError::data(format!(
                "duplicate row for {} in {}",
                row.key, row.year
            )));
        }
    }

    let mut report = ForecastReport::default();
    let mut historical: Vec<SeriesRow> = Vec::new();
    let mut forecast: Vec<SeriesRow> = Vec::new();
    let mut failures: Vec<InahoError> = Vec::new();

    for (key, series) in &by_key {
        let mut points: Vec<(i32, f64)> = Vec::with_capacity(series.len());
        for (year, value) in series {
            match (*value).filter(|v| v.is_finite()) {
                Some(v) => points.push((*year, v)),
                None => report.dropped_rows += 1,
            }
        }

        historical.extend(points.iter().map(|(year, value)| SeriesRow {
            key: (*key).to_string(),
            year: *year,
            value: *value,
            projected: false,
        }));

        let model = match fit_points(key, &points) {
            Ok(m) => m,
            Err(err) if matches!(cfg.short_series, ShortSeriesPolicy::Skip) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key = %key, valid_points = points.len(), "skipping unfittable series");
                report.skipped_keys.push((*key).to_string());
                report.warnings.push(err.clone());
                failures.push(err);
                continue;
            }
            Err(err) => return Err(err),
        };

        report.fitted_keys += 1;
        for year in cfg.projection.years() {
            let value = if matches!(cfg.clamp, ClampPolicy::Unclamped) {
                model.project(year)
            } else {
                model.project_clamped(year)
            };
            forecast.push(SeriesRow {
                key: (*key).to_string(),
                year,
                value,
                projected: true,
            });
        }
    }

    if report.fitted_keys == 0 && !by_key.is_empty() {
        return Err(InahoError::AllKeysFailed(failures));
    }

    let series = merge_rows(historical, forecast)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = series.len(),
        fitted_keys = report.fitted_keys,
        dropped_rows = report.dropped_rows,
        skipped_keys = report.skipped_keys.len(),
        "extended series with forecast"
    );

    Ok(ForecastOutcome { series, report })
}
