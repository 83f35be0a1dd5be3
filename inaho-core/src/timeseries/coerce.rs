use inaho_types::{CoercionReport, InahoError, Observation, RawRow};

/// Markers used by the source spreadsheets for suppressed or absent cells.
///
/// Matched after trimming, case-insensitively for the alphabetic ones. The
/// fullwidth variants appear in tables exported from Japanese statistics
/// portals.
const MISSING_MARKERS: &[&str] = &["", "-", "−", "…", "...", "x", "ｘ", "nan", "na", "n/a"];

enum Cell {
    Value(f64),
    Missing,
    Garbage,
}

fn classify(raw: &str) -> Cell {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    if MISSING_MARKERS.contains(&lowered.as_str()) {
        return Cell::Missing;
    }

    // Thousands separators, ASCII or fullwidth, are routine in these exports.
    let cleaned: String = trimmed.chars().filter(|c| *c != ',' && *c != '，').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Cell::Value(v),
        _ => Cell::Garbage,
    }
}

/// Coerce raw textual rows into observations.
///
/// Mirrors the lenient numeric conversion the source dashboards apply to
/// freshly loaded columns, but keeps the diagnostics explicit instead of
/// coercing silently: every row whose value comes out missing is counted in
/// the report, and cells that are neither numbers nor recognized
/// missing-value markers additionally produce a
/// [`NonNumeric`](InahoError::NonNumeric) warning.
///
/// Row order is preserved; no row is removed, only its value may become
/// `None`.
#[must_use]
pub fn coerce_rows(rows: Vec<RawRow>) -> (Vec<Observation>, CoercionReport) {
    let mut report = CoercionReport::default();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let value = match classify(&row.value) {
            Cell::Value(v) => Some(v),
            Cell::Missing => {
                report.dropped_rows += 1;
                None
            }
            Cell::Garbage => {
                #[cfg(feature = "tracing")]
                tracing::warn!(key = %row.key, year = row.year, raw = %row.value, "dropping non-numeric cell");
                report.dropped_rows += 1;
                report
                    .warnings
                    .push(InahoError::non_numeric(&row.key, row.year, &row.value));
                None
            }
        };
        out.push(Observation {
            key: row.key,
            year: row.year,
            value,
        });
    }

    (out, report)
}
