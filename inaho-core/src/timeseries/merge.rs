use std::collections::{BTreeMap, btree_map::Entry};

use inaho_types::{InahoError, MergedSeries, SeriesRow};

/// Merge historical and forecast rows into one table.
///
/// - Rows are keyed by `(key, year)`; the output is sorted by that pair.
/// - A `(key, year)` pair appearing twice is a data error, not a silent
///   overwrite: forecast years lie strictly beyond the historical window, so
///   a collision means the input table was malformed.
///
/// # Errors
/// Returns `Err(InahoError::Data)` naming the first duplicated `(key, year)`
/// pair encountered.
pub fn merge_rows(
    historical: Vec<SeriesRow>,
    forecast: Vec<SeriesRow>,
) -> Result<MergedSeries, InahoError> {
    let mut map: BTreeMap<(String, i32), SeriesRow> = BTreeMap::new();

    for r in historical.into_iter().chain(forecast) {
        match map.entry((r.key.clone(), r.year)) {
            Entry::Vacant(v) => {
                v.insert(r);
            }
            Entry::Occupied(_) => {
                return Err(InahoError::data(format!(
                    "duplicate row for {} in {}",
                    r.key, r.year
                )));
            }
        }
    }

    Ok(MergedSeries {
        rows: map.into_values().collect(),
    })
}

// Inline tests omitted; covered by integration/property tests in `inaho-core/tests/`.
