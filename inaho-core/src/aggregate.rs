//! Per-year aggregation helpers for chart assembly.
//!
//! The dashboards repeatedly reduce a filtered table to per-year sums (the
//! stacked-bar totals drawn above each column) and to aligned ratio series
//! (the income-share line). Both reductions are pure and order-independent.

use std::collections::BTreeMap;

use inaho_types::SeriesRow;

/// Sum row values per year across all given rows.
///
/// Output is sorted by year. Years are summed in `(key, year)` table order,
/// so the same table always produces bit-identical totals.
pub fn sum_by_year<'a, I>(rows: I) -> Vec<(i32, f64)>
where
    I: IntoIterator<Item = &'a SeriesRow>,
{
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.year).or_insert(0.0) += row.value;
    }
    totals.into_iter().collect()
}

/// Sum row values per `(group, year)` pair, where `group_of` maps a row's
/// key to its display group. Rows whose key maps to `None` are excluded.
pub fn sum_by_group_year<'a, I, F>(rows: I, mut group_of: F) -> BTreeMap<(String, i32), f64>
where
    I: IntoIterator<Item = &'a SeriesRow>,
    F: FnMut(&SeriesRow) -> Option<String>,
{
    let mut totals: BTreeMap<(String, i32), f64> = BTreeMap::new();
    for row in rows {
        if let Some(group) = group_of(row) {
            *totals.entry((group, row.year)).or_insert(0.0) += row.value;
        }
    }
    totals
}

/// Align two per-year series and emit `numerator / denominator` per year.
///
/// Years present in only one input are omitted, as are years with a zero
/// denominator. Inputs need not be sorted; output is sorted by year.
#[must_use]
pub fn ratio_series(numerator: &[(i32, f64)], denominator: &[(i32, f64)]) -> Vec<(i32, f64)> {
    let den: BTreeMap<i32, f64> = denominator.iter().copied().collect();
    let mut out: BTreeMap<i32, f64> = BTreeMap::new();
    for (year, num) in numerator {
        if let Some(d) = den.get(year)
            && *d != 0.0
        {
            out.insert(*year, num / d);
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, year: i32, value: f64) -> SeriesRow {
        SeriesRow {
            key: key.to_string(),
            year,
            value,
            projected: false,
        }
    }

    #[test]
    fn sums_collapse_keys_per_year() {
        let rows = vec![
            row("秋田", 1995, 10.0),
            row("山形", 1995, 5.0),
            row("秋田", 2000, 8.0),
        ];
        let totals = sum_by_year(&rows);
        assert_eq!(totals, vec![(1995, 15.0), (2000, 8.0)]);
    }

    #[test]
    fn grouped_sums_drop_unmapped_keys() {
        let rows = vec![
            row("秋田", 1995, 10.0),
            row("山形", 1995, 5.0),
            row("全国", 1995, 100.0),
        ];
        let totals = sum_by_group_year(&rows, |r| {
            (r.key != "全国").then(|| "東北".to_string())
        });
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&("東北".to_string(), 1995)], 15.0);
    }

    #[test]
    fn ratio_skips_unaligned_and_zero_denominator_years() {
        let num = [(1995, 50.0), (2000, 30.0), (2005, 10.0)];
        let den = [(1995, 100.0), (2000, 0.0), (2010, 40.0)];
        assert_eq!(ratio_series(&num, &den), vec![(1995, 0.5)]);
    }
}
