use std::collections::BTreeMap;

use inaho_core::{RegionMap, aggregate};
use inaho_types::{InahoError, MergedSeries, SeriesRow};
use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// One stacked-bar series: a display group with its observed and forecast
/// values split apart, so the renderer can draw forecast bars dimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSeries {
    /// Display label: a region category in the nationwide view, otherwise a
    /// grouping key.
    pub label: String,
    /// Observed `(year, value)` pairs in year order.
    pub observed: Vec<(i32, f64)>,
    /// Forecast `(year, value)` pairs in year order.
    pub forecast: Vec<(i32, f64)>,
}

/// Chart-ready stacked series plus the per-year totals drawn above the bars.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedChart {
    /// One entry per display group, in display order.
    pub groups: Vec<GroupSeries>,
    /// Per-year sums over every row contributing to `groups`.
    pub totals: Vec<(i32, f64)>,
}

/// Assemble a stacked chart from a merged series under a selection.
///
/// - The nationwide view stacks one series per region category; keys without
///   a category (such as the 全国 pseudo-key) are excluded.
/// - A category view stacks one series per key, keys sorted.
/// - `totals` sums exactly the rows that landed in a group, so the label
///   trace always matches the stacked bars.
///
/// # Errors
/// Returns `Err(InahoError::InvalidArg)` if the selection names a category
/// the region map does not know, or a key that does not occur in the scoped
/// series.
pub fn stacked_chart(
    series: &MergedSeries,
    regions: &RegionMap,
    selection: &Selection,
) -> Result<StackedChart, InahoError> {
    if let Some(category) = &selection.category
        && !regions.has_category(category)
    {
        return Err(InahoError::invalid_arg(format!(
            "unknown category in selection: {category}"
        )));
    }

    let in_category = |row: &SeriesRow| match &selection.category {
        Some(category) => regions.category_of(&row.key) == Some(category.as_str()),
        None => true,
    };

    if let Some(keys) = &selection.keys {
        for key in keys {
            let in_scope = series.rows.iter().any(|r| r.key == *key && in_category(r));
            if !in_scope {
                return Err(InahoError::invalid_arg(format!(
                    "unknown key in selection: {key}"
                )));
            }
        }
    }

    let selected = |row: &SeriesRow| {
        in_category(row)
            && selection
                .keys
                .as_ref()
                .is_none_or(|keys| keys.iter().any(|k| k == &row.key))
    };

    let label_of = |row: &SeriesRow| {
        if selection.groups_by_category() {
            regions.category_of(&row.key).map(str::to_string)
        } else {
            Some(row.key.clone())
        }
    };

    let scoped: Vec<&SeriesRow> = series
        .rows
        .iter()
        .filter(|r| selected(r) && label_of(r).is_some())
        .collect();

    let observed = aggregate::sum_by_group_year(
        scoped.iter().copied().filter(|r| !r.projected),
        label_of,
    );
    let forecast = aggregate::sum_by_group_year(
        scoped.iter().copied().filter(|r| r.projected),
        label_of,
    );

    let mut by_label: BTreeMap<String, GroupSeries> = BTreeMap::new();
    for ((label, year), value) in observed {
        by_label
            .entry(label.clone())
            .or_insert_with(|| empty_group(label))
            .observed
            .push((year, value));
    }
    for ((label, year), value) in forecast {
        by_label
            .entry(label.clone())
            .or_insert_with(|| empty_group(label))
            .forecast
            .push((year, value));
    }

    let groups = if selection.groups_by_category() {
        // Present categories in the map's display order, not lexicographic.
        regions
            .categories()
            .iter()
            .filter_map(|c| by_label.remove(c))
            .collect()
    } else {
        by_label.into_values().collect()
    };

    let totals = aggregate::sum_by_year(scoped.iter().copied());

    Ok(StackedChart { groups, totals })
}

fn empty_group(label: String) -> GroupSeries {
    GroupSeries {
        label,
        observed: Vec::new(),
        forecast: Vec::new(),
    }
}
