//! Inaho turns prepared agricultural statistics tables into merged
//! historical-plus-forecast series and chart-ready groupings.
//!
//! Overview
//! - Coerces raw spreadsheet cells into typed observations with explicit
//!   per-cell diagnostics instead of silent NaNs.
//! - Fits one ordinary least-squares trend per grouping key over the
//!   configured historical window and projects it onto the configured future
//!   years, flooring negative estimates at zero by default.
//! - Merges observed and projected rows into a single table whose
//!   `projected` flag lets a renderer dim forecast bars, exactly as the
//!   source dashboards draw them.
//! - Prepares stacked-chart groupings (by prefecture or by region category)
//!   and per-year totals from the merged table; rendering itself stays out of
//!   scope.
//!
//! Key behaviors and trade-offs
//! - Clamping applies to projected rows only; historical values pass through
//!   untouched even if negative.
//! - Keys with fewer than two valid points follow `ShortSeriesPolicy`:
//!   `Fail` propagates `InsufficientData`, `Skip` keeps the key's history,
//!   emits no forecast for it, and records the key in the report. Neither
//!   mode drops a key silently.
//! - Everything is synchronous and pure: identical input tables produce
//!   bit-identical output tables, and nothing is cached between calls.
//!
//! Examples
//! Building a facade and extending a table with a forecast:
//! ```rust,ignore
//! use inaho::{Inaho, Observation};
//!
//! let inaho = Inaho::builder().build()?;
//! let rows = vec![
//!     Observation::new("秋田", 1995, 100.0),
//!     Observation::new("秋田", 2000, 90.0),
//!     // ...
//! ];
//! let outcome = inaho.forecast(&rows)?;
//! for row in &outcome.series.rows {
//!     println!("{} {} {} projected={}", row.key, row.year, row.value, row.projected);
//! }
//! ```
//!
//! Preparing a stacked chart grouped by region category:
//! ```rust,ignore
//! use inaho::Selection;
//!
//! let chart = inaho.chart(&outcome.series, &Selection::all())?;
//! for group in &chart.groups {
//!     // one stacked-bar series per region, observed and forecast split
//! }
//! ```
//!
//! See `inaho/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod view;

pub use core::{Inaho, InahoBuilder};
pub use view::{GroupSeries, Selection, StackedChart, stacked_chart};

// Re-export core types for convenience
pub use inaho_core::{
    ForecastOutcome,
    LinearModel,
    RegionMap,
    aggregate,
    coerce_rows,
    extend_with_forecast,
    fit_points,
    merge_rows,
};
pub use inaho_types::{
    ClampPolicy,
    CoercionReport,
    ForecastReport,
    HistoricalWindow,
    InahoConfig,
    InahoError,
    MergedSeries,
    Observation,
    ProjectionWindow,
    RawRow,
    SeriesRow,
    ShortSeriesPolicy,
};
