//! inaho-core
//!
//! Estimation and table utilities shared across the inaho workspace.
//!
//! - `timeseries`: coercion, least-squares fitting, projection, and merge of
//!   historical and forecast rows.
//! - `aggregate`: per-year sums and aligned ratio series for chart assembly.
//! - `region`: the prefecture-to-region grouping used by the Japanese
//!   agricultural datasets.
//!
//! Everything here is synchronous and pure: the loading layer hands over a
//! prepared table, the core hands back a merged table plus a diagnostics
//! report, and no state survives between calls.
#![warn(missing_docs)]

/// Per-year aggregation helpers.
pub mod aggregate;
/// Prefecture-to-region grouping tables.
pub mod region;
/// Time-series coercion, fitting, and merge utilities.
pub mod timeseries;

pub use region::RegionMap;
pub use timeseries::coerce::coerce_rows;
pub use timeseries::fit::{LinearModel, fit_points};
pub use timeseries::forecast::{ForecastOutcome, extend_with_forecast};
pub use timeseries::merge::merge_rows;
