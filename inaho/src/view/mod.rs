//! Chart-preparation layer consuming the merged series table.
//!
//! This is deliberately thin: it filters rows per a selection, groups them by
//! prefecture or by region category, splits observed from forecast values,
//! and computes per-year totals. Colors, widget wiring, and layout belong to
//! the rendering layer and stay out of this crate.

mod selection;
mod stacked;

pub use selection::Selection;
pub use stacked::{GroupSeries, StackedChart, stacked_chart};
