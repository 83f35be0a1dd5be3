//! Time-series utilities shared by the estimator and the facade.
//!
//! Modules include:
//! - `coerce`: turn raw spreadsheet cells into observations with diagnostics
//! - `fit`: per-key ordinary least-squares trend fitting and projection
//! - `merge`: join historical and forecast rows into one table
//! - `forecast`: the end-to-end extend-with-forecast computation
/// Numeric coercion of raw cells.
pub mod coerce;
/// Least-squares fitting and projection.
pub mod fit;
/// The end-to-end forecast-and-merge computation.
pub mod forecast;
/// Merge utilities for joining historical and forecast rows.
pub mod merge;
