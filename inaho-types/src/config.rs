//! Configuration types shared across the estimator and the facade.

use serde::{Deserialize, Serialize};

use crate::error::InahoError;

/// Policy for negative projected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClampPolicy {
    /// Replace a negative projection with zero.
    ///
    /// Applies to projected rows only; historical values pass through as-is.
    #[default]
    ZeroFloor,
    /// Emit the raw fitted value even when negative.
    Unclamped,
}

/// Policy for grouping keys with fewer than two valid historical points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ShortSeriesPolicy {
    /// Propagate `InsufficientData` to the caller and abort the computation.
    #[default]
    Fail,
    /// Keep the key's historical rows, emit no forecast rows for it, and
    /// record the key in the report. Skipping is explicit, never silent.
    Skip,
}

/// Inclusive year range containing observed, non-forecast data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalWindow {
    /// First observed year, inclusive.
    pub start: i32,
    /// Last observed year, inclusive. Rows beyond this year are forecast rows.
    pub end: i32,
}

impl HistoricalWindow {
    /// Whether `year` falls inside the observed range.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    /// Validate the window bounds.
    ///
    /// # Errors
    /// Returns `Err(InahoError::InvalidArg)` if `start > end`.
    pub fn validate(&self) -> Result<(), InahoError> {
        if self.start > self.end {
            return Err(InahoError::invalid_arg(format!(
                "historical window starts {} after it ends {}",
                self.start, self.end
            )));
        }
        Ok(())
    }
}

impl Default for HistoricalWindow {
    fn default() -> Self {
        Self {
            start: 1995,
            end: 2020,
        }
    }
}

/// Inclusive future year range walked in fixed increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionWindow {
    /// First projected year, inclusive.
    pub start: i32,
    /// Last candidate year, inclusive. The walk stops at the largest
    /// `start + k * step` that does not exceed this bound.
    pub end: i32,
    /// Year increment between consecutive projected rows.
    pub step: u32,
}

impl ProjectionWindow {
    /// Iterate the projected years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        let end = self.end;
        let step = i32::try_from(self.step.max(1)).unwrap_or(i32::MAX);
        std::iter::successors(Some(self.start), move |y| y.checked_add(step))
            .take_while(move |y| *y <= end)
    }

    /// Validate the window bounds and step.
    ///
    /// # Errors
    /// Returns `Err(InahoError::InvalidArg)` if `start > end` or `step == 0`.
    pub fn validate(&self) -> Result<(), InahoError> {
        if self.start > self.end {
            return Err(InahoError::invalid_arg(format!(
                "projection window starts {} after it ends {}",
                self.start, self.end
            )));
        }
        if self.step == 0 {
            return Err(InahoError::invalid_arg("projection step must be non-zero"));
        }
        Ok(())
    }
}

impl Default for ProjectionWindow {
    fn default() -> Self {
        Self {
            start: 2025,
            end: 2050,
            step: 5,
        }
    }
}

/// Global configuration for the `Inaho` facade and the forecast core.
///
/// Defaults mirror the shape of the source datasets: observations every five
/// years from 1995 through 2020, projections every five years from 2025
/// through 2050, negative projections floored at zero, and short series
/// propagated as errors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InahoConfig {
    /// Inclusive year range of observed data.
    pub historical: HistoricalWindow,
    /// Inclusive future year range to project onto.
    pub projection: ProjectionWindow,
    /// Policy for negative projected values.
    pub clamp: ClampPolicy,
    /// Policy for keys with fewer than two valid historical points.
    pub short_series: ShortSeriesPolicy,
}

impl InahoConfig {
    /// Validate the configuration as a whole.
    ///
    /// # Errors
    /// Returns `Err(InahoError::InvalidArg)` if either window is malformed or
    /// the projection window overlaps the historical one. Projected years must
    /// lie strictly beyond the last observed year so that merged `(key, year)`
    /// pairs stay unique by construction.
    pub fn validate(&self) -> Result<(), InahoError> {
        self.historical.validate()?;
        self.projection.validate()?;
        if self.projection.start <= self.historical.end {
            return Err(InahoError::invalid_arg(format!(
                "projection window must start after the historical window ends ({} <= {})",
                self.projection.start, self.historical.end
            )));
        }
        Ok(())
    }
}
