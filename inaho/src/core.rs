use inaho_core::RegionMap;
use inaho_core::timeseries::forecast::ForecastOutcome;
use inaho_types::{
    ClampPolicy, CoercionReport, HistoricalWindow, InahoConfig, InahoError, MergedSeries,
    Observation, ProjectionWindow, RawRow, ShortSeriesPolicy,
};

use crate::view::{Selection, StackedChart};

/// Facade that wires configuration to the estimator and the chart-preparation
/// layer.
pub struct Inaho {
    pub(crate) cfg: InahoConfig,
    pub(crate) regions: RegionMap,
}

/// Builder for constructing an `Inaho` facade with custom configuration.
pub struct InahoBuilder {
    cfg: InahoConfig,
    regions: RegionMap,
}

impl Default for InahoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InahoBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Windows default to the source datasets' shape: 1995–2020 observed,
    ///   2025–2050 projected in five-year steps.
    /// - Negative projections are floored at zero; short series fail rather
    ///   than skip. Use the modifiers below to change either policy.
    /// - The region map defaults to the 47-prefecture Japanese grouping; pass
    ///   a custom map for other datasets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: InahoConfig::default(),
            regions: RegionMap::japan(),
        }
    }

    /// Replace the whole configuration in one call.
    #[must_use]
    pub const fn config(mut self, cfg: InahoConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the inclusive year range of observed data.
    ///
    /// Rows outside this range are rejected as invalid arguments rather than
    /// silently treated as forecast input.
    #[must_use]
    pub const fn historical(mut self, window: HistoricalWindow) -> Self {
        self.cfg.historical = window;
        self
    }

    /// Set the inclusive future range to project onto.
    ///
    /// The range must start after the historical window ends; `build`
    /// enforces this so that merged `(key, year)` pairs stay unique by
    /// construction.
    #[must_use]
    pub const fn projection(mut self, window: ProjectionWindow) -> Self {
        self.cfg.projection = window;
        self
    }

    /// Select the policy for negative projected values.
    ///
    /// `ZeroFloor` matches the source dashboards (estimated worker counts
    /// cannot go below zero); `Unclamped` exposes the raw fitted line for
    /// diagnostic use. Historical values are never clamped under either
    /// policy.
    #[must_use]
    pub const fn clamp(mut self, policy: ClampPolicy) -> Self {
        self.cfg.clamp = policy;
        self
    }

    /// Select the policy for keys with fewer than two valid points.
    ///
    /// `Fail` aborts the whole computation on the first unfittable key;
    /// `Skip` forecasts the keys it can and records the rest in the report.
    /// Neither mode projects a degenerate flat line.
    #[must_use]
    pub const fn short_series(mut self, policy: ShortSeriesPolicy) -> Self {
        self.cfg.short_series = policy;
        self
    }

    /// Replace the key-to-category grouping used by chart preparation.
    #[must_use]
    pub fn region_map(mut self, regions: RegionMap) -> Self {
        self.regions = regions;
        self
    }

    /// Validate the configuration and build the facade.
    ///
    /// # Errors
    /// Returns `Err(InahoError::InvalidArg)` for inverted windows, a zero
    /// projection step, or a projection window overlapping the historical
    /// one.
    pub fn build(self) -> Result<Inaho, InahoError> {
        self.cfg.validate()?;
        Ok(Inaho {
            cfg: self.cfg,
            regions: self.regions,
        })
    }
}

impl Inaho {
    /// Start building a facade.
    #[must_use]
    pub fn builder() -> InahoBuilder {
        InahoBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &InahoConfig {
        &self.cfg
    }

    /// The active region map.
    #[must_use]
    pub const fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Coerce raw textual rows into observations with per-cell diagnostics.
    #[must_use]
    pub fn coerce(&self, rows: Vec<RawRow>) -> (Vec<Observation>, CoercionReport) {
        inaho_core::coerce_rows(rows)
    }

    /// Fit a trend per key and extend the table with forecast rows.
    ///
    /// # Errors
    /// Propagates the estimator's errors: `InvalidArg` for out-of-window
    /// years, `Data` for duplicate rows, `InsufficientData` under the `Fail`
    /// policy, and `AllKeysFailed` when the `Skip` policy finds nothing to
    /// fit.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(rows = rows.len())
        )
    )]
    pub fn forecast(&self, rows: &[Observation]) -> Result<ForecastOutcome, InahoError> {
        inaho_core::extend_with_forecast(rows, &self.cfg)
    }

    /// Coerce raw rows, then forecast, folding coercion diagnostics into the
    /// outcome's report.
    ///
    /// `dropped_rows` is not double-counted: the estimator counts every row
    /// whose value is missing, which includes the rows coercion blanked out.
    ///
    /// # Errors
    /// Same conditions as [`Inaho::forecast`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip_all,
            fields(rows = rows.len())
        )
    )]
    pub fn forecast_raw(&self, rows: Vec<RawRow>) -> Result<ForecastOutcome, InahoError> {
        let (observations, coercion) = inaho_core::coerce_rows(rows);
        let mut outcome = inaho_core::extend_with_forecast(&observations, &self.cfg)?;
        outcome.report.warnings.extend(coercion.warnings);
        Ok(outcome)
    }

    /// Prepare a stacked chart from a merged series under the given
    /// selection.
    ///
    /// # Errors
    /// Returns `Err(InahoError::InvalidArg)` for an unknown category or an
    /// explicitly selected key that is absent from the series.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all)
    )]
    pub fn chart(
        &self,
        series: &MergedSeries,
        selection: &Selection,
    ) -> Result<StackedChart, InahoError> {
        crate::view::stacked_chart(series, &self.regions, selection)
    }
}
