use inaho_types::InahoError;
use serde::{Deserialize, Serialize};

/// A fitted linear trend `value ≈ slope * year + intercept`.
///
/// Derived per grouping key by ordinary least squares over that key's valid
/// historical points. Models are plain value types: deriving one is
/// deterministic and nothing mutates them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Change in value per year.
    pub slope: f64,
    /// Value at year zero.
    pub intercept: f64,
}

impl LinearModel {
    /// Evaluate the raw fitted line at `year`.
    #[must_use]
    pub fn project(&self, year: i32) -> f64 {
        self.slope.mul_add(f64::from(year), self.intercept)
    }

    /// Evaluate the fitted line at `year`, flooring negative results at zero.
    ///
    /// Intended for forecast rows only; historical values are never clamped.
    #[must_use]
    pub fn project_clamped(&self, year: i32) -> f64 {
        self.project(year).max(0.0)
    }
}

/// Fit a least-squares line over `(year, value)` points for one grouping key.
///
/// The points are summed in ascending-year order regardless of input order,
/// so identical input always yields bit-identical slope and intercept.
/// Callers are expected to have dropped missing and non-finite values
/// already; `key` is carried only for error reporting.
///
/// # Errors
/// Returns `Err(InahoError::InsufficientData)` if fewer than two points are
/// given, or if the points span fewer than two distinct years (a vertical
/// line has no least-squares solution).
pub fn fit_points(key: &str, points: &[(i32, f64)]) -> Result<LinearModel, InahoError> {
    if points.len() < 2 {
        return Err(InahoError::insufficient_data(key, points.len()));
    }

    let mut sorted: Vec<(i32, f64)> = points.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let n = sorted.len() as f64;
    let mean_x = sorted.iter().map(|(x, _)| f64::from(*x)).sum::<f64>() / n;
    let mean_y = sorted.iter().map(|(_, y)| *y).sum::<f64>() / n;

    let mut sxx = 0.0_f64;
    let mut sxy = 0.0_f64;
    for (x, y) in &sorted {
        let dx = f64::from(*x) - mean_x;
        sxx += dx * dx;
        sxy += dx * (*y - mean_y);
    }

    if sxx == 0.0 {
        // All points share one year; distinct-year count is effectively 1.
        return Err(InahoError::insufficient_data(key, 1));
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);
    Ok(LinearModel { slope, intercept })
}
