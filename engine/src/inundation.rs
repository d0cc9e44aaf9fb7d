//! Inundation frequency estimator: probability that a daily high tide,
//! modeled as N(mean, σ²), exceeds a fixed flood threshold.

use crate::normal;

/// Width restored to an inverted mean-sea-level range (m).
pub const RANGE_STEP_M: f64 = 0.1;

/// Parameters for the inundation frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloodParams {
    /// High-tide flood threshold (m); tides above this count as flood events.
    pub threshold_m: f64,
    /// Standard deviation of the annual daily-high-tide distribution (m). Must be > 0.
    pub std_dev_m: f64,
    /// Current/baseline mean sea level (m).
    pub mean_min_m: f64,
    /// Maximum future mean sea level of interest (m).
    pub mean_max_m: f64,
}

impl Default for FloodParams {
    fn default() -> Self {
        Self { threshold_m: 2.5, std_dev_m: 1.0, mean_min_m: 0.0, mean_max_m: 5.0 }
    }
}

/// Errors from parameter validation.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParamError {
    /// The normal CDF is undefined for σ ≤ 0.
    #[error("standard deviation must be > 0 (got {0})")]
    NonPositiveStdDev(f64),
    /// NaN or infinite parameter.
    #[error("parameter {name} is not finite (got {value})")]
    NonFinite {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl FloodParams {
    /// Reject σ ≤ 0 and any non-finite field before computation.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("threshold_m", self.threshold_m),
            ("std_dev_m", self.std_dev_m),
            ("mean_min_m", self.mean_min_m),
            ("mean_max_m", self.mean_max_m),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NonFinite { name, value });
            }
        }
        if self.std_dev_m <= 0.0 {
            return Err(ParamError::NonPositiveStdDev(self.std_dev_m));
        }
        Ok(())
    }

    /// Enforce `mean_max_m > mean_min_m`. An inverted (or empty) range is
    /// corrected to `mean_min_m + RANGE_STEP_M`; the flag reports whether a
    /// correction happened so the caller can surface a warning.
    pub fn clamped_range(&self) -> (Self, bool) {
        if self.mean_max_m > self.mean_min_m {
            (*self, false)
        } else {
            (Self { mean_max_m: self.mean_min_m + RANGE_STEP_M, ..*self }, true)
        }
    }
}

/// Probability that a daily high tide drawn from N(`mean_m`, `std_dev_m`²)
/// exceeds `threshold_m`: `1 − Φ(threshold; mean, σ)`, clamped to [0, 1].
/// Strictly increasing in `mean_m`; exactly 0.5 when the mean sits on the
/// threshold (within the erf approximation).
pub fn flood_frequency(mean_m: f64, threshold_m: f64, std_dev_m: f64) -> Result<f64, ParamError> {
    if !std_dev_m.is_finite() {
        return Err(ParamError::NonFinite { name: "std_dev_m", value: std_dev_m });
    }
    if std_dev_m <= 0.0 {
        return Err(ParamError::NonPositiveStdDev(std_dev_m));
    }
    if !mean_m.is_finite() {
        return Err(ParamError::NonFinite { name: "mean_m", value: mean_m });
    }
    if !threshold_m.is_finite() {
        return Err(ParamError::NonFinite { name: "threshold_m", value: threshold_m });
    }
    let f = 1.0 - normal::cdf(threshold_m, mean_m, std_dev_m);
    Ok(f.clamp(0.0, 1.0))
}
