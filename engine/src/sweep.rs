//! Mean-sea-level sweep: sample the candidate range and evaluate the
//! estimator at each point.

use crate::inundation::{flood_frequency, FloodParams, ParamError};

/// Number of mean-sea-level samples per sweep (endpoints inclusive).
pub const SWEEP_SAMPLES: usize = 100;

/// Evenly spaced mean-sea-level samples spanning [lo, hi] inclusive.
/// Endpoints are bit-exact: t is 0 at k=0 and 1 at the last sample.
pub fn sweep_means(mean_min_m: f64, mean_max_m: f64) -> Vec<f64> {
    let mut means = Vec::with_capacity(SWEEP_SAMPLES);
    for k in 0..SWEEP_SAMPLES {
        let t = k as f64 / (SWEEP_SAMPLES - 1) as f64;
        means.push((1.0 - t) * mean_min_m + t * mean_max_m);
    }
    means
}

/// Outputs of one sweep pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodSweep {
    /// Parameters actually used (post range correction).
    pub params: FloodParams,
    /// Mean sea level per sample (m), len = SWEEP_SAMPLES
    pub mean_m: Vec<f64>,
    /// Inundation frequency per sample, each in [0, 1]
    pub frequency: Vec<f64>,
    /// Min/max of frequency
    pub min_max_frequency: (f64, f64),
    /// True when an inverted range was corrected before sweeping.
    pub range_clamped: bool,
}

/// Validate parameters, correct an inverted range, and evaluate the
/// estimator over the full sweep.
pub fn sweep_flood_frequency(params: &FloodParams) -> Result<FloodSweep, ParamError> {
    params.validate()?;
    let (params, range_clamped) = params.clamped_range();
    let mean_m = sweep_means(params.mean_min_m, params.mean_max_m);
    let mut frequency: Vec<f64> = Vec::with_capacity(mean_m.len());
    let (mut fmin, mut fmax) = (f64::INFINITY, f64::NEG_INFINITY);
    for &m in &mean_m {
        let f = flood_frequency(m, params.threshold_m, params.std_dev_m)?;
        fmin = fmin.min(f);
        fmax = fmax.max(f);
        frequency.push(f);
    }
    Ok(FloodSweep { params, mean_m, frequency, min_max_frequency: (fmin, fmax), range_clamped })
}
