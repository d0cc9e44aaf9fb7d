//! Normal-distribution math for tide exceedance probabilities.
//!
//! `erf` uses the Abramowitz & Stegun 7.1.26 rational approximation
//! (|error| <= 1.5e-7), plenty for frequencies quoted to a few decimals.

/// Error function via the A&S 7.1.26 rational approximation.
#[inline]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x_abs = x.abs();
    let t = 1.0 / (1.0 + P * x_abs);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x_abs * x_abs).exp();
    sign * y
}

/// Standard normal CDF Φ(z), clamped to [0, 1].
#[inline]
pub fn standard_cdf(z: f64) -> f64 {
    (0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))).clamp(0.0, 1.0)
}

/// Normal CDF Φ(x; μ, σ) via the standardized form.
/// Caller guarantees `std_dev > 0` (validated upstream).
#[inline]
pub fn cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    standard_cdf((x - mean) / std_dev)
}
