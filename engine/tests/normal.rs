use engine as crate_engine;

use crate_engine::normal::{cdf, erf, standard_cdf};

#[test]
fn erf_is_odd_and_bounded() {
    for &x in &[0.1, 0.5, 1.0, 2.0, 3.5] {
        let e = erf(x);
        assert!((e + erf(-x)).abs() < 1e-12);
        assert!(e > 0.0 && e < 1.0);
    }
    assert!(erf(0.0).abs() < 1e-8);
}

#[test]
fn standard_cdf_table_values() {
    // A&S 7.1.26 is accurate to 1.5e-7 in erf, so 1e-6 here is comfortable
    assert!((standard_cdf(0.0) - 0.5).abs() < 1e-8);
    assert!((standard_cdf(1.0) - 0.841_344_746).abs() < 1e-6);
    assert!((standard_cdf(-1.0) - 0.158_655_254).abs() < 1e-6);
    assert!((standard_cdf(1.959_963_985) - 0.975).abs() < 1e-6);
    assert!((standard_cdf(-2.0) - 0.022_750_132).abs() < 1e-6);
}

#[test]
fn tails_saturate_within_unit_interval() {
    for &z in &[-12.0, -9.0, 9.0, 12.0] {
        let p = standard_cdf(z);
        assert!((0.0..=1.0).contains(&p));
    }
    assert!(standard_cdf(-9.0) < 1e-6);
    assert!(standard_cdf(9.0) > 1.0 - 1e-6);
}

#[test]
fn standard_cdf_is_monotone() {
    let mut prev = -1.0f64;
    for k in 0..=160 {
        let z = -4.0 + (k as f64) * 0.05;
        let p = standard_cdf(z);
        assert!(p >= prev);
        prev = p;
    }
}

#[test]
fn general_cdf_matches_standardized_form() {
    for &(x, mu, sigma) in &[(2.5, 0.0, 1.0), (2.5, 2.5, 0.5), (0.0, 1.0, 2.0), (-3.0, 1.5, 0.3)] {
        let want = standard_cdf((x - mu) / sigma);
        assert!((cdf(x, mu, sigma) - want).abs() < 1e-15);
    }
}
