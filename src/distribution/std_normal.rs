use crate::distribution::erf::erf;

/// Standard normal CDF, built on the error function:
/// Phi(x) = (1 + erf(x / sqrt(2))) / 2.
pub fn std_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal quantile function.
///
/// Uses the low-order rational approximation of Abramowitz & Stegun
/// 26.2.23, accurate to about 4.5e-4. This is deliberately not a numerical
/// inversion of `std_normal_cdf`; the closed form with these exact
/// coefficients is what callers rely on for reproducible values.
///
/// Total over the whole real line: probabilities at or below 0 map to
/// negative infinity, at or above 1 to positive infinity, and exactly 0.5
/// to exactly zero.
pub fn std_normal_quantile(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let p_low = if p < 0.5 { p } else { 1.0 - p };
    let t = (-2.0 * p_low.ln()).sqrt();

    let x = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);

    if p < 0.5 {
        -x
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::{ContinuousCDF, Normal};

    #[test]
    fn std_normal_cdf_at_zero() {
        assert!((std_normal_cdf(0.0) - 0.5).abs() < 2e-7);
    }

    #[test]
    fn std_normal_cdf_symmetric() {
        for x in [0.3, 1.0, 1.96, 2.6] {
            assert!((std_normal_cdf(x) + std_normal_cdf(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn std_normal_cdf_strictly_increasing() {
        let grid = [-3.0, -1.5, -0.5, 0.0, 0.5, 1.5, 3.0];
        for pair in grid.windows(2) {
            assert!(std_normal_cdf(pair[0]) < std_normal_cdf(pair[1]));
        }
    }

    #[test]
    fn std_normal_cdf_matches_reference() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for x in [-2.8, -1.96, -0.7, 0.0, 0.5, 1.3, 2.105, 3.0] {
            assert!((std_normal_cdf(x) - reference.cdf(x)).abs() < 2e-7);
        }
    }

    #[test]
    fn std_normal_quantile_boundaries() {
        assert_eq!(std_normal_quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(std_normal_quantile(-0.2), f64::NEG_INFINITY);
        assert_eq!(std_normal_quantile(1.0), f64::INFINITY);
        assert_eq!(std_normal_quantile(1.3), f64::INFINITY);
        assert_eq!(std_normal_quantile(0.5), 0.0);
    }

    #[test]
    fn std_normal_quantile_value() {
        assert!((std_normal_quantile(0.975) - 1.95996).abs() < 1e-3);
    }

    #[test]
    fn std_normal_quantile_antisymmetric() {
        for p in [0.01, 0.1, 0.25, 0.4, 0.45] {
            assert!((std_normal_quantile(1.0 - p) + std_normal_quantile(p)).abs() < 1e-12);
        }
    }

    #[test]
    fn std_normal_quantile_strictly_increasing() {
        let grid = [0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99];
        for pair in grid.windows(2) {
            assert!(std_normal_quantile(pair[0]) < std_normal_quantile(pair[1]));
        }
    }

    #[test]
    fn std_normal_quantile_matches_reference() {
        let reference = Normal::new(0.0, 1.0).unwrap();
        for p in [0.025, 0.1, 0.2, 0.5, 0.8, 0.95, 0.975, 0.995] {
            assert!((std_normal_quantile(p) - reference.inverse_cdf(p)).abs() < 1e-3);
        }
    }
}
