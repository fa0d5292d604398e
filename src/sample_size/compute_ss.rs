use crate::distribution::std_normal::std_normal_quantile;
use crate::sample_size::types::SampleSize;

/// Computes the per-group sample size needed to detect a relative change
/// of `mde_relative` from a baseline conversion rate, for a two-tailed
/// two-proportion z-test under the normal approximation with equal group
/// sizes.
///
/// `alpha` is the two-tailed significance level and `power` the desired
/// probability of detecting the effect when it is real. The target rate is
/// clamped to 1; if it then equals the baseline (a zero effect, or a
/// baseline already at 1) the requirement is `SampleSize::Unbounded`.
/// Callers multiply the per-group size by the number of groups
/// (test variants + control) to obtain experiment totals.
pub fn compute_sample_size(
    base_rate: f64,
    mde_relative: f64,
    alpha: f64,
    power: f64,
) -> SampleSize {
    let p1 = base_rate;
    let mut p2 = p1 * (1.0 + mde_relative);

    if p2 > 1.0 {
        p2 = 1.0;
    }
    if p1 == p2 {
        return SampleSize::Unbounded;
    }

    let p_bar = (p1 + p2) / 2.0;
    let z_alpha = std_normal_quantile(1.0 - alpha / 2.0); // two-tailed
    let z_beta = std_normal_quantile(power);

    let term_alpha = z_alpha * (2.0 * p_bar * (1.0 - p_bar)).sqrt();
    let term_beta = z_beta * (p1 * (1.0 - p1) + p2 * (1.0 - p2)).sqrt();

    let numerator = (term_alpha + term_beta) * (term_alpha + term_beta);
    let denominator = (p2 - p1) * (p2 - p1);

    SampleSize::PerGroup((numerator / denominator).ceil() as u64)
}
