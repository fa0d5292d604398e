use crate::distribution::std_normal::std_normal_cdf;
use crate::significance::types::SignificanceResult;

// Significant results backed by a weighted difference of at most this many
// conversions carry the low-data warning.
const LOW_DATA_WEIGHTED_DIFF_MAX: f64 = 20.0;

/// Observed conversion rate of an arm. An arm without participants has a
/// rate of zero rather than an undefined one.
pub fn conversion_rate(conversions: u64, participants: u64) -> f64 {
    if participants == 0 {
        return 0.0;
    }
    conversions as f64 / participants as f64
}

/// Two-proportion z-test of a variant arm against a control arm at the
/// two-tailed significance level `alpha`.
///
/// The standard error pools nothing: each arm contributes its own observed
/// variance. The p-value is the upper tail of the absolute z-score, which
/// for this symmetric statistic is the two-sided p-value. An arm without
/// participants, or a pair of arms whose rates are both degenerate (all
/// conversions or none), yields the neutral no-evidence result instead of
/// a division by zero.
pub fn compute_significance(
    control_participants: u64,
    control_conversions: u64,
    variant_participants: u64,
    variant_conversions: u64,
    alpha: f64,
) -> SignificanceResult {
    let p1 = conversion_rate(control_conversions, control_participants);
    let p2 = conversion_rate(variant_conversions, variant_participants);

    if control_participants == 0 || variant_participants == 0 {
        return SignificanceResult::no_evidence();
    }

    let n1 = control_participants as f64;
    let n2 = variant_participants as f64;

    let se = (p1 * (1.0 - p1) / n1 + p2 * (1.0 - p2) / n2).sqrt();
    if se == 0.0 {
        return SignificanceResult::no_evidence();
    }

    let z = (p2 - p1) / se;
    let p_value = 1.0 - std_normal_cdf(z.abs());
    let confidence_percent = (1.0 - p_value) * 100.0;
    let significant = p_value < alpha;

    let weighted_diff = (p2 - p1).abs() * n1.min(n2);

    SignificanceResult {
        z_score: z,
        p_value,
        confidence_percent,
        significant,
        low_data_warning: significant && weighted_diff <= LOW_DATA_WEIGHTED_DIFF_MAX,
    }
}
