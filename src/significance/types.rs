//----------------------------------------
// significance mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Outcome of a two-proportion z-test of a variant arm against a control
/// arm.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct SignificanceResult {
    /// Standardized difference between the two observed rates, in standard
    /// error units. Positive when the variant rate is higher.
    pub z_score: f64,
    /// Tail probability of the absolute z-score under the null hypothesis.
    pub p_value: f64,
    /// (1 - p_value) * 100.
    pub confidence_percent: f64,
    /// Whether the p-value clears the requested significance level.
    pub significant: bool,
    /// Set when a significant result rests on 20 or fewer weighted
    /// conversions and should be treated with caution.
    pub low_data_warning: bool,
}

impl SignificanceResult {
    /// Neutral result used whenever the test cannot be run: an arm without
    /// participants, or a degenerate standard error.
    pub fn no_evidence() -> SignificanceResult {
        SignificanceResult {
            z_score: 0.0,
            p_value: 1.0,
            confidence_percent: 0.0,
            significant: false,
            low_data_warning: false,
        }
    }
}
