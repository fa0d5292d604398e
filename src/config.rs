//----------------------------------------
// Experiment policy configuration
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Relative minimum detectable effect the planner sizes experiments for.
/// 7% sits at the conservative end of the usual 7-10% range for
/// conversion-rate work.
pub const MDE_RELATIVE: f64 = 0.07;

/// Statistical power the planner sizes experiments for.
pub const POWER: f64 = 0.80;

/// Maximum number of test variants an experiment may run beside the control.
pub const MAX_TEST_VARIANTS: u32 = 3;

/// Selectable confidence level for an experiment. The level is held by the
/// caller and passed into every computation; nothing in the engine
/// remembers a selection.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Ninety,
    #[default]
    NinetyFive,
}

impl ConfidenceLevel {
    /// Two-tailed significance level corresponding to this confidence level.
    pub fn alpha(self) -> f64 {
        match self {
            ConfidenceLevel::Ninety => 0.10,
            ConfidenceLevel::NinetyFive => 0.05,
        }
    }

    /// Experiments with more than one test variant are pinned to the 95%
    /// level; a single-variant experiment keeps whatever was selected.
    pub fn enforced_for_variants(self, test_variants: u32) -> ConfidenceLevel {
        if test_variants > 1 {
            ConfidenceLevel::NinetyFive
        } else {
            self
        }
    }
}
