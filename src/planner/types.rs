//----------------------------------------
// planner mod types
//----------------------------------------
use crate::config::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Traffic assumptions and test setup the plan is derived from.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct PlanInput {
    /// Participants reaching the tested page per day.
    pub daily_participants: u64,
    /// Conversions on the tested page per day.
    pub daily_conversions: u64,
    /// Test variants beside the control, 1 through `MAX_TEST_VARIANTS`.
    pub test_variants: u32,
    pub confidence: ConfidenceLevel,
}

/// What the experiment needs, given the traffic assumptions.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ExperimentPlan {
    /// Baseline conversion rate implied by the daily traffic.
    pub base_rate: f64,
    /// Significance level actually applied, after multi-variant
    /// enforcement.
    pub alpha: f64,
    pub per_group: u64,
    /// Test variants plus the control.
    pub total_groups: u32,
    pub total_participants: u64,
    pub total_conversions: u64,
    /// Days of the given daily traffic needed to fill every group.
    pub min_days: u64,
    pub advisories: Vec<PlanAdvisory>,
}

/// Structured caveats about a plan. Wording and presentation are the
/// caller's business; the engine only reports the facts.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum PlanAdvisory {
    /// Conversion rate under 1%; detecting small changes will need a very
    /// large sample.
    VeryLowBaseRate { base_rate: f64 },
    /// Conversion rate above 50%; little headroom for improvement remains.
    HighBaseRate { base_rate: f64 },
    /// The experiment would run for more than ninety days.
    ProtractedDuration { days: u64 },
    /// The experiment would run for more than thirty days.
    ExtendedDuration { days: u64 },
}
