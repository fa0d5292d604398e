//----------------------------------------
// comparison mod types
//----------------------------------------
use crate::significance::types::SignificanceResult;
use serde::{Deserialize, Serialize};

/// One arm of an experiment: how many people saw it, how many converted.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct ExperimentArm {
    pub participants: u64,
    pub conversions: u64,
}

/// A single variant arm judged against the control arm.
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct VariantComparison {
    pub conversion_rate: f64,
    /// Relative improvement over the control rate, in percent.
    pub improvement_percent: f64,
    pub significance: SignificanceResult,
}

/// Every variant arm judged against the control arm.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ExperimentComparison {
    pub control_rate: f64,
    /// Significance level actually applied, after multi-variant
    /// enforcement.
    pub alpha: f64,
    pub variants: Vec<VariantComparison>,
}
