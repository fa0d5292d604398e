//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::comparison::error::ArmComparisonError;
pub use crate::planner::error::PlanInputError;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("while assembling experiment plan: {0}")]
    PlanInput(PlanInputError),
    #[error("while comparing experiment arms: {0}")]
    ArmComparison(ArmComparisonError),
}
