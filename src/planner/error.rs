//----------------------------------------
// Planner errors
//----------------------------------------

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanInputError {
    #[error("daily participant count must be positive")]
    NoParticipantTraffic,
    #[error("daily conversion count must be positive")]
    NoConversionTraffic,
    #[error(
        "daily conversions ({conversions}) exceed daily participants \
        ({participants})"
    )]
    ConversionsExceedParticipants { participants: u64, conversions: u64 },
    #[error("experiment needs between 1 and {max} test variants; got {given}")]
    VariantCountOutOfRange { given: u32, max: u32 },
    #[error("baseline and target rates coincide; no finite sample size exists")]
    IndistinguishableRates,
}

impl Into<AbcomputeErr> for PlanInputError {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::PlanInput(self)
    }
}
