//----------------------------------------
// Comparison errors
//----------------------------------------

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArmComparisonError {
    #[error("experiment needs at least one variant arm")]
    NoVariants,
    #[error("experiment supports at most {max} variant arms; got {given}")]
    TooManyVariants { given: usize, max: usize },
    #[error(
        "arm reports more conversions ({conversions}) than participants \
        ({participants})"
    )]
    ConversionsExceedParticipants { participants: u64, conversions: u64 },
}

impl Into<AbcomputeErr> for ArmComparisonError {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::ArmComparison(self)
    }
}
