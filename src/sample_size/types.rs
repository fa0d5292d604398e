//----------------------------------------
// sample size mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Number of participants each experiment group needs.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum SampleSize {
    /// A finite per-group requirement.
    PerGroup(u64),
    /// No finite sample distinguishes the baseline from the target rate.
    Unbounded,
}

impl SampleSize {
    pub fn per_group(self) -> Option<u64> {
        match self {
            SampleSize::PerGroup(n) => Some(n),
            SampleSize::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, SampleSize::Unbounded)
    }
}
