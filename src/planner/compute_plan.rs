use crate::config::{MAX_TEST_VARIANTS, MDE_RELATIVE, POWER};
use crate::error::AbcomputeErr;
use crate::planner::error::PlanInputError;
use crate::planner::types::{ExperimentPlan, PlanAdvisory, PlanInput};
use crate::sample_size::compute_ss::compute_sample_size;
use crate::sample_size::types::SampleSize;

/// Derives the full experiment plan for the planner-style caller: how many
/// participants and conversions the experiment needs in total, and how
/// many days of the given daily traffic that takes.
///
/// The baseline rate comes from the daily traffic numbers; the per-group
/// size is computed for the fixed relative MDE and power policy at the
/// selected confidence level, with more than one test variant forcing the
/// 95% level. Inputs the surrounding UI would have clamped or hidden
/// (empty traffic, conversions above participants, an out-of-range variant
/// count, a baseline that cannot move) are reported as errors.
pub fn compute_plan(input: &PlanInput) -> Result<ExperimentPlan, AbcomputeErr> {
    if input.daily_participants == 0 {
        return Err(PlanInputError::NoParticipantTraffic.into());
    }
    if input.daily_conversions == 0 {
        return Err(PlanInputError::NoConversionTraffic.into());
    }
    if input.daily_conversions > input.daily_participants {
        return Err(PlanInputError::ConversionsExceedParticipants {
            participants: input.daily_participants,
            conversions: input.daily_conversions,
        }
        .into());
    }
    if input.test_variants == 0 || input.test_variants > MAX_TEST_VARIANTS {
        return Err(PlanInputError::VariantCountOutOfRange {
            given: input.test_variants,
            max: MAX_TEST_VARIANTS,
        }
        .into());
    }

    let alpha = input
        .confidence
        .enforced_for_variants(input.test_variants)
        .alpha();
    let base_rate = input.daily_conversions as f64 / input.daily_participants as f64;

    let per_group = match compute_sample_size(base_rate, MDE_RELATIVE, alpha, POWER) {
        SampleSize::PerGroup(n) => n,
        SampleSize::Unbounded => return Err(PlanInputError::IndistinguishableRates.into()),
    };

    let total_groups = input.test_variants + 1;
    let total_participants = per_group * u64::from(total_groups);
    let total_conversions = (total_participants as f64 * base_rate).ceil() as u64;
    let min_days = total_participants.div_ceil(input.daily_participants);

    let mut advisories = Vec::new();
    if base_rate < 0.01 {
        advisories.push(PlanAdvisory::VeryLowBaseRate { base_rate });
    } else if base_rate > 0.5 {
        advisories.push(PlanAdvisory::HighBaseRate { base_rate });
    }
    if min_days > 90 {
        advisories.push(PlanAdvisory::ProtractedDuration { days: min_days });
    } else if min_days > 30 {
        advisories.push(PlanAdvisory::ExtendedDuration { days: min_days });
    }

    Ok(ExperimentPlan {
        base_rate,
        alpha,
        per_group,
        total_groups,
        total_participants,
        total_conversions,
        min_days,
        advisories,
    })
}
