use crate::comparison::error::ArmComparisonError;
use crate::comparison::types::{ExperimentArm, ExperimentComparison, VariantComparison};
use crate::config::{ConfidenceLevel, MAX_TEST_VARIANTS};
use crate::error::AbcomputeErr;
use crate::significance::compute_significance::{compute_significance, conversion_rate};

/// Relative improvement of a variant's conversion rate over the control's,
/// in percent. Zero when the control rate is zero, since no relative
/// change is defined against an empty baseline.
pub fn relative_improvement(variant_rate: f64, control_rate: f64) -> f64 {
    if control_rate == 0.0 {
        return 0.0;
    }
    (variant_rate - control_rate) / control_rate * 100.0
}

/// Judges a single variant arm against the control arm at the two-tailed
/// significance level `alpha`.
pub fn compare_arms(
    control: &ExperimentArm,
    variant: &ExperimentArm,
    alpha: f64,
) -> VariantComparison {
    let control_rate = conversion_rate(control.conversions, control.participants);
    let variant_rate = conversion_rate(variant.conversions, variant.participants);

    VariantComparison {
        conversion_rate: variant_rate,
        improvement_percent: relative_improvement(variant_rate, control_rate),
        significance: compute_significance(
            control.participants,
            control.conversions,
            variant.participants,
            variant.conversions,
            alpha,
        ),
    }
}

/// Judges every variant arm of an experiment against the control arm.
///
/// Experiments running more than one variant are pinned to the 95%
/// confidence level regardless of the selection. An arm reporting more
/// conversions than participants is rejected rather than silently
/// clamped; clamping belongs to the input layer.
pub fn compare_experiment(
    control: &ExperimentArm,
    variants: &[ExperimentArm],
    confidence: ConfidenceLevel,
) -> Result<ExperimentComparison, AbcomputeErr> {
    if variants.is_empty() {
        return Err(ArmComparisonError::NoVariants.into());
    }
    if variants.len() > MAX_TEST_VARIANTS as usize {
        return Err(ArmComparisonError::TooManyVariants {
            given: variants.len(),
            max: MAX_TEST_VARIANTS as usize,
        }
        .into());
    }
    for arm in std::iter::once(control).chain(variants.iter()) {
        if arm.conversions > arm.participants {
            return Err(ArmComparisonError::ConversionsExceedParticipants {
                participants: arm.participants,
                conversions: arm.conversions,
            }
            .into());
        }
    }

    let alpha = confidence
        .enforced_for_variants(variants.len() as u32)
        .alpha();

    Ok(ExperimentComparison {
        control_rate: conversion_rate(control.conversions, control.participants),
        alpha,
        variants: variants
            .iter()
            .map(|variant| compare_arms(control, variant, alpha))
            .collect(),
    })
}
