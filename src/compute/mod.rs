//----------------------------------------
// computation mod
//----------------------------------------
pub use crate::comparison::compare_arms::{
    compare_arms, compare_experiment, relative_improvement,
};
pub use crate::comparison::types::{ExperimentArm, ExperimentComparison, VariantComparison};
pub use crate::distribution::erf::erf;
pub use crate::distribution::std_normal::{std_normal_cdf, std_normal_quantile};
pub use crate::planner::compute_plan::compute_plan;
pub use crate::planner::types::{ExperimentPlan, PlanAdvisory, PlanInput};
pub use crate::sample_size::compute_ss::compute_sample_size;
pub use crate::sample_size::types::SampleSize;
pub use crate::significance::compute_significance::{compute_significance, conversion_rate};
pub use crate::significance::types::SignificanceResult;
