//----------------------------------------
// planner mod
//----------------------------------------
pub mod compute_plan;
pub mod error;
pub mod types;
