//----------------------------------------
// significance mod
//----------------------------------------
pub mod compute_significance;
pub mod types;
