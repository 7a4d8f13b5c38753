// Domain layer - Plan records, filter configuration and insight models
pub mod display;
pub mod error;
pub mod filters;
pub mod insights;
pub mod plan;
pub mod raw_plan;
