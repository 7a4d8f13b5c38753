// Domain error types
use crate::domain::plan::Category;

#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("{category} plan {id} not found")]
    PlanNotFound { category: Category, id: i64 },

    #[error("unknown plan category: {0}")]
    UnknownCategory(String),
}
