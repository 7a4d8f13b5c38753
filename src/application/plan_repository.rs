// Repository trait for raw plan submissions
use crate::domain::raw_plan::{RawInternetPlan, RawMobilePlan, RawUtilityPlan};
use async_trait::async_trait;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// All mobile plan submissions
    async fn fetch_mobile_plans(&self) -> anyhow::Result<Vec<RawMobilePlan>>;

    async fn fetch_internet_plans(&self) -> anyhow::Result<Vec<RawInternetPlan>>;

    async fn fetch_utility_plans(&self) -> anyhow::Result<Vec<RawUtilityPlan>>;

    /// A single mobile plan by id, None when it does not exist
    async fn fetch_mobile_plan(&self, id: i64) -> anyhow::Result<Option<RawMobilePlan>>;

    async fn fetch_internet_plan(&self, id: i64) -> anyhow::Result<Option<RawInternetPlan>>;

    async fn fetch_utility_plan(&self, id: i64) -> anyhow::Result<Option<RawUtilityPlan>>;
}
