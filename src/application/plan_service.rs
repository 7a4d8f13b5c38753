// Plan service - Use case for loading normalized plans and plan details
use crate::application::normalizer::{normalize_internet, normalize_mobile, normalize_utility};
use crate::application::plan_repository::PlanRepository;
use crate::application::sort_engine::latest;
use crate::domain::error::InsightsError;
use crate::domain::plan::{Category, InternetPlan, MobilePlan, UtilityPlan};
use std::sync::Arc;

#[derive(Clone)]
pub struct PlanService {
    repository: Arc<dyn PlanRepository>,
}

impl PlanService {
    pub fn new(repository: Arc<dyn PlanRepository>) -> Self {
        Self { repository }
    }

    pub async fn mobile_plans(&self) -> anyhow::Result<Vec<MobilePlan>> {
        let raw = self.repository.fetch_mobile_plans().await?;
        tracing::debug!("Loaded {} mobile plans", raw.len());
        Ok(raw.into_iter().map(normalize_mobile).collect())
    }

    pub async fn internet_plans(&self) -> anyhow::Result<Vec<InternetPlan>> {
        let raw = self.repository.fetch_internet_plans().await?;
        tracing::debug!("Loaded {} internet plans", raw.len());
        Ok(raw.into_iter().map(normalize_internet).collect())
    }

    pub async fn utility_plans(&self) -> anyhow::Result<Vec<UtilityPlan>> {
        let raw = self.repository.fetch_utility_plans().await?;
        tracing::debug!("Loaded {} utility plans", raw.len());
        Ok(raw.into_iter().map(normalize_utility).collect())
    }

    pub async fn mobile_plan_details(&self, id: i64) -> anyhow::Result<MobilePlan> {
        match self.repository.fetch_mobile_plan(id).await? {
            Some(raw) => Ok(normalize_mobile(raw)),
            None => Err(InsightsError::PlanNotFound {
                category: Category::Mobile,
                id,
            }
            .into()),
        }
    }

    pub async fn internet_plan_details(&self, id: i64) -> anyhow::Result<InternetPlan> {
        match self.repository.fetch_internet_plan(id).await? {
            Some(raw) => Ok(normalize_internet(raw)),
            None => Err(InsightsError::PlanNotFound {
                category: Category::Internet,
                id,
            }
            .into()),
        }
    }

    pub async fn utility_plan_details(&self, id: i64) -> anyhow::Result<UtilityPlan> {
        match self.repository.fetch_utility_plan(id).await? {
            Some(raw) => Ok(normalize_utility(raw)),
            None => Err(InsightsError::PlanNotFound {
                category: Category::Utility,
                id,
            }
            .into()),
        }
    }

    /// Most recent submissions for the landing page, newest first
    pub async fn latest_mobile_plans(&self, limit: usize) -> anyhow::Result<Vec<MobilePlan>> {
        Ok(latest(&self.mobile_plans().await?, limit))
    }

    pub async fn latest_internet_plans(&self, limit: usize) -> anyhow::Result<Vec<InternetPlan>> {
        Ok(latest(&self.internet_plans().await?, limit))
    }

    pub async fn latest_utility_plans(&self, limit: usize) -> anyhow::Result<Vec<UtilityPlan>> {
        Ok(latest(&self.utility_plans().await?, limit))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::raw_plan::{RawInternetPlan, RawMobilePlan, RawUtilityPlan};
    use async_trait::async_trait;

    /// In-memory repository seeded from JSON arrays
    #[derive(Default)]
    pub struct StaticRepository {
        pub mobile: Vec<RawMobilePlan>,
        pub internet: Vec<RawInternetPlan>,
        pub utility: Vec<RawUtilityPlan>,
        pub fail_internet: bool,
    }

    #[async_trait]
    impl PlanRepository for StaticRepository {
        async fn fetch_mobile_plans(&self) -> anyhow::Result<Vec<RawMobilePlan>> {
            Ok(self.mobile.clone())
        }

        async fn fetch_internet_plans(&self) -> anyhow::Result<Vec<RawInternetPlan>> {
            if self.fail_internet {
                anyhow::bail!("internet plans unavailable");
            }
            Ok(self.internet.clone())
        }

        async fn fetch_utility_plans(&self) -> anyhow::Result<Vec<RawUtilityPlan>> {
            Ok(self.utility.clone())
        }

        async fn fetch_mobile_plan(&self, id: i64) -> anyhow::Result<Option<RawMobilePlan>> {
            Ok(self.mobile.iter().find(|p| p.id == id).cloned())
        }

        async fn fetch_internet_plan(&self, id: i64) -> anyhow::Result<Option<RawInternetPlan>> {
            Ok(self.internet.iter().find(|p| p.id == id).cloned())
        }

        async fn fetch_utility_plan(&self, id: i64) -> anyhow::Result<Option<RawUtilityPlan>> {
            Ok(self.utility.iter().find(|p| p.id == id).cloned())
        }
    }

    pub fn sample_repository() -> StaticRepository {
        StaticRepository {
            mobile: serde_json::from_str(
                r#"[
                    {"id": 1, "provider": "Bell", "monthly_cost": "$85", "data_limit": 10,
                     "uploaded_at": "2024-02-20T10:30:00Z", "location": "Calgary, AB"},
                    {"id": 2, "provider": "Bell", "monthly_cost": 92, "data_limit": 9999,
                     "uploaded_at": "2024-02-27T09:00:00Z", "location": "Edmonton, AB"},
                    {"id": 3, "provider": "Rogers", "monthly_cost": "$60", "data_limit": 20,
                     "uploaded_at": "2023-10-01T09:00:00Z", "location": "Calgary, AB"}
                ]"#,
            )
            .unwrap(),
            internet: serde_json::from_str(
                r#"[
                    {"id": 1, "provider": "Shaw", "monthly_cost": "$75", "speed": 300,
                     "isCable": true, "isFibre": false, "uploaded_at": "2024-02-26T08:00:00Z"}
                ]"#,
            )
            .unwrap(),
            utility: serde_json::from_str(
                r#"[
                    {"id": 1, "provider": "ENMAX", "rate": 12.5, "service_fee": "$20",
                     "uploaded_at": "2024-02-15", "location": "Calgary, AB"}
                ]"#,
            )
            .unwrap(),
            fail_internet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    fn service() -> PlanService {
        PlanService::new(Arc::new(sample_repository()))
    }

    #[tokio::test]
    async fn test_plans_are_normalized() {
        let plans = service().mobile_plans().await.unwrap();
        let costs: Vec<f64> = plans.iter().map(|p| p.monthly_cost).collect();
        assert_eq!(costs, vec![85.0, 92.0, 60.0]);

        let utility = service().utility_plans().await.unwrap();
        assert_eq!(utility[0].service_fee, 20.0);
    }

    #[tokio::test]
    async fn test_plan_details() {
        let plan = service().internet_plan_details(1).await.unwrap();
        assert_eq!(plan.monthly_cost, 75.0);
        assert!(plan.is_cable);
    }

    #[tokio::test]
    async fn test_missing_plan_is_not_found() {
        let err = service().mobile_plan_details(42).await.unwrap_err();
        match err.downcast_ref::<InsightsError>() {
            Some(InsightsError::PlanNotFound { category, id }) => {
                assert_eq!(*category, Category::Mobile);
                assert_eq!(*id, 42);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_latest_plans() {
        let latest = service().latest_mobile_plans(2).await.unwrap();
        let ids: Vec<i64> = latest.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let repository = StaticRepository {
            fail_internet: true,
            ..Default::default()
        };
        let service = PlanService::new(Arc::new(repository));
        assert!(service.internet_plans().await.is_err());
        assert!(service.utility_plans().await.unwrap().is_empty());
    }
}
