// JSON snapshot repository implementation
use crate::application::plan_repository::PlanRepository;
use crate::domain::raw_plan::{RawInternetPlan, RawMobilePlan, RawUtilityPlan};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Reads plan submissions from a JSON export keyed by table name.
///
/// The file is re-read on every fetch so a refreshed export is picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
struct PlanSnapshot {
    #[serde(default)]
    phoneplans: Vec<RawMobilePlan>,
    #[serde(default)]
    internetplans: Vec<RawInternetPlan>,
    #[serde(default)]
    utilityplans: Vec<RawUtilityPlan>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_snapshot(&self) -> Result<PlanSnapshot> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read plan snapshot {}", self.path.display()))?;

        let snapshot: PlanSnapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse plan snapshot {}", self.path.display()))?;

        tracing::debug!(
            "Loaded snapshot {}: {} mobile, {} internet, {} utility",
            self.path.display(),
            snapshot.phoneplans.len(),
            snapshot.internetplans.len(),
            snapshot.utilityplans.len()
        );
        Ok(snapshot)
    }
}

#[async_trait]
impl PlanRepository for JsonFileRepository {
    async fn fetch_mobile_plans(&self) -> Result<Vec<RawMobilePlan>> {
        Ok(self.load_snapshot().await?.phoneplans)
    }

    async fn fetch_internet_plans(&self) -> Result<Vec<RawInternetPlan>> {
        Ok(self.load_snapshot().await?.internetplans)
    }

    async fn fetch_utility_plans(&self) -> Result<Vec<RawUtilityPlan>> {
        Ok(self.load_snapshot().await?.utilityplans)
    }

    async fn fetch_mobile_plan(&self, id: i64) -> Result<Option<RawMobilePlan>> {
        let plans = self.fetch_mobile_plans().await?;
        Ok(plans.into_iter().find(|p| p.id == id))
    }

    async fn fetch_internet_plan(&self, id: i64) -> Result<Option<RawInternetPlan>> {
        let plans = self.fetch_internet_plans().await?;
        Ok(plans.into_iter().find(|p| p.id == id))
    }

    async fn fetch_utility_plan(&self, id: i64) -> Result<Option<RawUtilityPlan>> {
        let plans = self.fetch_utility_plans().await?;
        Ok(plans.into_iter().find(|p| p.id == id))
    }
}
