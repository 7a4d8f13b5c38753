// Insights service - Use case for building market insight snapshots
use crate::application::distribution::distribution;
use crate::application::plan_service::PlanService;
use crate::application::trend::trend_with_window;
use crate::domain::insights::{CategoryInsights, MarketInsights};
use crate::domain::plan::{Category, PlanRecord};
use chrono::{DateTime, Duration, Utc};

#[derive(Clone)]
pub struct InsightsService {
    plans: PlanService,
    trend_window: Duration,
}

/// Case-insensitive location match; no location means every plan
fn in_location<P: PlanRecord>(plan: &P, location: Option<&str>) -> bool {
    match location {
        None => true,
        Some(wanted) => {
            let wanted = wanted.to_lowercase();
            plan.location()
                .is_some_and(|l| l.to_lowercase().contains(&wanted))
        }
    }
}

impl InsightsService {
    pub fn new(plans: PlanService, trend_window_days: i64) -> Self {
        Self {
            plans,
            trend_window: Duration::days(trend_window_days),
        }
    }

    pub fn summarize<P: PlanRecord>(
        &self,
        category: Category,
        plans: &[P],
        location: Option<&str>,
        now: DateTime<Utc>,
    ) -> CategoryInsights {
        let scoped: Vec<&P> = plans.iter().filter(|p| in_location(*p, location)).collect();
        let field = category.headline_price();

        let distribution = distribution(&scoped, field);
        let trend = trend_with_window(&scoped, now, self.trend_window, Some(field));
        tracing::debug!(
            "{} insights: {} plans, {} providers, {} trend weeks",
            category,
            scoped.len(),
            distribution.len(),
            trend.len()
        );

        CategoryInsights::new(category, distribution, trend)
    }

    pub async fn category_insights(
        &self,
        category: Category,
        location: Option<&str>,
        now: DateTime<Utc>,
    ) -> anyhow::Result<CategoryInsights> {
        let insights = match category {
            Category::Mobile => {
                let plans = self.plans.mobile_plans().await?;
                self.summarize(category, &plans, location, now)
            }
            Category::Internet => {
                let plans = self.plans.internet_plans().await?;
                self.summarize(category, &plans, location, now)
            }
            Category::Utility => {
                let plans = self.plans.utility_plans().await?;
                self.summarize(category, &plans, location, now)
            }
        };
        Ok(insights)
    }

    /// Insights for every category; a category that fails to load is reported empty.
    pub async fn market_insights(
        &self,
        location: Option<&str>,
        now: DateTime<Utc>,
    ) -> MarketInsights {
        let mut categories = Vec::new();

        for category in Category::ALL {
            match self.category_insights(category, location, now).await {
                Ok(insights) => categories.push(insights),
                Err(e) => {
                    tracing::error!("Error building {} insights: {:#}", category, e);
                    categories.push(CategoryInsights::empty(category));
                }
            }
        }

        MarketInsights::new(location.map(str::to_string), categories)
    }
}
