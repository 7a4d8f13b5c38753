// Main entry point - Dependency injection and snapshot report
use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use rate_insights::application::filter_engine::apply;
use rate_insights::domain::filters::{InternetFilters, MobileFilters, UtilityFilters};
use rate_insights::domain::plan::Category;
use rate_insights::infrastructure::config::load_insights_config;
use rate_insights::infrastructure::json_repository::JsonFileRepository;
use rate_insights::{InsightsService, PlanService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_insights_config()?;

    // Initialize tracing, RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional category argument narrows the report to one list view
    let category = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<Category>())
        .transpose()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(JsonFileRepository::new(&config.data.snapshot_path));

    // Create services (application layer)
    let plan_service = PlanService::new(repository);
    let insights_service =
        InsightsService::new(plan_service.clone(), config.insights.trend_window_days);

    let limit = config.insights.latest_limit;
    let report = match category {
        Some(Category::Mobile) => {
            let plans = plan_service.mobile_plans().await?;
            json!({
                "category": Category::Mobile,
                "providers": Category::Mobile.providers(),
                "total": plans.len(),
                "plans": apply(&plans, &MobileFilters::default()),
                "latest": plan_service.latest_mobile_plans(limit).await?,
            })
        }
        Some(Category::Internet) => {
            let plans = plan_service.internet_plans().await?;
            json!({
                "category": Category::Internet,
                "providers": Category::Internet.providers(),
                "total": plans.len(),
                "plans": apply(&plans, &InternetFilters::default()),
                "latest": plan_service.latest_internet_plans(limit).await?,
            })
        }
        Some(Category::Utility) => {
            let plans = plan_service.utility_plans().await?;
            json!({
                "category": Category::Utility,
                "providers": Category::Utility.providers(),
                "total": plans.len(),
                "plans": apply(&plans, &UtilityFilters::default()),
                "latest": plan_service.latest_utility_plans(limit).await?,
            })
        }
        None => {
            let insights = insights_service
                .market_insights(config.insights.location.as_deref(), Utc::now())
                .await;
            if !insights.has_any_data() {
                tracing::info!("No rate submissions in {}", config.data.snapshot_path);
            }
            serde_json::to_value(insights)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
