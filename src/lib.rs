//! Plan data shaping for anonymously submitted mobile, internet and utility rates.
//!
//! Raw submissions from storage are normalized into typed plan records, then
//! either filtered and sorted into list views or aggregated into per-provider
//! price distributions and weekly price trends.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::browser::{InternetBrowser, MobileBrowser, PlanBrowser, UtilityBrowser};
pub use application::distribution::distribution;
pub use application::filter_engine::{apply, filter, PlanFilter};
pub use application::insights_service::InsightsService;
pub use application::plan_service::PlanService;
pub use application::selection::Selection;
pub use application::sort_engine::{latest, sort_plans};
pub use application::trend::{trend, trend_with_window};
pub use domain::error::InsightsError;
