// Market insight models - distribution summaries and weekly trend points
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::plan::Category;

/// Round to two decimal places for display-ready statistics
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub provider: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub week_start: NaiveDate,
    pub avg_price: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInsights {
    pub category: Category,
    pub value_label: String,
    pub distribution: Vec<DistributionSummary>,
    pub trend: Vec<TrendPoint>,
}

impl CategoryInsights {
    pub fn new(
        category: Category,
        distribution: Vec<DistributionSummary>,
        trend: Vec<TrendPoint>,
    ) -> Self {
        Self {
            category,
            value_label: category.value_label().to_string(),
            distribution,
            trend,
        }
    }

    pub fn empty(category: Category) -> Self {
        Self::new(category, Vec::new(), Vec::new())
    }

    pub fn has_data(&self) -> bool {
        !self.distribution.is_empty() || !self.trend.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub location: Option<String>,
    pub categories: Vec<CategoryInsights>,
}

impl MarketInsights {
    pub fn new(location: Option<String>, categories: Vec<CategoryInsights>) -> Self {
        Self {
            location,
            categories,
        }
    }

    pub fn has_any_data(&self) -> bool {
        self.categories.iter().any(CategoryInsights::has_data)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryInsights> {
        self.categories.iter().find(|c| c.category == category)
    }
}
