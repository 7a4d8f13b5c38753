// Plan domain models - one typed record per service category
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::InsightsError;

/// Allowance values at or above this mean "unlimited".
pub const UNLIMITED_SENTINEL: i64 = 9999;

/// Data allowance assumed for an unlimited plan when computing cost per GB.
pub const UNLIMITED_DATA_EQUIVALENT_GB: f64 = 50.0;

/// Monthly usage levels (kWh) used for utility bill estimates.
pub const LOW_USAGE_KWH: f64 = 400.0;
pub const AVERAGE_USAGE_KWH: f64 = 600.0;
pub const HIGH_USAGE_KWH: f64 = 1000.0;

pub const MOBILE_PROVIDERS: &[&str] = &[
    "Bell", "Chatr", "Eastlink", "Fido", "Fizz", "Freedom", "Koodo", "Rogers", "Telus",
];
pub const INTERNET_PROVIDERS: &[&str] = &["Telus", "Shaw", "Rogers", "Bell"];
pub const UTILITY_PROVIDERS: &[&str] = &["ENMAX", "Direct Energy", "ATCO"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mobile,
    Internet,
    Utility,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mobile, Category::Internet, Category::Utility];

    pub fn providers(&self) -> &'static [&'static str] {
        match self {
            Category::Mobile => MOBILE_PROVIDERS,
            Category::Internet => INTERNET_PROVIDERS,
            Category::Utility => UTILITY_PROVIDERS,
        }
    }

    /// The numeric field summarized by market insights for this category
    pub fn headline_price(&self) -> Metric {
        match self {
            Category::Mobile | Category::Internet => Metric::MonthlyCost,
            Category::Utility => Metric::Rate,
        }
    }

    pub fn value_label(&self) -> &'static str {
        match self {
            Category::Mobile | Category::Internet => "Monthly Cost ($)",
            Category::Utility => "Rate (¢/kWh)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Mobile => "mobile",
            Category::Internet => "internet",
            Category::Utility => "utility",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "phone" => Ok(Category::Mobile),
            "internet" => Ok(Category::Internet),
            "utility" => Ok(Category::Utility),
            other => Err(InsightsError::UnknownCategory(other.to_string())),
        }
    }
}

/// Numeric fields a plan can expose to sorting and aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MonthlyCost,
    Rate,
    ServiceFee,
    /// Estimated monthly utility bill at average usage
    TotalCost,
    DataLimit,
    Speed,
}

/// Read access shared by every plan category.
pub trait PlanRecord {
    fn id(&self) -> i64;
    fn provider(&self) -> &str;
    /// Primary price field; NaN when the submitted value was unusable
    fn price(&self) -> f64;
    fn uploaded_at(&self) -> Option<DateTime<Utc>>;
    fn location(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;

    /// Extra free text matched by search beyond provider, description and location
    fn extra_search_text(&self) -> Option<&str> {
        None
    }

    /// Value of `metric`, or None when this category has no such field
    fn metric(&self, metric: Metric) -> Option<f64>;
}

impl<P: PlanRecord + ?Sized> PlanRecord for &P {
    fn id(&self) -> i64 {
        (**self).id()
    }

    fn provider(&self) -> &str {
        (**self).provider()
    }

    fn price(&self) -> f64 {
        (**self).price()
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        (**self).uploaded_at()
    }

    fn location(&self) -> Option<&str> {
        (**self).location()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn extra_search_text(&self) -> Option<&str> {
        (**self).extra_search_text()
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        (**self).metric(metric)
    }
}

pub fn is_unlimited(value: i64) -> bool {
    value >= UNLIMITED_SENTINEL
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobilePlan {
    pub id: i64,
    pub provider: String,
    pub monthly_cost: f64,
    pub data_limit: i64,
    pub minutes: i64,
    pub sms: i64,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub contract_length: Option<String>,
    pub byod: bool,
}

impl MobilePlan {
    pub fn has_unlimited_data(&self) -> bool {
        is_unlimited(self.data_limit)
    }

    /// Monthly cost per GB; unlimited plans count as a fixed equivalent allowance.
    pub fn cost_per_gb(&self) -> Option<f64> {
        let gb = if self.has_unlimited_data() {
            UNLIMITED_DATA_EQUIVALENT_GB
        } else {
            self.data_limit as f64
        };
        if gb <= 0.0 || !self.monthly_cost.is_finite() {
            return None;
        }
        Some(self.monthly_cost / gb)
    }
}

impl PlanRecord for MobilePlan {
    fn id(&self) -> i64 {
        self.id
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    fn price(&self) -> f64 {
        self.monthly_cost
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::MonthlyCost => Some(self.monthly_cost),
            Metric::DataLimit => Some(self.data_limit as f64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternetPlan {
    pub id: i64,
    pub provider: String,
    pub monthly_cost: f64,
    pub speed: i64,
    pub is_cable: bool,
    pub is_fibre: bool,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub contract_length: Option<String>,
    pub installation_fee: Option<f64>,
    pub equipment_fee: Option<f64>,
}

impl InternetPlan {
    pub fn cost_per_mbps(&self) -> Option<f64> {
        if self.speed <= 0 || !self.monthly_cost.is_finite() {
            return None;
        }
        Some(self.monthly_cost / self.speed as f64)
    }
}

impl PlanRecord for InternetPlan {
    fn id(&self) -> i64 {
        self.id
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    fn price(&self) -> f64 {
        self.monthly_cost
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::MonthlyCost => Some(self.monthly_cost),
            Metric::Speed => Some(self.speed as f64),
            _ => None,
        }
    }
}

/// Estimated bills at the three reference usage levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BillEstimate {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilityPlan {
    pub id: i64,
    pub provider: String,
    /// Cents per kWh
    pub rate: f64,
    /// Dollars per month
    pub service_fee: f64,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub plan_type: Option<String>,
    pub billing_period: Option<String>,
    pub usage_tier: Option<String>,
}

impl UtilityPlan {
    /// Monthly bill in dollars for `usage_kwh` of consumption.
    ///
    /// NaN when either the rate or the service fee is unusable.
    pub fn estimated_bill(&self, usage_kwh: f64) -> f64 {
        self.rate / 100.0 * usage_kwh + self.service_fee
    }

    pub fn bill_estimate(&self) -> BillEstimate {
        BillEstimate {
            low: self.estimated_bill(LOW_USAGE_KWH),
            average: self.estimated_bill(AVERAGE_USAGE_KWH),
            high: self.estimated_bill(HIGH_USAGE_KWH),
        }
    }
}

impl PlanRecord for UtilityPlan {
    fn id(&self) -> i64 {
        self.id
    }

    fn provider(&self) -> &str {
        &self.provider
    }

    fn price(&self) -> f64 {
        self.rate
    }

    fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn extra_search_text(&self) -> Option<&str> {
        self.plan_type.as_deref()
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Rate => Some(self.rate),
            Metric::ServiceFee => Some(self.service_fee),
            Metric::TotalCost => Some(self.estimated_bill(AVERAGE_USAGE_KWH)),
            _ => None,
        }
    }
}
