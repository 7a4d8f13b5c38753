// Filter configuration models - per-category option sets with "show everything, latest first" defaults
use serde::{Deserialize, Serialize};

use crate::domain::plan::Metric;

/// An enumerated option backed by the value strings the UI controls emit.
pub trait FilterOption: Sized + Copy + Default + PartialEq + 'static {
    const OPTIONS: &'static [(&'static str, Self)];

    fn as_str(&self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find(|(_, option)| option == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    /// Parse a UI option value, falling back to the default when it is not recognized.
    fn parse_or_default(value: &str) -> Self {
        match Self::OPTIONS.iter().find(|(name, _)| *name == value) {
            Some((_, option)) => *option,
            None => {
                let fallback = Self::default();
                tracing::warn!(
                    "Unrecognized filter option '{}', using '{}'",
                    value,
                    fallback.as_str()
                );
                fallback
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Recency,
    Metric(Metric),
    Provider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: Direction,
}

impl SortOrder {
    pub const fn new(field: SortField, direction: Direction) -> Self {
        Self { field, direction }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::new(SortField::Recency, Direction::Descending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProviderSelection {
    #[default]
    All,
    Only(String),
}

impl ProviderSelection {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            ProviderSelection::All
        } else {
            ProviderSelection::Only(value.to_string())
        }
    }

    pub fn matches(&self, provider: &str) -> bool {
        match self {
            ProviderSelection::All => true,
            ProviderSelection::Only(selected) => selected == provider,
        }
    }
}

/// Membership in `lower < value <= upper`; a missing bound is open.
pub fn in_bucket(value: f64, lower: Option<f64>, upper: Option<f64>) -> bool {
    lower.is_none_or(|l| value > l) && upper.is_none_or(|u| value <= u)
}

/// A fixed range bucket over one numeric plan field.
pub trait RangeBucket: FilterOption {
    /// Bounds of the bucket, or None for the "all" bucket
    fn bounds(&self) -> Option<(Option<f64>, Option<f64>)>;

    fn contains(&self, value: f64) -> bool {
        match self.bounds() {
            None => true,
            Some((lower, upper)) => in_bucket(value, lower, upper),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileSort {
    #[default]
    Latest,
    PriceLow,
    PriceHigh,
    DataHigh,
    Provider,
}

impl FilterOption for MobileSort {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("latest", MobileSort::Latest),
        ("price-low", MobileSort::PriceLow),
        ("price-high", MobileSort::PriceHigh),
        ("data-high", MobileSort::DataHigh),
        ("provider", MobileSort::Provider),
    ];
}

impl MobileSort {
    pub fn order(&self) -> SortOrder {
        use Direction::*;
        match self {
            MobileSort::Latest => SortOrder::default(),
            MobileSort::PriceLow => SortOrder::new(SortField::Metric(Metric::MonthlyCost), Ascending),
            MobileSort::PriceHigh => SortOrder::new(SortField::Metric(Metric::MonthlyCost), Descending),
            MobileSort::DataHigh => SortOrder::new(SortField::Metric(Metric::DataLimit), Descending),
            MobileSort::Provider => SortOrder::new(SortField::Provider, Ascending),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataRange {
    #[default]
    All,
    UpTo5,
    From5To10,
    From10To20,
    Over20,
}

impl FilterOption for DataRange {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("all", DataRange::All),
        ("0-5", DataRange::UpTo5),
        ("5-10", DataRange::From5To10),
        ("10-20", DataRange::From10To20),
        ("20+", DataRange::Over20),
    ];
}

impl RangeBucket for DataRange {
    fn bounds(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            DataRange::All => None,
            DataRange::UpTo5 => Some((None, Some(5.0))),
            DataRange::From5To10 => Some((Some(5.0), Some(10.0))),
            DataRange::From10To20 => Some((Some(10.0), Some(20.0))),
            DataRange::Over20 => Some((Some(20.0), None)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MobileFilters {
    pub search_query: String,
    pub sort_by: MobileSort,
    pub provider: ProviderSelection,
    pub data_range: DataRange,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
}

impl MobileFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || self.sort_by != MobileSort::default()
            || self.provider != ProviderSelection::All
            || self.data_range != DataRange::All
            || self.min_cost.is_some()
            || self.max_cost.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InternetSort {
    #[default]
    Latest,
    PriceLow,
    PriceHigh,
    SpeedHigh,
    Provider,
}

impl FilterOption for InternetSort {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("latest", InternetSort::Latest),
        ("price-low", InternetSort::PriceLow),
        ("price-high", InternetSort::PriceHigh),
        ("speed-high", InternetSort::SpeedHigh),
        ("provider", InternetSort::Provider),
    ];
}

impl InternetSort {
    pub fn order(&self) -> SortOrder {
        use Direction::*;
        match self {
            InternetSort::Latest => SortOrder::default(),
            InternetSort::PriceLow => SortOrder::new(SortField::Metric(Metric::MonthlyCost), Ascending),
            InternetSort::PriceHigh => SortOrder::new(SortField::Metric(Metric::MonthlyCost), Descending),
            InternetSort::SpeedHigh => SortOrder::new(SortField::Metric(Metric::Speed), Descending),
            InternetSort::Provider => SortOrder::new(SortField::Provider, Ascending),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedRange {
    #[default]
    All,
    UpTo50,
    From50To100,
    From100To500,
    Over500,
}

impl FilterOption for SpeedRange {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("all", SpeedRange::All),
        ("0-50", SpeedRange::UpTo50),
        ("50-100", SpeedRange::From50To100),
        ("100-500", SpeedRange::From100To500),
        ("500+", SpeedRange::Over500),
    ];
}

impl RangeBucket for SpeedRange {
    fn bounds(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            SpeedRange::All => None,
            SpeedRange::UpTo50 => Some((None, Some(50.0))),
            SpeedRange::From50To100 => Some((Some(50.0), Some(100.0))),
            SpeedRange::From100To500 => Some((Some(100.0), Some(500.0))),
            SpeedRange::Over500 => Some((Some(500.0), None)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionType {
    #[default]
    All,
    Fibre,
    Cable,
}

impl FilterOption for ConnectionType {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("all", ConnectionType::All),
        ("fibre", ConnectionType::Fibre),
        ("cable", ConnectionType::Cable),
    ];
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InternetFilters {
    pub search_query: String,
    pub sort_by: InternetSort,
    pub provider: ProviderSelection,
    pub speed_range: SpeedRange,
    pub connection_type: ConnectionType,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
}

impl InternetFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || self.sort_by != InternetSort::default()
            || self.provider != ProviderSelection::All
            || self.speed_range != SpeedRange::All
            || self.connection_type != ConnectionType::All
            || self.min_cost.is_some()
            || self.max_cost.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UtilitySort {
    #[default]
    Latest,
    RateLow,
    RateHigh,
    TotalLow,
    TotalHigh,
    Provider,
}

impl FilterOption for UtilitySort {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("latest", UtilitySort::Latest),
        ("rate-low", UtilitySort::RateLow),
        ("rate-high", UtilitySort::RateHigh),
        ("total-low", UtilitySort::TotalLow),
        ("total-high", UtilitySort::TotalHigh),
        ("provider", UtilitySort::Provider),
    ];
}

impl UtilitySort {
    pub fn order(&self) -> SortOrder {
        use Direction::*;
        match self {
            UtilitySort::Latest => SortOrder::default(),
            UtilitySort::RateLow => SortOrder::new(SortField::Metric(Metric::Rate), Ascending),
            UtilitySort::RateHigh => SortOrder::new(SortField::Metric(Metric::Rate), Descending),
            UtilitySort::TotalLow => SortOrder::new(SortField::Metric(Metric::TotalCost), Ascending),
            UtilitySort::TotalHigh => SortOrder::new(SortField::Metric(Metric::TotalCost), Descending),
            UtilitySort::Provider => SortOrder::new(SortField::Provider, Ascending),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateRange {
    #[default]
    All,
    UpTo10,
    From10To15,
    From15To20,
    Over20,
}

impl FilterOption for RateRange {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("all", RateRange::All),
        ("0-10", RateRange::UpTo10),
        ("10-15", RateRange::From10To15),
        ("15-20", RateRange::From15To20),
        ("20+", RateRange::Over20),
    ];
}

impl RangeBucket for RateRange {
    fn bounds(&self) -> Option<(Option<f64>, Option<f64>)> {
        match self {
            RateRange::All => None,
            RateRange::UpTo10 => Some((None, Some(10.0))),
            RateRange::From10To15 => Some((Some(10.0), Some(15.0))),
            RateRange::From15To20 => Some((Some(15.0), Some(20.0))),
            RateRange::Over20 => Some((Some(20.0), None)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UtilityFilters {
    pub search_query: String,
    pub sort_by: UtilitySort,
    pub provider: ProviderSelection,
    pub rate_range: RateRange,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub min_service_fee: Option<f64>,
    pub max_service_fee: Option<f64>,
}

impl UtilityFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || self.sort_by != UtilitySort::default()
            || self.provider != ProviderSelection::All
            || self.rate_range != RateRange::All
            || self.min_rate.is_some()
            || self.max_rate.is_some()
            || self.min_service_fee.is_some()
            || self.max_service_fee.is_some()
    }
}
