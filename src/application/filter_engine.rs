// Filter engine - applies a filter configuration to a plan collection
use crate::application::sort_engine::sort_plans;
use crate::domain::filters::{
    ConnectionType, InternetFilters, MobileFilters, RangeBucket, SortOrder, UtilityFilters,
};
use crate::domain::plan::{InternetPlan, MobilePlan, PlanRecord, UtilityPlan};

/// A category filter configuration that can test plans of its category.
pub trait PlanFilter {
    type Plan: PlanRecord + Clone;

    /// All predicates of the configuration, combined with AND
    fn matches(&self, plan: &Self::Plan) -> bool;

    fn sort_order(&self) -> SortOrder;
}

/// Case-insensitive substring match on provider, description, location and
/// any category-specific search text. An empty query matches everything.
pub fn matches_search<P: PlanRecord>(plan: &P, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    let contains = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(&query));

    contains(Some(plan.provider()))
        || contains(plan.description())
        || contains(plan.location())
        || contains(plan.extra_search_text())
}

/// Inclusive bounds; an absent bound always passes.
pub fn within_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

impl PlanFilter for MobileFilters {
    type Plan = MobilePlan;

    fn matches(&self, plan: &MobilePlan) -> bool {
        matches_search(plan, &self.search_query)
            && self.provider.matches(&plan.provider)
            && self.data_range.contains(plan.data_limit as f64)
            && within_bounds(plan.monthly_cost, self.min_cost, self.max_cost)
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_by.order()
    }
}

impl PlanFilter for InternetFilters {
    type Plan = InternetPlan;

    fn matches(&self, plan: &InternetPlan) -> bool {
        let connection = match self.connection_type {
            ConnectionType::All => true,
            ConnectionType::Fibre => plan.is_fibre,
            ConnectionType::Cable => plan.is_cable,
        };

        matches_search(plan, &self.search_query)
            && self.provider.matches(&plan.provider)
            && self.speed_range.contains(plan.speed as f64)
            && connection
            && within_bounds(plan.monthly_cost, self.min_cost, self.max_cost)
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_by.order()
    }
}

impl PlanFilter for UtilityFilters {
    type Plan = UtilityPlan;

    fn matches(&self, plan: &UtilityPlan) -> bool {
        matches_search(plan, &self.search_query)
            && self.provider.matches(&plan.provider)
            && self.rate_range.contains(plan.rate)
            && within_bounds(plan.rate, self.min_rate, self.max_rate)
            && within_bounds(plan.service_fee, self.min_service_fee, self.max_service_fee)
    }

    fn sort_order(&self) -> SortOrder {
        self.sort_by.order()
    }
}

/// Plans that pass every predicate, in their original relative order.
pub fn filter<F: PlanFilter>(records: &[F::Plan], filters: &F) -> Vec<F::Plan> {
    records
        .iter()
        .filter(|plan| filters.matches(plan))
        .cloned()
        .collect()
}

/// Filter then sort into a display-ready list view.
pub fn apply<F: PlanFilter>(records: &[F::Plan], filters: &F) -> Vec<F::Plan> {
    let filtered = filter(records, filters);
    let order = filters.sort_order();
    tracing::debug!(
        "Filtered {} of {} plans, sorting by {:?}",
        filtered.len(),
        records.len(),
        order
    );
    sort_plans(&filtered, order.field, order.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filters::{
        DataRange, MobileSort, ProviderSelection, RateRange, SpeedRange, UtilitySort,
    };
    use crate::domain::plan::fixtures::*;

    fn mixed_mobile() -> Vec<MobilePlan> {
        vec![
            mobile(1, "Bell", 45.0, 10),
            mobile(2, "Rogers", 65.0, 9999),
            mobile(3, "Telus", 55.0, 20),
            mobile(4, "Rogers", 30.0, 5),
            mobile(5, "Fido", 40.0, 15),
            mobile(6, "Rogers", 80.0, 50),
            mobile(7, "Koodo", 35.0, 4),
        ]
    }

    #[test]
    fn test_provider_filter_preserves_order() {
        let filters = MobileFilters {
            provider: ProviderSelection::parse("Rogers"),
            ..Default::default()
        };
        let ids: Vec<i64> = filter(&mixed_mobile(), &filters).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_default_filters_keep_everything() {
        let plans = mixed_mobile();
        assert_eq!(filter(&plans, &MobileFilters::default()), plans);
    }

    #[test]
    fn test_empty_input() {
        let no_mobile: Vec<MobilePlan> = Vec::new();
        let no_internet: Vec<InternetPlan> = Vec::new();
        assert!(filter(&no_mobile, &MobileFilters::default()).is_empty());
        assert!(apply(&no_internet, &InternetFilters::default()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut plans = mixed_mobile();
        plans[2].description = Some("Student PROMO".to_string());
        plans[4].location = Some("Calgary, AB".to_string());

        let search = |query: &str| {
            let filters = MobileFilters {
                search_query: query.to_string(),
                ..Default::default()
            };
            filter(&plans, &filters).iter().map(|p| p.id).collect::<Vec<_>>()
        };

        assert_eq!(search("rogers"), vec![2, 4, 6]);
        assert_eq!(search("promo"), vec![3]);
        assert_eq!(search("calgary"), vec![5]);
        assert!(search("vancouver").is_empty());
    }

    #[test]
    fn test_missing_optional_field_only_fails_its_own_predicate() {
        let plans = vec![mobile(1, "Bell", 45.0, 10)];
        let filters = MobileFilters {
            search_query: "bell".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&plans, &filters).len(), 1);
    }

    #[test]
    fn test_data_range_buckets() {
        let bucket = |range: DataRange| {
            let filters = MobileFilters {
                data_range: range,
                ..Default::default()
            };
            filter(&mixed_mobile(), &filters).iter().map(|p| p.id).collect::<Vec<_>>()
        };

        assert_eq!(bucket(DataRange::UpTo5), vec![4, 7]);
        assert_eq!(bucket(DataRange::From5To10), vec![1]);
        assert_eq!(bucket(DataRange::From10To20), vec![3, 5]);
        assert_eq!(bucket(DataRange::Over20), vec![2, 6]);
    }

    #[test]
    fn test_cost_bounds_are_inclusive() {
        let filters = MobileFilters {
            min_cost: Some(40.0),
            max_cost: Some(65.0),
            ..Default::default()
        };
        let ids: Vec<i64> = filter(&mixed_mobile(), &filters).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_nan_price_excluded_only_by_price_bounds() {
        let plans = vec![mobile(1, "Bell", f64::NAN, 10), mobile(2, "Bell", 50.0, 10)];
        assert_eq!(filter(&plans, &MobileFilters::default()).len(), 2);

        let bounded = MobileFilters {
            max_cost: Some(100.0),
            ..Default::default()
        };
        assert_eq!(filter(&plans, &bounded)[0].id, 2);
    }

    #[test]
    fn test_internet_connection_and_speed() {
        let plans = vec![
            internet(1, "Bell", 85.0, 100, true),
            internet(2, "Shaw", 75.0, 300, false),
            internet(3, "Telus", 95.0, 1000, true),
            internet(4, "Rogers", 60.0, 50, false),
        ];

        let fibre = InternetFilters {
            connection_type: ConnectionType::Fibre,
            ..Default::default()
        };
        let ids: Vec<i64> = filter(&plans, &fibre).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let fast_cable = InternetFilters {
            connection_type: ConnectionType::Cable,
            speed_range: SpeedRange::From100To500,
            ..Default::default()
        };
        let ids: Vec<i64> = filter(&plans, &fast_cable).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_utility_filters() {
        let mut plans = vec![
            utility(1, "ENMAX", 9.5, 10.0),
            utility(2, "ATCO", 12.0, 20.0),
            utility(3, "Direct Energy", 16.0, 8.0),
            utility(4, "ENMAX", 22.0, 15.0),
        ];
        plans[3].plan_type = Some("Variable".to_string());

        let mid_rate = UtilityFilters {
            rate_range: RateRange::From10To15,
            ..Default::default()
        };
        assert_eq!(filter(&plans, &mid_rate)[0].id, 2);

        let cheap_fee = UtilityFilters {
            max_service_fee: Some(10.0),
            ..Default::default()
        };
        let ids: Vec<i64> = filter(&plans, &cheap_fee).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let by_plan_type = UtilityFilters {
            search_query: "variable".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&plans, &by_plan_type)[0].id, 4);
    }

    #[test]
    fn test_apply_sorts_filtered_view() {
        let filters = MobileFilters {
            provider: ProviderSelection::parse("Rogers"),
            sort_by: MobileSort::PriceLow,
            ..Default::default()
        };
        let ids: Vec<i64> = apply(&mixed_mobile(), &filters).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 2, 6]);

        let utility_filters = UtilityFilters {
            sort_by: UtilitySort::TotalHigh,
            ..Default::default()
        };
        let plans = vec![utility(1, "ENMAX", 10.0, 10.0), utility(2, "ATCO", 9.0, 30.0)];
        let ids: Vec<i64> = apply(&plans, &utility_filters).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let filters = MobileFilters {
            search_query: "o".to_string(),
            sort_by: MobileSort::DataHigh,
            ..Default::default()
        };
        let plans = mixed_mobile();
        assert_eq!(apply(&plans, &filters), apply(&plans, &filters));
    }

    #[test]
    fn test_filter_output_is_ordered_subset() {
        let plans = mixed_mobile();
        let filters = MobileFilters {
            data_range: DataRange::Over20,
            min_cost: Some(50.0),
            ..Default::default()
        };
        let result = filter(&plans, &filters);
        let positions: Vec<usize> = result
            .iter()
            .map(|r| plans.iter().position(|p| p == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
