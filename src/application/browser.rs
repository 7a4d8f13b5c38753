// Plan browser - per-view list state that re-derives on every filter change
use crate::application::filter_engine::{apply, PlanFilter};
use crate::application::selection::Selection;
use crate::domain::filters::{InternetFilters, MobileFilters, UtilityFilters};

pub type MobileBrowser = PlanBrowser<MobileFilters>;
pub type InternetBrowser = PlanBrowser<InternetFilters>;
pub type UtilityBrowser = PlanBrowser<UtilityFilters>;

/// Holds one view's raw plans, filter configuration, derived list and selection.
///
/// The derived list is recomputed from the full plan set whenever the plans
/// or the filters change.
pub struct PlanBrowser<F: PlanFilter> {
    plans: Vec<F::Plan>,
    filters: F,
    filtered: Vec<F::Plan>,
    selection: Selection<F::Plan>,
}

impl<F> PlanBrowser<F>
where
    F: PlanFilter + Default,
{
    pub fn new(plans: Vec<F::Plan>) -> Self {
        let mut browser = Self {
            plans,
            filters: F::default(),
            filtered: Vec::new(),
            selection: Selection::new(),
        };
        browser.refresh();
        browser
    }

    fn refresh(&mut self) {
        self.filtered = apply(&self.plans, &self.filters);
    }

    /// Replace the raw plan set, e.g. after a reload from storage
    pub fn set_plans(&mut self, plans: Vec<F::Plan>) {
        self.plans = plans;
        self.refresh();
    }

    pub fn update_filters(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.filters);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters = F::default();
        self.refresh();
    }

    pub fn filters(&self) -> &F {
        &self.filters
    }

    pub fn plans(&self) -> &[F::Plan] {
        &self.plans
    }

    pub fn filtered_plans(&self) -> &[F::Plan] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.plans.len()
    }

    pub fn selection(&self) -> &Selection<F::Plan> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<F::Plan> {
        &mut self.selection
    }
}
