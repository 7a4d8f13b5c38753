// Selection state - the plan currently shown in a view's detail pane
use tokio::sync::watch;

use crate::domain::plan::PlanRecord;

/// At most one selected plan, owned by the view that displays it.
///
/// Subscribers receive the selected plan id on every transition. Selecting
/// does not check membership in the current filtered list.
#[derive(Debug)]
pub struct Selection<P> {
    selected: Option<P>,
    notifier: watch::Sender<Option<i64>>,
}

impl<P: PlanRecord + Clone> Selection<P> {
    pub fn new() -> Self {
        let (notifier, _) = watch::channel(None);
        Self {
            selected: None,
            notifier,
        }
    }

    pub fn select(&mut self, plan: P) {
        let id = plan.id();
        self.selected = Some(plan);
        self.notifier.send_replace(Some(id));
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.notifier.send_replace(None);
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_id() == Some(id)
    }

    pub fn selected(&self) -> Option<&P> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(PlanRecord::id)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<i64>> {
        self.notifier.subscribe()
    }
}

impl<P: PlanRecord + Clone> Default for Selection<P> {
    fn default() -> Self {
        Self::new()
    }
}
