// Sort engine - stable ordering of plan collections with NaN-last semantics
use std::cmp::Ordering;

use crate::domain::filters::{Direction, SortField};
use crate::domain::plan::PlanRecord;

/// Compare two numeric sort keys in `direction`; NaN orders after every number
/// in either direction.
pub fn compare_numeric(a: f64, b: f64, direction: Direction) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        }
    }
}

fn compare_plans<P: PlanRecord>(a: &P, b: &P, field: SortField, direction: Direction) -> Ordering {
    match field {
        SortField::Recency => match (a.uploaded_at(), b.uploaded_at()) {
            (Some(x), Some(y)) => match direction {
                Direction::Ascending => x.cmp(&y),
                Direction::Descending => y.cmp(&x),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortField::Metric(metric) => {
            let x = a.metric(metric).unwrap_or(f64::NAN);
            let y = b.metric(metric).unwrap_or(f64::NAN);
            compare_numeric(x, y, direction)
        }
        SortField::Provider => {
            let ordering = a.provider().to_lowercase().cmp(&b.provider().to_lowercase());
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        }
    }
}

/// Return a sorted copy of `records`. Ties keep their input order.
pub fn sort_plans<P: PlanRecord + Clone>(
    records: &[P],
    field: SortField,
    direction: Direction,
) -> Vec<P> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_plans(a, b, field, direction));
    sorted
}

/// The `limit` most recent submissions, newest first.
pub fn latest<P: PlanRecord + Clone>(records: &[P], limit: usize) -> Vec<P> {
    let mut sorted = sort_plans(records, SortField::Recency, Direction::Descending);
    sorted.truncate(limit);
    sorted
}
