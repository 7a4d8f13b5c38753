// Trend aggregator - weekly price series over a trailing window
use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::domain::insights::{round2, TrendPoint};
use crate::domain::plan::{Metric, PlanRecord};

pub const TREND_WINDOW_DAYS: i64 = 90;

/// Sunday that starts the (UTC) week containing `ts`
pub fn week_start(ts: DateTime<Utc>) -> NaiveDate {
    let date = ts.date_naive();
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Weekly average of each plan's primary price over the trailing 90 days.
pub fn trend<P: PlanRecord>(records: &[P], now: DateTime<Utc>) -> Vec<TrendPoint> {
    trend_with_window(records, now, Duration::days(TREND_WINDOW_DAYS), None)
}

/// Weekly average of `field` (the primary price when None) for plans uploaded
/// within `window` before `now`, ascending by week.
///
/// The first week may begin before the window does; its reported start is
/// clamped to the window's first day so every point lies inside the window.
pub fn trend_with_window<P: PlanRecord>(
    records: &[P],
    now: DateTime<Utc>,
    window: Duration,
    field: Option<Metric>,
) -> Vec<TrendPoint> {
    let window_start = now - window;
    let first_day = window_start.date_naive();
    let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for plan in records {
        let Some(uploaded_at) = plan.uploaded_at() else {
            continue;
        };
        if uploaded_at < window_start || uploaded_at > now {
            continue;
        }

        let value = match field {
            Some(metric) => plan.metric(metric).unwrap_or(f64::NAN),
            None => plan.price(),
        };
        if !value.is_finite() {
            continue;
        }

        let bucket = buckets
            .entry(week_start(uploaded_at).max(first_day))
            .or_insert((0.0, 0));
        bucket.0 += value;
        bucket.1 += 1;
    }

    tracing::debug!(
        "Built {} weekly trend buckets since {}",
        buckets.len(),
        first_day
    );

    buckets
        .into_iter()
        .map(|(week_start, (sum, count))| TrendPoint {
            week_start,
            avg_price: round2(sum / count as f64),
            count,
        })
        .collect()
}
