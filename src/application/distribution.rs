// Distribution aggregator - per-provider price statistics
use std::collections::HashMap;

use crate::domain::insights::{round2, DistributionSummary};
use crate::domain::plan::{Metric, PlanRecord};

/// Median of an ascending, non-empty slice
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn summarize(provider: String, mut values: Vec<f64>) -> DistributionSummary {
    values.sort_by(f64::total_cmp);
    let count = values.len();
    let avg = values.iter().sum::<f64>() / count as f64;

    DistributionSummary {
        provider,
        min: values[0],
        max: values[count - 1],
        avg: round2(avg),
        median: round2(median(&values)),
        count,
    }
}

/// Group plans by provider and summarize `field`.
///
/// Providers are reported in order of first appearance. Non-finite values are
/// left out of the statistics, and a provider with no usable value is omitted.
/// There is no minimum group size: one submission yields a full summary.
pub fn distribution<P: PlanRecord>(records: &[P], field: Metric) -> Vec<DistributionSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();
    let mut skipped = 0usize;

    for plan in records {
        let value = match plan.metric(field) {
            Some(v) if v.is_finite() => v,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let provider = plan.provider();
        match groups.get_mut(provider) {
            Some(values) => values.push(value),
            None => {
                order.push(provider.to_string());
                groups.insert(provider.to_string(), vec![value]);
            }
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} plans without a usable {:?} value", skipped, field);
    }

    order
        .into_iter()
        .filter_map(|provider| {
            let values = groups.remove(&provider)?;
            Some(summarize(provider, values))
        })
        .collect()
}
