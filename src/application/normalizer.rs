// Record normalizer - converts raw storage records into typed plan records
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::plan::{InternetPlan, MobilePlan, UtilityPlan, UNLIMITED_SENTINEL};
use crate::domain::raw_plan::{RawInternetPlan, RawMobilePlan, RawNumber, RawUtilityPlan};

/// Leading number of a formatted value, ignoring `$` and thousands separators.
///
/// Trailing text is dropped, so "$85/mo, 10GB" reads as 85.
fn leading_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    let cleaned = cleaned.trim_start();
    let end = cleaned
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(cleaned.len(), |(i, _)| i);
    cleaned[..end].parse::<f64>().ok()
}

/// Parse a price that may carry currency formatting ("$85", "$1,234.50").
///
/// Only the leading number counts. Returns NaN when there is none, or when
/// the value is negative.
pub fn parse_price(raw: &RawNumber) -> f64 {
    let value = match raw {
        RawNumber::Number(n) => *n,
        RawNumber::Text(text) => leading_number(text).unwrap_or(f64::NAN),
    };

    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!("Unusable price value {:?}", raw);
        f64::NAN
    }
}

fn parse_optional_price(raw: Option<&RawNumber>) -> f64 {
    match raw {
        Some(raw) => parse_price(raw),
        None => f64::NAN,
    }
}

/// Parse an integer allowance or speed, 0 when absent, negative or unparsable.
///
/// "Unlimited" maps to the unlimited sentinel.
pub fn parse_count(raw: Option<&RawNumber>) -> i64 {
    let value = match raw {
        Some(RawNumber::Number(n)) => *n,
        Some(RawNumber::Text(text)) if text.trim().eq_ignore_ascii_case("unlimited") => {
            return UNLIMITED_SENTINEL;
        }
        Some(RawNumber::Text(text)) => leading_number(text).unwrap_or(f64::NAN),
        None => return 0,
    };

    if value.is_finite() && value >= 0.0 {
        value.round() as i64
    } else {
        tracing::warn!("Unusable count value {:?}", raw);
        0
    }
}

/// Parse an upload timestamp; bare date and date-time forms are read as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(ts) = DateTime::parse_from_str(text, format) {
            return Some(ts.with_timezone(&Utc));
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
            return Some(ts.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|ts| ts.and_utc());
    }

    tracing::warn!("Unparsable upload timestamp '{}'", text);
    None
}

fn optional_fee(raw: Option<&RawNumber>) -> Option<f64> {
    raw.map(parse_price).filter(|fee| fee.is_finite())
}

pub fn normalize_mobile(raw: RawMobilePlan) -> MobilePlan {
    MobilePlan {
        id: raw.id,
        monthly_cost: parse_optional_price(raw.monthly_cost.as_ref()),
        data_limit: parse_count(raw.data_limit.as_ref()),
        minutes: parse_count(raw.minutes.as_ref()),
        sms: parse_count(raw.sms.as_ref()),
        uploaded_at: parse_timestamp(raw.uploaded_at.as_deref()),
        provider: raw.provider,
        location: raw.location,
        description: raw.description,
        features: raw.features.unwrap_or_default(),
        contract_length: raw.contract_length,
        byod: raw.byod.unwrap_or(false),
    }
}

pub fn normalize_internet(raw: RawInternetPlan) -> InternetPlan {
    InternetPlan {
        id: raw.id,
        monthly_cost: parse_optional_price(raw.monthly_cost.as_ref()),
        speed: parse_count(raw.speed.as_ref()),
        is_cable: raw.is_cable.unwrap_or(false),
        is_fibre: raw.is_fibre.unwrap_or(false),
        uploaded_at: parse_timestamp(raw.uploaded_at.as_deref()),
        installation_fee: optional_fee(raw.installation_fee.as_ref()),
        equipment_fee: optional_fee(raw.equipment_fee.as_ref()),
        provider: raw.provider,
        location: raw.location,
        description: raw.description,
        contract_length: raw.contract_length,
    }
}

pub fn normalize_utility(raw: RawUtilityPlan) -> UtilityPlan {
    UtilityPlan {
        id: raw.id,
        rate: parse_optional_price(raw.rate.as_ref()),
        service_fee: parse_optional_price(raw.service_fee.as_ref()),
        uploaded_at: parse_timestamp(raw.uploaded_at.as_deref()),
        provider: raw.provider,
        location: raw.location,
        description: raw.description,
        plan_type: raw.plan_type,
        billing_period: raw.billing_period,
        usage_tier: raw.usage_tier,
    }
}
