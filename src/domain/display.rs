// Display labels for plan fields
use chrono::{DateTime, Utc};

use crate::domain::plan::is_unlimited;

pub fn format_data_limit(limit: i64) -> String {
    if is_unlimited(limit) {
        return "Unlimited".to_string();
    }
    format!("{}GB", limit)
}

pub fn format_minutes(minutes: i64) -> String {
    if is_unlimited(minutes) {
        return "Unlimited".to_string();
    }
    format!("{} min", minutes)
}

pub fn format_sms(sms: i64) -> String {
    if is_unlimited(sms) {
        return "Unlimited".to_string();
    }
    format!("{} texts", sms)
}

pub fn format_speed(speed_mbps: i64) -> String {
    if speed_mbps >= 1000 {
        return format!("{:.1} Gbps", speed_mbps as f64 / 1000.0);
    }
    format!("{} Mbps", speed_mbps)
}

pub fn format_price(cost: f64) -> String {
    if !cost.is_finite() {
        return "N/A".to_string();
    }
    format!("${:.2}", cost)
}

/// Utility rate in cents
pub fn format_rate(rate: f64) -> String {
    if !rate.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.1}¢", rate)
}

/// "HH:MM" for submissions made on the same day as `now`, otherwise "N day(s) ago".
pub fn format_time_ago(uploaded_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if uploaded_at.date_naive() == now.date_naive() {
        return uploaded_at.format("%H:%M").to_string();
    }

    let days = (now - uploaded_at).num_days();
    if days > 1 {
        format!("{} days ago", days)
    } else {
        format!("{} day ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unlimited_labels() {
        assert_eq!(format_data_limit(9999), "Unlimited");
        assert_eq!(format_data_limit(10), "10GB");
        assert_eq!(format_minutes(500), "500 min");
        assert_eq!(format_sms(12000), "Unlimited");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(500), "500 Mbps");
        assert_eq!(format_speed(1500), "1.5 Gbps");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_price(45.0), "$45.00");
        assert_eq!(format_price(f64::NAN), "N/A");
        assert_eq!(format_rate(12.34), "12.3¢");
    }

    #[test]
    fn test_format_time_ago() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let today = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(format_time_ago(today, now), "09:05");

        let yesterday = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(yesterday, now), "1 day ago");

        let last_week = Utc.with_ymd_and_hms(2024, 2, 23, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(last_week, now), "7 days ago");
    }
}
