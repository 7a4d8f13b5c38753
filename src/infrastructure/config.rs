use serde::Deserialize;

use crate::application::trend::TREND_WINDOW_DAYS;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InsightsConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub insights: InsightsSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    /// JSON snapshot exported from the plan tables
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InsightsSettings {
    #[serde(default = "default_trend_window_days")]
    pub trend_window_days: i64,
    #[serde(default = "default_latest_limit")]
    pub latest_limit: usize,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_snapshot_path() -> String {
    "data/plans.json".to_string()
}

fn default_trend_window_days() -> i64 {
    TREND_WINDOW_DAYS
}

fn default_latest_limit() -> usize {
    3
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            trend_window_days: default_trend_window_days(),
            latest_limit: default_latest_limit(),
            location: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Load `config/insights.toml` (optional) overlaid with `RATE_INSIGHTS__SECTION__KEY` variables
pub fn load_insights_config() -> anyhow::Result<InsightsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/insights").required(false))
        .add_source(config::Environment::with_prefix("RATE_INSIGHTS").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> InsightsConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("");
        assert_eq!(config.data.snapshot_path, "data/plans.json");
        assert_eq!(config.insights.trend_window_days, 90);
        assert_eq!(config.insights.latest_limit, 3);
        assert_eq!(config.insights.location, None);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_overrides() {
        let config = from_toml(
            r#"
            [data]
            snapshot_path = "/srv/rates/snapshot.json"

            [insights]
            trend_window_days = 30
            location = "Calgary"
            "#,
        );
        assert_eq!(config.data.snapshot_path, "/srv/rates/snapshot.json");
        assert_eq!(config.insights.trend_window_days, 30);
        assert_eq!(config.insights.latest_limit, 3);
        assert_eq!(config.insights.location.as_deref(), Some("Calgary"));
    }
}
