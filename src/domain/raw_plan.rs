// Raw plan records as delivered by the storage collaborator
use serde::Deserialize;

/// A numeric field that may arrive either as a number or as formatted text ("$85").
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMobilePlan {
    pub id: i64,
    pub provider: String,
    pub monthly_cost: Option<RawNumber>,
    #[serde(default)]
    pub data_limit: Option<RawNumber>,
    #[serde(default)]
    pub minutes: Option<RawNumber>,
    #[serde(default)]
    pub sms: Option<RawNumber>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub contract_length: Option<String>,
    #[serde(default)]
    pub byod: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInternetPlan {
    pub id: i64,
    pub provider: String,
    pub monthly_cost: Option<RawNumber>,
    #[serde(default)]
    pub speed: Option<RawNumber>,
    #[serde(default, rename = "isCable")]
    pub is_cable: Option<bool>,
    #[serde(default, rename = "isFibre")]
    pub is_fibre: Option<bool>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contract_length: Option<String>,
    #[serde(default)]
    pub installation_fee: Option<RawNumber>,
    #[serde(default)]
    pub equipment_fee: Option<RawNumber>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUtilityPlan {
    pub id: i64,
    pub provider: String,
    pub rate: Option<RawNumber>,
    #[serde(default)]
    pub service_fee: Option<RawNumber>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub billing_period: Option<String>,
    #[serde(default)]
    pub usage_tier: Option<String>,
}
