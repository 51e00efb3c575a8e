//! Row type for the scored airport dataset.

use serde::{Deserialize, Deserializer};

/// A single scored airport, deserialized from one CSV row.
///
/// Column names follow the upstream scoring pipeline's output schema,
/// bound via serde renames. Records are immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct AirportRecord {
    #[serde(rename = "ARPT_NAME")]
    pub name: String,

    #[serde(rename = "CITY")]
    pub city: String,

    #[serde(rename = "STATE_NAME")]
    pub state: String,

    #[serde(rename = "LAT_DECIMAL")]
    pub latitude: Option<f64>,

    #[serde(rename = "LONG_DECIMAL")]
    pub longitude: Option<f64>,

    #[serde(rename = "predicted_score")]
    pub score: f64,

    #[serde(rename = "cert_importance_score")]
    pub cert_score: f64,

    #[serde(rename = "is_military_relevant", deserialize_with = "bool_from_csv")]
    pub military_relevant: bool,
}

impl AirportRecord {
    /// Returns `(latitude, longitude)` when both are present.
    ///
    /// Records without coordinates stay in the dataset (state
    /// aggregation still counts them) but are excluded from every
    /// geographic layer.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// The upstream pipeline writes pandas-style `True`/`False` booleans.
fn bool_from_csv<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "true" | "True" | "TRUE" | "1" => Ok(true),
        "false" | "False" | "FALSE" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean value: {other:?}"
        ))),
    }
}
