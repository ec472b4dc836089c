use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Deserializer, Serialize};

use super::FromSqliteRow;

/// Deserialize a measurement that may arrive as a JSON number or a form
/// string. Absent and empty both mean "not measured" (0.0).
fn deserialize_measurement<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Raw::Number(n)) => Ok(n),
        Some(Raw::Text(s)) if s.is_empty() => Ok(0.0),
        Some(Raw::Text(s)) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// Body-circumference measurements in centimeters. A zero value means
/// "not measured" — there is no distinct null representation, so a
/// genuinely-measured zero is indistinguishable from an unset field.
#[derive(Debug, Clone, Serialize)]
pub struct BodyMetrics {
    pub id: i64,
    pub shoulder: f64,
    pub waist: f64,
    pub chest: f64,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for BodyMetrics {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            shoulder: row.get("shoulder")?,
            waist: row.get("waist")?,
            chest: row.get("chest")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBodyMetrics {
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub shoulder: f64,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub waist: f64,
    #[serde(default, deserialize_with = "deserialize_measurement")]
    pub chest: f64,
}

impl CreateBodyMetrics {
    pub fn validate(&self) -> Result<(), String> {
        if self.shoulder < 0.0 || self.waist < 0.0 || self.chest < 0.0 {
            return Err("measurements must not be negative".to_string());
        }
        Ok(())
    }
}
