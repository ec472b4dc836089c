use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Deserializer, Serialize};

use super::FromSqliteRow;

/// Deserialize an optional integer that may arrive as a JSON number or a
/// form string. Empty strings mean None instead of failing.
fn deserialize_optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.is_empty() => Ok(None),
        Some(Raw::Text(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Deserialize an optional text field, mapping the empty string to None.
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.filter(|s| !s.is_empty()))
}

/// Deserialize a boolean that may arrive as a JSON bool or as an HTML
/// checkbox value ("on", "true", "1"). Absent means false.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(b)) => Ok(b),
        Some(Flag::Text(s)) => Ok(matches!(s.as_str(), "on" | "true" | "1")),
    }
}

/// A logged set. Immutable once stored; ordering is by `created_at` with
/// ties broken by the store-assigned `id`.
#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i64,
    pub exercise: String,
    pub reps: i32,
    pub weight: f64,
    pub rpe: Option<i32>,
    pub tempo: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub is_failure: bool,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Workout {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise: row.get("exercise")?,
            reps: row.get("reps")?,
            weight: row.get("weight")?,
            rpe: row.get("rpe")?,
            tempo: row.get("tempo")?,
            muscle_group: row.get("muscle_group")?,
            equipment: row.get("equipment")?,
            is_failure: row.get("is_failure")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateWorkout {
    pub exercise: String,
    pub reps: i32,
    pub weight: f64,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub rpe: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub tempo: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub muscle_group: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub equipment: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_failure: bool,
}

impl CreateWorkout {
    pub fn validate(&self) -> Result<(), String> {
        if self.exercise.trim().is_empty() {
            return Err("exercise is required".to_string());
        }
        if self.reps < 1 {
            return Err("reps must be a positive integer".to_string());
        }
        if self.weight < 0.0 {
            return Err("weight must not be negative".to_string());
        }
        if let Some(rpe) = self.rpe {
            if !(1..=10).contains(&rpe) {
                return Err("rpe must be between 1 and 10".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateWorkout {
        CreateWorkout {
            exercise: "Bench Press".to_string(),
            reps: 8,
            weight: 60.0,
            rpe: Some(9),
            tempo: None,
            muscle_group: None,
            equipment: None,
            is_failure: true,
        }
    }

    #[test]
    fn test_validate_accepts_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_exercise() {
        let mut payload = valid_payload();
        payload.exercise = "  ".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_reps() {
        let mut payload = valid_payload();
        payload.reps = 0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let mut payload = valid_payload();
        payload.weight = -1.0;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rpe() {
        let mut payload = valid_payload();
        payload.rpe = Some(11);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_checkbox_flag_from_form() {
        let payload: CreateWorkout =
            serde_urlencoded_from_str("exercise=Squat&reps=5&weight=100&is_failure=on");
        assert!(payload.is_failure);
    }

    #[test]
    fn test_absent_flag_defaults_to_false() {
        let payload: CreateWorkout = serde_urlencoded_from_str("exercise=Squat&reps=5&weight=100");
        assert!(!payload.is_failure);
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let payload: CreateWorkout =
            serde_urlencoded_from_str("exercise=Squat&reps=5&weight=100&rpe=&tempo=");
        assert_eq!(payload.rpe, None);
        assert_eq!(payload.tempo, None);
    }

    #[test]
    fn test_json_bool_flag() {
        let payload: CreateWorkout = serde_json::from_str(
            r#"{"exercise":"Squat","reps":5,"weight":100.0,"rpe":9,"is_failure":true}"#,
        )
        .unwrap();
        assert!(payload.is_failure);
        assert_eq!(payload.rpe, Some(9));
    }

    fn serde_urlencoded_from_str(input: &str) -> CreateWorkout {
        serde_urlencoded::from_str(input).unwrap()
    }
}
