use serde::Serialize;

/// Next-session recommendation. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverloadTarget {
    pub weight: f64,
    pub reps: i32,
    pub message: String,
}
