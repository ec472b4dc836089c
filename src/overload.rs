//! Progressive-overload target computation.
//!
//! Encodes a simplified HIT double-progression rule: add load only once a
//! set taken to failure reaches the rep threshold, otherwise add a rep.

use crate::models::{OverloadTarget, Workout};

/// Load added once the rep threshold is reached at failure, in kilograms.
pub const WEIGHT_INCREMENT_KG: f64 = 2.5;

/// Reps a failure set must reach before weight goes up.
pub const FAILURE_REP_THRESHOLD: i32 = 8;

/// Compute the next-session target from the most recent log entry for an
/// exercise. `None` means the exercise has never been logged; that is a
/// fresh start, not an error.
pub fn recommend(last: Option<&Workout>) -> OverloadTarget {
    let Some(prior) = last else {
        return OverloadTarget {
            weight: 0.0,
            reps: 0,
            message: "New Exercise".to_string(),
        };
    };

    let mut weight = prior.weight;
    let mut reps = prior.reps;

    if prior.is_failure && prior.reps >= FAILURE_REP_THRESHOLD {
        weight += WEIGHT_INCREMENT_KG;
    } else {
        reps += 1;
    }

    OverloadTarget {
        weight,
        reps,
        message: format!("Last: {:.1}kg x {}", prior.weight, prior.reps),
    }
}
