use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{dashboard, health, metrics, target, workouts};

pub fn create_router(
    workouts_state: workouts::WorkoutsState,
    target_state: target::TargetState,
    metrics_state: metrics::MetricsState,
) -> Router {
    Router::new()
        // Dashboard and liveness
        .route("/", get(dashboard::index))
        .route("/health", get(health::health_check))
        // Workout log
        .route("/api/v1/workout", post(workouts::create))
        .route("/api/v1/workouts", get(workouts::list))
        .with_state(workouts_state)
        // Overload target
        .route("/api/v1/target", get(target::show))
        .with_state(target_state)
        // Body metrics
        .route("/api/v1/metrics", post(metrics::create).get(metrics::list))
        .with_state(metrics_state)
}
