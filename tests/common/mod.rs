#![allow(dead_code)] // Not every helper is used by every test binary

use axum::{body::Body, response::Response, Router};
use http_body_util::BodyExt;

use hitlog::db::{create_memory_pool, DbPool};
use hitlog::handlers::{metrics, target, workouts};
use hitlog::migrations::run_migrations_for_tests;
use hitlog::models::{CreateWorkout, Workout};
use hitlog::repositories::{MetricsRepository, WorkoutRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let workout_repo = WorkoutRepository::new(pool.clone());
    let metrics_repo = MetricsRepository::new(pool.clone());

    let workouts_state = workouts::WorkoutsState {
        workout_repo: workout_repo.clone(),
    };
    let target_state = target::TargetState { workout_repo };
    let metrics_state = metrics::MetricsState { metrics_repo };

    hitlog::routes::create_router(workouts_state, target_state, metrics_state)
}

pub async fn create_test_workout(
    pool: &DbPool,
    exercise: &str,
    reps: i32,
    weight: f64,
    is_failure: bool,
) -> Workout {
    let repo = WorkoutRepository::new(pool.clone());
    repo.create(CreateWorkout {
        exercise: exercise.to_string(),
        reps,
        weight,
        rpe: None,
        tempo: None,
        muscle_group: None,
        equipment: None,
        is_failure,
    })
    .await
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
