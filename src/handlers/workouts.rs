use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::error::{AppError, Result};
use crate::middleware::{FormOrJson, HxRequest};
use crate::models::{CreateWorkout, Workout};
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct WorkoutsState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Template)]
#[template(path = "workouts/created.html")]
struct WorkoutCreatedTemplate {
    workout: Workout,
}

#[derive(Template)]
#[template(path = "workouts/list.html")]
struct WorkoutsListTemplate {
    workouts: Vec<Workout>,
}

pub async fn create(
    State(state): State<WorkoutsState>,
    HxRequest(is_htmx): HxRequest,
    FormOrJson(payload): FormOrJson<CreateWorkout>,
) -> Result<Response> {
    payload.validate().map_err(AppError::Validation)?;

    let workout = state.workout_repo.create(payload).await?;

    tracing::debug!(exercise = %workout.exercise, id = workout.id, "logged workout");

    if is_htmx {
        let template = WorkoutCreatedTemplate { workout };
        let html = template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok((StatusCode::CREATED, Html(html)).into_response())
    } else {
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }
}

pub async fn list(
    State(state): State<WorkoutsState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response> {
    let workouts = state.workout_repo.find_all().await?;

    if is_htmx {
        let template = WorkoutsListTemplate { workouts };
        let html = template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(workouts).into_response())
    }
}
