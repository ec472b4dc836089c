use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::middleware::HxRequest;
use crate::models::OverloadTarget;
use crate::overload;
use crate::repositories::WorkoutRepository;

#[derive(Clone)]
pub struct TargetState {
    pub workout_repo: WorkoutRepository,
}

#[derive(Deserialize)]
pub struct TargetQuery {
    exercise: String,
}

#[derive(Template)]
#[template(path = "target.html")]
struct TargetTemplate {
    exercise: String,
    target: OverloadTarget,
}

/// Compute the next-session target for an exercise. An exercise with no
/// history is not an error: the recommender reports a fresh start.
pub async fn show(
    State(state): State<TargetState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<TargetQuery>,
) -> Result<Response> {
    let last = state.workout_repo.find_most_recent(&query.exercise).await?;
    let target = overload::recommend(last.as_ref());

    if is_htmx {
        let template = TargetTemplate {
            exercise: query.exercise,
            target,
        };
        let html = template
            .render()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Html(html).into_response())
    } else {
        Ok(Json(target).into_response())
    }
}
