use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::{AppError, Result};
use crate::middleware::FormOrJson;
use crate::models::{BodyMetrics, CreateBodyMetrics};
use crate::repositories::MetricsRepository;

#[derive(Clone)]
pub struct MetricsState {
    pub metrics_repo: MetricsRepository,
}

pub async fn create(
    State(state): State<MetricsState>,
    FormOrJson(payload): FormOrJson<CreateBodyMetrics>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(AppError::Validation)?;

    state.metrics_repo.create(payload).await?;

    Ok(StatusCode::CREATED)
}

/// Oldest first, ready for charting.
pub async fn list(State(state): State<MetricsState>) -> Result<Json<Vec<BodyMetrics>>> {
    let metrics = state.metrics_repo.find_all().await?;
    Ok(Json(metrics))
}
