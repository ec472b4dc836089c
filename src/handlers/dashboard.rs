use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::{AppError, Result};

#[derive(Template)]
#[template(path = "index.html")]
struct DashboardTemplate;

/// The full dashboard page. All data on it is loaded by the hypermedia
/// frontend through the fragment endpoints.
pub async fn index() -> Result<Response> {
    let template = DashboardTemplate;

    Ok(Html(template.render().map_err(|e| AppError::Internal(e.to_string()))?).into_response())
}
