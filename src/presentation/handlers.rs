// HTTP request handlers
use crate::application::results_service::ResultsError;
use crate::domain::coordinates::Coordinates;
use crate::domain::results::ResultsView;
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use crate::presentation::summary::render_summary;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Results view for a location as JSON
pub async fn get_results(
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResultsView>, ApiError> {
    let Query(query) = query?;
    let view = fetch_view(&query, &state).await?;
    Ok(Json(view))
}

/// Results view for a location as plain text
pub async fn get_results_summary(
    query: Result<Query<CoordinatesQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<String, ApiError> {
    let Query(query) = query?;
    let view = fetch_view(&query, &state).await?;
    render_summary(&view).map_err(|e| ApiError::from(ResultsError::Core(e)))
}

async fn fetch_view(query: &CoordinatesQuery, state: &AppState) -> Result<ResultsView, ApiError> {
    let coords = Coordinates::parse(query.latitude.as_deref(), query.longitude.as_deref())?;

    if let Some(delay) = state.debounce {
        tokio::time::sleep(delay).await;
    }

    state.results_service.get_results(&coords).await.map_err(|e| {
        tracing::error!(
            "Error building results for ({}, {}): {}",
            coords.latitude,
            coords.longitude,
            e
        );
        ApiError::from(e)
    })
}
