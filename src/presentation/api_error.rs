// Mapping of pipeline and fetch failures onto HTTP responses
use crate::application::prediction_client::FetchError;
use crate::application::results_service::ResultsError;
use crate::domain::coordinates::CoordinateError;
use crate::domain::error::CoreError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please check your server.";
const EMPTY_SERIES_MESSAGE: &str = "No predictions were returned for this location.";
const MALFORMED_DATA_MESSAGE: &str = "The prediction service returned malformed data.";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<CoordinateError> for ApiError {
    fn from(err: CoordinateError) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl From<ResultsError> for ApiError {
    fn from(err: ResultsError) -> Self {
        match err {
            ResultsError::Fetch(FetchError::Service { message, .. }) => {
                ApiError::new(StatusCode::BAD_GATEWAY, message)
            }
            ResultsError::Fetch(FetchError::Transport(_) | FetchError::Decode(_)) => {
                ApiError::new(StatusCode::BAD_GATEWAY, FETCH_FAILED_MESSAGE)
            }
            ResultsError::Core(CoreError::EmptySeries) => {
                ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, EMPTY_SERIES_MESSAGE)
            }
            ResultsError::Core(CoreError::Format { .. } | CoreError::NonFinitePower { .. }) => {
                ApiError::new(StatusCode::BAD_GATEWAY, MALFORMED_DATA_MESSAGE)
            }
            ResultsError::Core(CoreError::InvalidArgument(msg)) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
