// Client trait for the remote prediction service
use crate::domain::coordinates::Coordinates;
use crate::domain::prediction::PredictionRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Message shown when the service fails without saying why
pub const DEFAULT_SERVICE_MESSAGE: &str = "Unable to fetch predictions.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("prediction request failed: {0}")]
    Transport(String),
    #[error("prediction service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("could not decode prediction response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Fetch the predicted series for a location, in the order the service returns it
    async fn fetch_predictions(&self, coords: &Coordinates) -> Result<Vec<PredictionRecord>, FetchError>;
}
