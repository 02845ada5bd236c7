// Results service - Use case for turning a location into a results view
use crate::application::prediction_client::{FetchError, PredictionClient};
use crate::domain::coordinates::Coordinates;
use crate::domain::error::CoreError;
use crate::domain::results::ResultsView;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Clone)]
pub struct ResultsService {
    client: Arc<dyn PredictionClient>,
}

impl ResultsService {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self { client }
    }

    pub async fn get_results(&self, coords: &Coordinates) -> Result<ResultsView, ResultsError> {
        let series = self.client.fetch_predictions(coords).await?;
        tracing::debug!(
            "Received {} prediction records for ({}, {})",
            series.len(),
            coords.latitude,
            coords.longitude
        );

        Ok(ResultsView::build(&series)?)
    }
}
