// HTTP implementation of the prediction client
use crate::application::prediction_client::{FetchError, PredictionClient, DEFAULT_SERVICE_MESSAGE};
use crate::domain::coordinates::Coordinates;
use crate::domain::prediction::PredictionRecord;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    client: reqwest::Client,
    base_url: String,
}

/// Success body is `{"data": [...]}`, failures carry `{"error": "..."}`
#[derive(Debug, Deserialize)]
struct PredictionEnvelope {
    #[serde(default)]
    data: Option<Vec<PredictionRecord>>,
    #[serde(default)]
    error: Option<String>,
}

impl HttpPredictionClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_predict_url(&self, coords: &Coordinates) -> String {
        format!(
            "{}/predict?latitude={}&longitude={}",
            self.base_url,
            urlencoding::encode(&coords.latitude),
            urlencoding::encode(&coords.longitude)
        )
    }
}

/// Interpret a prediction service response body given its HTTP status.
fn parse_prediction_body(status: u16, body: &str) -> Result<Vec<PredictionRecord>, FetchError> {
    let success = (200..300).contains(&status);

    let envelope = match serde_json::from_str::<PredictionEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(e) if success => return Err(FetchError::Decode(e.to_string())),
        Err(_) => {
            return Err(FetchError::Service {
                status,
                message: DEFAULT_SERVICE_MESSAGE.to_string(),
            });
        }
    };

    if !success {
        return Err(FetchError::Service {
            status,
            message: envelope
                .error
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_MESSAGE.to_string()),
        });
    }

    envelope
        .data
        .ok_or_else(|| FetchError::Decode("response has no 'data' field".to_string()))
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn fetch_predictions(&self, coords: &Coordinates) -> Result<Vec<PredictionRecord>, FetchError> {
        let url = self.build_predict_url(coords);
        tracing::debug!("Requesting predictions: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!("Prediction service responded with status {}", status);
        }

        parse_prediction_body(status, &body)
    }
}
