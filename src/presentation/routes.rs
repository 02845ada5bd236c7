// Router wiring
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_results, get_results_summary, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/results", get(get_results))
        .route("/results/summary", get(get_results_summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::prediction_client::{FetchError, PredictionClient};
    use crate::application::results_service::ResultsService;
    use crate::domain::coordinates::Coordinates;
    use crate::domain::prediction::PredictionRecord;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Mutex;
    use std::time::Duration;
    use tower::ServiceExt;

    enum Reply {
        Records(Vec<PredictionRecord>),
        ServiceError(&'static str),
        Unreachable,
    }

    struct FakeClient {
        reply: Reply,
        seen: Mutex<Vec<Coordinates>>,
    }

    #[async_trait]
    impl PredictionClient for FakeClient {
        async fn fetch_predictions(&self, coords: &Coordinates) -> Result<Vec<PredictionRecord>, FetchError> {
            self.seen.lock().unwrap().push(coords.clone());
            match &self.reply {
                Reply::Records(records) => Ok(records.clone()),
                Reply::ServiceError(message) => Err(FetchError::Service {
                    status: 500,
                    message: message.to_string(),
                }),
                Reply::Unreachable => Err(FetchError::Transport("connection refused".to_string())),
            }
        }
    }

    fn app(reply: Reply) -> (Router, Arc<FakeClient>) {
        app_with_debounce(reply, None)
    }

    fn app_with_debounce(reply: Reply, debounce: Option<Duration>) -> (Router, Arc<FakeClient>) {
        let client = Arc::new(FakeClient {
            reply,
            seen: Mutex::new(Vec::new()),
        });
        let state = Arc::new(AppState {
            results_service: ResultsService::new(client.clone()),
            debounce,
        });
        (create_router(state), client)
    }

    fn sample_records() -> Vec<PredictionRecord> {
        vec![
            PredictionRecord::new("2024-01-01 00:00", 10.0, 1.5, 6.0, 70.0, 1015.0),
            PredictionRecord::new("2024-01-01 06:00", 50.0, 2.5, 9.0, 72.0, 1014.0),
            PredictionRecord::new("2024-01-01 12:00", 30.0, 4.0, 7.5, 68.0, 1013.0),
        ]
    }

    async fn send(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = app(Reply::Records(Vec::new()));
        let (status, body) = send(router, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_results_json() {
        let (router, client) = app(Reply::Records(sample_records()));
        let (status, body) = send(router, "/results?latitude=52.52&longitude=13.405").await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["currentClimate"]["timestamp"], "2024-01-01 00:00");
        assert_eq!(value["insights"]["maxPower"], 50.0);
        assert_eq!(value["insights"]["minPower"], 10.0);
        assert_eq!(value["insights"]["avgPower"], 30.0);
        assert_eq!(value["insights"]["maxPowerTimestamp"], "2024-01-01 06:00");
        assert_eq!(value["chart"]["labels"], serde_json::json!(["12:00 AM"]));

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].latitude, "52.52");
        assert_eq!(seen[0].longitude, "13.405");
    }

    #[tokio::test]
    async fn test_results_summary_text() {
        let (router, _) = app(Reply::Records(sample_records()));
        let (status, body) = send(router, "/results/summary?latitude=52.52&longitude=13.405").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Max Power: 50.00 kW at 6:00 AM"));
        assert!(body.contains("Average Power: 30.00 kW"));
    }

    #[tokio::test]
    async fn test_missing_coordinates_are_rejected_before_fetch() {
        let (router, client) = app(Reply::Records(sample_records()));
        let (status, body) = send(router, "/results?latitude=52.52").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"], "Please enter both latitude and longitude.");
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_coordinates() {
        let (router, _) = app(Reply::Records(sample_records()));
        let (status, _) = send(router, "/results?latitude=123&longitude=10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_series() {
        let (router, _) = app(Reply::Records(Vec::new()));
        let (status, body) = send(router, "/results?latitude=1&longitude=2").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("No predictions"));
    }

    #[tokio::test]
    async fn test_service_error_message() {
        let (router, _) = app(Reply::ServiceError("city not found"));
        let (status, body) = send(router, "/results?latitude=1&longitude=2").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"], "city not found");
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let (router, _) = app(Reply::Unreachable);
        let (status, body) = send(router, "/results/summary?latitude=1&longitude=2").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("Failed to fetch data. Please check your server."));
    }

    #[tokio::test]
    async fn test_malformed_query_string_is_json_error() {
        let (router, client) = app(Reply::Records(sample_records()));
        let (status, body) = send(router, "/results?latitude=1&latitude=2&longitude=3").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["error"].is_string());
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_delays_fetch() {
        let (router, client) = app_with_debounce(Reply::Records(sample_records()), Some(Duration::from_secs(3)));

        let request = tokio::spawn(send(router, "/results?latitude=52.52&longitude=13.405"));
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(client.seen.lock().unwrap().is_empty());

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(client.seen.lock().unwrap().is_empty());

        tokio::time::advance(Duration::from_millis(1)).await;
        let (status, _) = request.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(client.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_coordinates_skip_debounce() {
        let (router, client) = app_with_debounce(Reply::Records(sample_records()), Some(Duration::from_secs(3)));

        let started = tokio::time::Instant::now();
        let (status, _) = send(router, "/results?latitude=&longitude=13.405").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(started.elapsed() < Duration::from_secs(3));
        assert!(client.seen.lock().unwrap().is_empty());
    }
}
