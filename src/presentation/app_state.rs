// Application state for HTTP handlers
use crate::application::results_service::ResultsService;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub results_service: ResultsService,
    /// Optional wait before fetching predictions (UI-boundary debounce)
    pub debounce: Option<Duration>,
}
