// Application layer - Use cases and ports
pub mod prediction_client;
pub mod results_service;
