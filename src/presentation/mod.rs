// Presentation layer - HTTP surface for the rendering layer
pub mod api_error;
pub mod app_state;
pub mod handlers;
pub mod routes;
pub mod summary;
