// Domain layer - Pure results-processing pipeline
pub mod coordinates;
pub mod error;
pub mod insights;
pub mod prediction;
pub mod results;
pub mod series;
pub mod time_format;
