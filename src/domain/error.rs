// Errors raised by the results-processing core
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("cannot compute insights over an empty series")]
    EmptySeries,
    #[error("malformed time '{input}': {reason}")]
    Format { input: String, reason: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("predicted_power at index {index} is not a finite number")]
    NonFinitePower { index: usize },
}

impl CoreError {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        CoreError::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
