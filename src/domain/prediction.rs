// Prediction record as returned by the prediction service
use serde::{Deserialize, Serialize};

/// One entry of the predicted series. Field names match the service's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// `"YYYY-MM-DD HH:MM"`, date and time separated by a single space
    pub timestamp: String,
    /// kW
    pub predicted_power: f64,
    /// °C
    pub temperature: f64,
    /// m/s
    pub wind_speed: f64,
    /// %
    pub humidity: f64,
    /// hPa
    pub pressure: f64,
}

impl PredictionRecord {
    pub fn new(
        timestamp: impl Into<String>,
        predicted_power: f64,
        temperature: f64,
        wind_speed: f64,
        humidity: f64,
        pressure: f64,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            predicted_power,
            temperature,
            wind_speed,
            humidity,
            pressure,
        }
    }
}
