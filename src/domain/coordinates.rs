// Coordinates supplied by the user
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Please enter both latitude and longitude.")]
    Missing,
    #[error("{field} '{value}' is not a decimal number")]
    Invalid { field: &'static str, value: String },
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: String },
}

/// Latitude/longitude pair in decimal degrees, kept as the strings the user
/// entered so they are forwarded to the prediction service unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Result<Self, CoordinateError> {
        let latitude = latitude.map(str::trim).unwrap_or_default();
        let longitude = longitude.map(str::trim).unwrap_or_default();

        if latitude.is_empty() || longitude.is_empty() {
            return Err(CoordinateError::Missing);
        }

        Self::check_degrees("latitude", latitude, 90.0)?;
        Self::check_degrees("longitude", longitude, 180.0)?;

        Ok(Self {
            latitude: latitude.to_string(),
            longitude: longitude.to_string(),
        })
    }

    fn check_degrees(field: &'static str, value: &str, limit: f64) -> Result<(), CoordinateError> {
        let degrees: f64 = value.parse().map_err(|_| CoordinateError::Invalid {
            field,
            value: value.to_string(),
        })?;

        if !degrees.is_finite() {
            return Err(CoordinateError::Invalid {
                field,
                value: value.to_string(),
            });
        }
        if degrees.abs() > limit {
            return Err(CoordinateError::OutOfRange {
                field,
                value: value.to_string(),
            });
        }
        Ok(())
    }
}
