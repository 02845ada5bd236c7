// Summary statistics over a prediction series
use super::error::CoreError;
use super::prediction::PredictionRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub max_power: f64,
    pub min_power: f64,
    pub avg_power: f64,
    pub max_power_timestamp: String,
}

/// Compute max/min/average power and the timestamp of the peak.
///
/// The peak timestamp belongs to the first record whose power equals the
/// maximum exactly. Non-finite power values are rejected.
pub fn aggregate(series: &[PredictionRecord]) -> Result<Insights, CoreError> {
    let first = series.first().ok_or(CoreError::EmptySeries)?;

    if let Some(index) = series.iter().position(|r| !r.predicted_power.is_finite()) {
        return Err(CoreError::NonFinitePower { index });
    }

    let mut max_power = first.predicted_power;
    let mut min_power = first.predicted_power;
    let mut sum = 0.0;
    for record in series {
        max_power = max_power.max(record.predicted_power);
        min_power = min_power.min(record.predicted_power);
        sum += record.predicted_power;
    }
    // Rounding in the sum can push the mean just outside [min, max]
    let avg_power = (sum / series.len() as f64).clamp(min_power, max_power);

    let max_power_timestamp = series
        .iter()
        .find(|r| r.predicted_power == max_power)
        .map(|r| r.timestamp.clone())
        .unwrap_or_else(|| first.timestamp.clone());

    Ok(Insights {
        max_power,
        min_power,
        avg_power,
        max_power_timestamp,
    })
}
