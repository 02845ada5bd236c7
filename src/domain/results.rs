// Results view model - what the rendering layer consumes
use super::error::CoreError;
use super::insights::{aggregate, Insights};
use super::prediction::PredictionRecord;
use super::series::{decimate, CHART_STRIDE};
use super::time_format::label_for_timestamp;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub current_climate: PredictionRecord,
    pub insights: Insights,
    pub chart: ChartSeries,
}

impl ResultsView {
    /// Build the view from a chronologically ordered, non-empty series.
    pub fn build(series: &[PredictionRecord]) -> Result<Self, CoreError> {
        let insights = aggregate(series)?;
        let current_climate = series.first().cloned().ok_or(CoreError::EmptySeries)?;
        let chart = ChartSeries::from_records(series, CHART_STRIDE)?;

        Ok(Self {
            current_climate,
            insights,
            chart,
        })
    }
}

impl ChartSeries {
    pub fn from_records(series: &[PredictionRecord], stride: usize) -> Result<Self, CoreError> {
        let reduced = decimate(series, stride)?;

        let labels = reduced
            .iter()
            .map(|r| label_for_timestamp(&r.timestamp))
            .collect::<Result<Vec<_>, _>>()?;
        let values = reduced.iter().map(|r| r.predicted_power).collect();

        Ok(Self { labels, values })
    }
}
