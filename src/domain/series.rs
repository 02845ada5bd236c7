// Series decimation for chart legibility
use super::error::CoreError;

/// Stride used when reducing a prediction series for the chart.
pub const CHART_STRIDE: usize = 6;

/// Keep every `stride`-th element (indices 0, stride, 2·stride, ...), in order.
pub fn decimate<T: Clone>(series: &[T], stride: usize) -> Result<Vec<T>, CoreError> {
    if stride == 0 {
        return Err(CoreError::InvalidArgument(
            "decimation stride must be positive".to_string(),
        ));
    }

    Ok(series.iter().step_by(stride).cloned().collect())
}
