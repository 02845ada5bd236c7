// Plain-text rendering of a results view
use crate::domain::error::CoreError;
use crate::domain::results::ResultsView;
use crate::domain::time_format::label_for_timestamp;
use std::fmt;

struct Summary<'a> {
    view: &'a ResultsView,
    peak_time: String,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let climate = &self.view.current_climate;
        let insights = &self.view.insights;

        writeln!(f, "Prediction Results")?;
        writeln!(f)?;
        writeln!(f, "Current Climate")?;
        writeln!(f, "  Temperature: {:.2} °C", climate.temperature)?;
        writeln!(f, "  Wind Speed: {:.2} m/s", climate.wind_speed)?;
        writeln!(f, "  Humidity: {} %", climate.humidity)?;
        writeln!(f, "  Pressure: {} hPa", climate.pressure)?;
        writeln!(f)?;
        writeln!(f, "Max Power: {:.2} kW at {}", insights.max_power, self.peak_time)?;
        writeln!(f, "Min Power: {:.2} kW", insights.min_power)?;
        writeln!(f, "Average Power: {:.2} kW", insights.avg_power)?;
        writeln!(f)?;
        writeln!(f, "Chart")?;
        for (label, value) in self.view.chart.labels.iter().zip(&self.view.chart.values) {
            writeln!(f, "  {:>8}  {:.2} kW", label, value)?;
        }
        Ok(())
    }
}

pub fn render_summary(view: &ResultsView) -> Result<String, CoreError> {
    let peak_time = label_for_timestamp(&view.insights.max_power_timestamp)?;
    Ok(Summary { view, peak_time }.to_string())
}
