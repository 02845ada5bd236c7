// 12-hour label formatting for prediction timestamps
use super::error::CoreError;

/// Convert a 24-hour `"H:MM"` / `"HH:MM"` time into `"h:MM AM|PM"`.
///
/// The minute token is passed through verbatim. Any tokens after the minute
/// (e.g. seconds in `"HH:MM:SS"`) are ignored.
pub fn format_12_hour(time: &str) -> Result<String, CoreError> {
    let mut parts = time.split(':');
    let hour = parts.next().unwrap_or_default();
    let minute = parts
        .next()
        .ok_or_else(|| CoreError::format(time, "expected ':' between hour and minute"))?;

    if hour.is_empty() || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::format(time, format!("hour '{}' is not an integer", hour)));
    }
    let hour: u32 = hour
        .parse()
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| CoreError::format(time, format!("hour '{}' is out of range", hour)))?;

    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{}:{} {}", display_hour, minute, period))
}

/// Time part of a `"<date> <time>"` timestamp.
pub fn time_component(timestamp: &str) -> Result<&str, CoreError> {
    let mut parts = timestamp.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_date), Some(time), None) => Ok(time),
        _ => Err(CoreError::format(
            timestamp,
            "expected a single space between date and time",
        )),
    }
}

pub fn label_for_timestamp(timestamp: &str) -> Result<String, CoreError> {
    format_12_hour(time_component(timestamp)?)
}
