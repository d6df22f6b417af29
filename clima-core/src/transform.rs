use chrono::NaiveDateTime;

use crate::{
    error::HistoryError,
    model::{ArchiveResponse, HourlyRecord, HourlySeries},
};

/// m/s to km/h.
const MS_TO_KMH: f64 = 3.6;

/// Turn the hourly block into output rows, in API order.
///
/// Wind speed and gusts are converted to km/h; everything else passes
/// through unchanged. Timestamps are normalized to minute precision.
pub fn hourly_rows(response: &ArchiveResponse) -> Result<Vec<HourlyRecord>, HistoryError> {
    let hourly = &response.hourly;
    check_lengths(hourly)?;

    let mut rows = Vec::with_capacity(hourly.len());
    for i in 0..hourly.len() {
        rows.push(HourlyRecord {
            timestamp: normalize_timestamp(&hourly.time[i])?,
            temperature_c: hourly.temperature_2m[i],
            humidity_pct: hourly.relative_humidity_2m[i],
            dewpoint_c: hourly.dewpoint_2m[i],
            pressure_hpa: hourly.pressure_msl[i],
            precipitation_mm: hourly.precipitation[i],
            wind_speed_kmh: hourly.wind_speed_10m[i] * MS_TO_KMH,
            wind_gusts_kmh: hourly.wind_gusts_10m[i] * MS_TO_KMH,
            wind_direction_deg: hourly.wind_direction_10m[i],
            weather_code: hourly.weathercode[i],
        });
    }

    Ok(rows)
}

/// Every variable array must line up with the time axis.
fn check_lengths(hourly: &HourlySeries) -> Result<(), HistoryError> {
    let expected = hourly.len();
    let columns = [
        ("temperature_2m", hourly.temperature_2m.len()),
        ("relative_humidity_2m", hourly.relative_humidity_2m.len()),
        ("dewpoint_2m", hourly.dewpoint_2m.len()),
        ("pressure_msl", hourly.pressure_msl.len()),
        ("precipitation", hourly.precipitation.len()),
        ("wind_speed_10m", hourly.wind_speed_10m.len()),
        ("wind_gusts_10m", hourly.wind_gusts_10m.len()),
        ("wind_direction_10m", hourly.wind_direction_10m.len()),
        ("weathercode", hourly.weathercode.len()),
    ];

    for (name, len) in columns {
        if len != expected {
            return Err(HistoryError::Shape(format!(
                "{name} has {len} values, expected {expected}"
            )));
        }
    }

    Ok(())
}

/// Reformat an archive timestamp to `YYYY-MM-DDTHH:MM`.
///
/// The archive serves minute precision; second precision is accepted too
/// and truncated.
fn normalize_timestamp(raw: &str) -> Result<String, HistoryError> {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| HistoryError::Shape(format!("unparseable timestamp '{raw}'")))?;

    Ok(parsed.format("%Y-%m-%dT%H:%M").to_string())
}
