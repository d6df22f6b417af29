use serde::{Deserialize, Serialize};

/// Hourly variables requested from the archive, in request order.
pub const HOURLY_VARIABLES: [&str; 9] = [
    "temperature_2m",
    "relative_humidity_2m",
    "dewpoint_2m",
    "pressure_msl",
    "precipitation",
    "wind_speed_10m",
    "wind_gusts_10m",
    "wind_direction_10m",
    "weathercode",
];

/// Output CSV header, in column order.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "fecha_hora",
    "temperatura_C",
    "humedad_%",
    "punto_rocio_C",
    "presion_hPa",
    "precipitacion_mm",
    "viento_velocidad_kmh",
    "viento_rafaga_kmh",
    "viento_direccion_°",
    "codigo_clima_wmo",
];

/// Raw archive response. Only the hourly block is read; the echo of the
/// request coordinates and the units block are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveResponse {
    pub hourly: HourlySeries,
}

/// The hourly block as served: parallel arrays, one entry per hour.
///
/// Wind fields are in m/s here; the transformer converts them.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub dewpoint_2m: Vec<f64>,
    pub pressure_msl: Vec<f64>,
    pub precipitation: Vec<f64>,
    pub wind_speed_10m: Vec<f64>,
    pub wind_gusts_10m: Vec<f64>,
    pub wind_direction_10m: Vec<f64>,
    pub weathercode: Vec<i64>,
}

impl HourlySeries {
    /// Number of hours in the block, taken from the time axis.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// One output row. The serde renames are the CSV header names and the field
/// order is the column order, so serializing a record yields the final table
/// shape directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    /// Local time, minute precision, no zone suffix.
    #[serde(rename = "fecha_hora")]
    pub timestamp: String,
    #[serde(rename = "temperatura_C")]
    pub temperature_c: f64,
    #[serde(rename = "humedad_%")]
    pub humidity_pct: f64,
    #[serde(rename = "punto_rocio_C")]
    pub dewpoint_c: f64,
    #[serde(rename = "presion_hPa")]
    pub pressure_hpa: f64,
    #[serde(rename = "precipitacion_mm")]
    pub precipitation_mm: f64,
    /// Converted from the archive's m/s.
    #[serde(rename = "viento_velocidad_kmh")]
    pub wind_speed_kmh: f64,
    /// Converted from the archive's m/s.
    #[serde(rename = "viento_rafaga_kmh")]
    pub wind_gusts_kmh: f64,
    #[serde(rename = "viento_direccion_°")]
    pub wind_direction_deg: f64,
    /// WMO weather code.
    #[serde(rename = "codigo_clima_wmo")]
    pub weather_code: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_response_deserializes_hourly_block() {
        let body = serde_json::json!({
            "latitude": 19.5,
            "longitude": -99.125,
            "hourly_units": { "time": "iso8601" },
            "hourly": {
                "time": ["2024-01-01T00:00"],
                "temperature_2m": [18.5],
                "relative_humidity_2m": [55.0],
                "dewpoint_2m": [9.1],
                "pressure_msl": [1015.2],
                "precipitation": [0.0],
                "wind_speed_10m": [10.0],
                "wind_gusts_10m": [12.5],
                "wind_direction_10m": [225.0],
                "weathercode": [3]
            }
        });

        let parsed: ArchiveResponse =
            serde_json::from_value(body).expect("hourly block should deserialize");
        assert_eq!(parsed.hourly.len(), 1);
        assert!(!parsed.hourly.is_empty());
        assert_eq!(parsed.hourly.weathercode, vec![3]);
    }

    #[test]
    fn missing_variable_is_a_decode_error() {
        let body = serde_json::json!({
            "hourly": {
                "time": ["2024-01-01T00:00"],
                "temperature_2m": [18.5]
            }
        });

        assert!(serde_json::from_value::<ArchiveResponse>(body).is_err());
    }

    #[test]
    fn variable_list_matches_output_columns() {
        // One output column per requested variable, plus the time axis.
        assert_eq!(HOURLY_VARIABLES.len() + 1, OUTPUT_COLUMNS.len());
        assert_eq!(OUTPUT_COLUMNS[0], "fecha_hora");
    }
}
