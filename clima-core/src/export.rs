use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::{
    error::HistoryError,
    model::{HourlyRecord, OUTPUT_COLUMNS},
};

/// Result of a completed write.
#[derive(Debug, Clone)]
pub struct WriteReport {
    pub rows: usize,
    pub path: PathBuf,
}

/// Serialize rows to `path` as UTF-8 CSV with a header row.
///
/// The table is written to a temporary file next to the destination and then
/// renamed over it, so the previous file stays intact until the new one is
/// complete and a crash never leaves a partial file. Empty input still
/// produces the header row.
pub fn write_csv(rows: &[HourlyRecord], path: &Path) -> Result<WriteReport, HistoryError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let tmp = NamedTempFile::new_in(&dir)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(tmp.as_file());

    // Explicit header record so an empty table still gets one.
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    drop(writer);

    tmp.persist(path).map_err(|e| HistoryError::Io(e.error))?;

    Ok(WriteReport {
        rows: rows.len(),
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn record(timestamp: &str, wind_speed_kmh: f64) -> HourlyRecord {
        HourlyRecord {
            timestamp: timestamp.to_string(),
            temperature_c: 18.5,
            humidity_pct: 55.0,
            dewpoint_c: 9.1,
            pressure_hpa: 1015.2,
            precipitation_mm: 0.0,
            wind_speed_kmh,
            wind_gusts_kmh: 45.0,
            wind_direction_deg: 225.0,
            weather_code: 3,
        }
    }

    const HEADER: &str = "fecha_hora,temperatura_C,humedad_%,punto_rocio_C,presion_hPa,\
                          precipitacion_mm,viento_velocidad_kmh,viento_rafaga_kmh,\
                          viento_direccion_°,codigo_clima_wmo";

    #[test]
    fn header_matches_fixed_column_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("salida.csv");

        write_csv(&[record("2024-01-01T00:00", 36.0)], &path).expect("write should succeed");

        let contents = fs::read_to_string(&path).expect("file should exist");
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some(HEADER));
    }

    #[test]
    fn rows_serialize_in_input_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("salida.csv");

        let rows = vec![
            record("2024-01-01T00:00", 36.0),
            record("2024-01-01T01:00", 18.0),
        ];
        let report = write_csv(&rows, &path).expect("write should succeed");
        assert_eq!(report.rows, 2);
        assert_eq!(report.path, path);

        let contents = fs::read_to_string(&path).expect("file should exist");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2024-01-01T00:00,"));
        assert!(lines[2].starts_with("2024-01-01T01:00,"));
    }

    #[test]
    fn empty_input_writes_header_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("salida.csv");

        let report = write_csv(&[], &path).expect("write should succeed");
        assert_eq!(report.rows, 0);

        let contents = fs::read_to_string(&path).expect("file should exist");
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(contents.lines().next(), Some(HEADER));
    }

    #[test]
    fn existing_file_is_fully_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("salida.csv");
        fs::write(&path, "stale,content\n1,2\n3,4\n").expect("seed file");

        write_csv(&[record("2024-01-01T00:00", 36.0)], &path).expect("write should succeed");

        let contents = fs::read_to_string(&path).expect("file should exist");
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn bare_filename_writes_into_current_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let prev = std::env::current_dir().expect("cwd");
        std::env::set_current_dir(dir.path()).expect("chdir");

        let result = write_csv(&[record("2024-01-01T00:00", 36.0)], Path::new("salida.csv"));

        std::env::set_current_dir(prev).expect("chdir back");
        assert!(result.is_ok());
        assert!(dir.path().join("salida.csv").exists());
    }

    #[test]
    fn wind_values_keep_full_precision() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("salida.csv");

        write_csv(&[record("2024-01-01T00:00", 10.0 * 3.6)], &path).expect("write should succeed");

        let contents = fs::read_to_string(&path).expect("file should exist");
        let data = contents.lines().nth(1).expect("data row");
        let wind: f64 = data
            .split(',')
            .nth(6)
            .expect("wind column")
            .parse()
            .expect("numeric wind value");
        assert_eq!(wind, 36.0);
    }
}
