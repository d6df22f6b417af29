use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Built-in site defaults: Gustavo A. Madero, CDMX.
pub const DEFAULT_LATITUDE: f64 = 19.5047;
pub const DEFAULT_LONGITUDE: f64 = -99.1469;
pub const DEFAULT_TIMEZONE: &str = "America/Mexico_City";
pub const DEFAULT_OUTPUT: &str = "historico_clima_2024-2025_CDMX2.csv";

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid calendar date")
}

/// Parameters for one archive download.
///
/// Coordinate ranges and date ordering are deliberately not validated here;
/// out-of-range values come back from the archive as HTTP 4xx.
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    /// Last day of the range, inclusive.
    pub end_date: NaiveDate,
    /// IANA identifier; timestamps come back in this zone's local time.
    pub timezone: String,
    pub output: PathBuf,
}

impl Default for ArchiveRequest {
    fn default() -> Self {
        Config::default().resolve()
    }
}

/// Defaults stored on disk. Every field is optional; missing values fall
/// back to the built-in CDMX defaults when resolving.
///
/// Example TOML:
/// latitude = 19.5047
/// longitude = -99.1469
/// output = "historico.csv"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub timezone: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Resolve into request parameters, filling gaps with the built-in
    /// defaults. The end date is always the current local date.
    pub fn resolve(&self) -> ArchiveRequest {
        ArchiveRequest {
            latitude: self.latitude.unwrap_or(DEFAULT_LATITUDE),
            longitude: self.longitude.unwrap_or(DEFAULT_LONGITUDE),
            start_date: self.start_date.unwrap_or_else(default_start_date),
            end_date: Local::now().date_naive(),
            timezone: self
                .timezone
                .clone()
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            output: self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "clima", "clima-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
