use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use std::path::PathBuf;

use clima_core::{Config, DownloadReport, OpenMeteoArchive, download_history};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "clima", version, about = "Historical weather downloader")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download hourly history and write it as CSV.
    Fetch {
        /// Site latitude in decimal degrees.
        #[arg(long)]
        latitude: Option<f64>,

        /// Site longitude in decimal degrees.
        #[arg(long)]
        longitude: Option<f64>,

        /// First day of the range, YYYY-MM-DD.
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day of the range, YYYY-MM-DD; defaults to today.
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// IANA timezone for the returned timestamps.
        #[arg(long)]
        timezone: Option<String>,

        /// Destination CSV path.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Store default coordinates, start date and output path.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Fetch {
                latitude,
                longitude,
                start_date,
                end_date,
                timezone,
                output,
            } => {
                let mut request = Config::load()?.resolve();
                if let Some(latitude) = latitude {
                    request.latitude = latitude;
                }
                if let Some(longitude) = longitude {
                    request.longitude = longitude;
                }
                if let Some(start_date) = start_date {
                    request.start_date = start_date;
                }
                if let Some(end_date) = end_date {
                    request.end_date = end_date;
                }
                if let Some(timezone) = timezone {
                    request.timezone = timezone;
                }
                if let Some(output) = output {
                    request.output = output;
                }

                println!(
                    "Requesting hourly data from {} to {}...",
                    request.start_date, request.end_date
                );

                let provider = OpenMeteoArchive::new();
                let report = download_history(&provider, &request).await?;

                print_summary(&report);
            }
            Command::Configure => configure()?,
        }

        Ok(())
    }
}

fn print_summary(report: &DownloadReport) {
    println!("{} records saved to '{}'", report.rows, report.path.display());

    for row in &report.tail {
        println!(
            "  {}  {:>5.1} °C  {:>5.1} km/h  code {}",
            row.timestamp, row.temperature_c, row.wind_speed_kmh, row.weather_code
        );
    }
}

/// Interactive prompt loop; stores the answers as the new defaults.
fn configure() -> anyhow::Result<()> {
    let current = Config::load()?.resolve();

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .prompt()?;

    let start_date = CustomType::<NaiveDate>::new("Start date (YYYY-MM-DD):")
        .with_default(current.start_date)
        .prompt()?;

    let timezone = Text::new("Timezone:")
        .with_default(&current.timezone)
        .prompt()?;

    let output = Text::new("Output file:")
        .with_default(&current.output.to_string_lossy())
        .prompt()?;

    let config = Config {
        latitude: Some(latitude),
        longitude: Some(longitude),
        start_date: Some(start_date),
        timezone: Some(timezone),
        output: Some(PathBuf::from(output)),
    };
    config.save()?;

    println!("Defaults saved to '{}'", Config::config_file_path()?.display());

    Ok(())
}
