use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::ArchiveRequest,
    error::HistoryError,
    model::{ArchiveResponse, HOURLY_VARIABLES},
};

use super::HistoryProvider;

/// Public archive endpoint.
pub const ARCHIVE_BASE_URL: &str = "https://archive-api.open-meteo.com/v1";

/// Client for the Open-Meteo historical archive.
///
/// One GET per call, no retries; the archive's own rate limiting is not
/// handled beyond reporting the failed status.
#[derive(Debug, Clone)]
pub struct OpenMeteoArchive {
    base_url: String,
    http: Client,
}

impl OpenMeteoArchive {
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, e.g. a mock server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn archive_url(&self) -> String {
        format!("{}/archive", self.base_url)
    }
}

impl Default for OpenMeteoArchive {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryProvider for OpenMeteoArchive {
    async fn fetch_hourly(
        &self,
        request: &ArchiveRequest,
    ) -> Result<ArchiveResponse, HistoryError> {
        let url = self.archive_url();

        debug!(
            url = %url,
            start = %request.start_date,
            end = %request.end_date,
            "requesting hourly archive"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", request.latitude.to_string()),
                ("longitude", request.longitude.to_string()),
                ("start_date", request.start_date.to_string()),
                ("end_date", request.end_date.to_string()),
                ("hourly", HOURLY_VARIABLES.join(",")),
                ("timezone", request.timezone.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(HistoryError::Http {
                status,
                body: truncate_body(&body),
            });
        }

        let parsed: ArchiveResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
