use async_trait::async_trait;
use std::fmt::Debug;

use crate::{config::ArchiveRequest, error::HistoryError, model::ArchiveResponse};

pub mod open_meteo;

pub use open_meteo::OpenMeteoArchive;

/// A source of hourly historical observations.
///
/// The pipeline only talks to this trait, so tests can swap in a mock
/// server-backed client or a canned implementation.
#[async_trait]
pub trait HistoryProvider: Send + Sync + Debug {
    async fn fetch_hourly(
        &self,
        request: &ArchiveRequest,
    ) -> Result<ArchiveResponse, HistoryError>;
}
