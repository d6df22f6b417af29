use std::path::PathBuf;

use crate::{
    config::ArchiveRequest, error::HistoryError, export, model::HourlyRecord,
    provider::HistoryProvider, transform,
};

/// Outcome of a completed download, for the caller's console summary.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub rows: usize,
    pub path: PathBuf,
    /// Last rows of the table, newest last. At most three.
    pub tail: Vec<HourlyRecord>,
}

/// Run the whole pipeline: fetch, transform, write.
///
/// The output path is not touched unless fetch and transform both succeed,
/// and the write itself replaces any previous file atomically, so a failed
/// run never leaves a partial or missing file behind.
pub async fn download_history(
    provider: &dyn HistoryProvider,
    request: &ArchiveRequest,
) -> Result<DownloadReport, HistoryError> {
    let response = provider.fetch_hourly(request).await?;
    let rows = transform::hourly_rows(&response)?;
    let report = export::write_csv(&rows, &request.output)?;

    let tail = rows[rows.len().saturating_sub(3)..].to_vec();

    Ok(DownloadReport {
        rows: report.rows,
        path: report.path,
        tail,
    })
}
