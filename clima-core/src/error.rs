use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the download pipeline.
///
/// Each stage reports its own variant, so callers can tell a rejected HTTP
/// request apart from transport, decode, transform and write failures.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The archive answered with a non-success status.
    #[error("archive request failed with status {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// The request never produced a usable response.
    #[error("failed to reach the archive endpoint: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON shape the transformer expects.
    #[error("failed to decode archive response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The hourly block is internally inconsistent.
    #[error("malformed hourly block: {0}")]
    Shape(String),

    /// CSV serialization failed.
    #[error("failed to serialize output: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be written.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}
