use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn catalog bytes into titles. Never retried.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog has no header row")]
    MissingHeader,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to obtain catalog bytes. Eligible for retry.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    /// Every attempt failed at the transport layer. The display text is the
    /// terminal message shown to the user.
    #[error("Failed to load data after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] CatalogError),
}

impl FetchError {
    /// Text surfaced in place of the dashboard when loading gives up.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
