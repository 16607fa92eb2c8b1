/// Errors that can occur talking to the archive APIs.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed search listing. Caught by the pagination loop, which
    /// keeps whatever was already fetched.
    #[error("Malformed listing response: {0}")]
    Listing(serde_json::Error),

    /// Malformed per-item metadata. Not caught anywhere — aborts the run.
    #[error("Malformed metadata response for {identifier}: {source}")]
    Metadata {
        identifier: String,
        source: serde_json::Error,
    },

    #[error("No files listed for item {0}")]
    NoFiles(String),
}
