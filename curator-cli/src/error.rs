use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database open or schema error
    #[error("Database error: {0}")]
    Schema(#[from] curator_db::SchemaError),

    /// Database query failed
    #[error("Database error: {0}")]
    Db(#[from] curator_db::OperationError),

    /// Remote archive request failed
    #[error("Archive error: {0}")]
    Archive(#[from] curator_archive::ArchiveError),

    /// Spreadsheet rendering failed
    #[error("Report error: {0}")]
    Report(#[from] curator_report::ReportError),

    /// Batch engine failure (scan, identify, verify)
    #[error("{0}")]
    Engine(#[from] curator_lib::EngineError),

    /// Listing or CSV input error
    #[error("{0}")]
    List(#[from] curator_core::ListError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
