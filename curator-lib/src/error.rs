use thiserror::Error;

/// Errors that can occur in the batch engines.
#[derive(Debug, Error)]
pub enum EngineError {
    /// I/O error while walking or reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external tool exited with a failure status
    #[error("{tool} exited with status {status}: {stderr}")]
    Tool {
        tool: &'static str,
        status: i32,
        stderr: String,
    },

    /// The decoder found an error in a video file. Fatal for the whole
    /// verification run.
    #[error("Error found in {name}: {diagnostic}")]
    DecodeFailure { name: String, diagnostic: String },

    /// The user data directory could not be resolved
    #[error("Could not determine the user data directory")]
    NoDataDir,
}
