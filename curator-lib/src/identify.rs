//! File-type identification via the system `file` tool.

use std::path::Path;
use std::process::Command;

use crate::error::EngineError;

/// Produces a one-line type description for a file.
///
/// Trait seam so the categorizer can run in tests without shelling out.
pub trait FileIdentifier {
    fn describe(&self, path: &Path) -> Result<String, EngineError>;
}

/// Identifier backed by `file -b <path>`.
#[derive(Debug, Default)]
pub struct SystemFileIdentifier;

impl FileIdentifier for SystemFileIdentifier {
    fn describe(&self, path: &Path) -> Result<String, EngineError> {
        let output = Command::new("file").arg("-b").arg(path).output()?;
        if !output.status.success() {
            return Err(EngineError::Tool {
                tool: "file",
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
