use thiserror::Error;

/// Errors produced by the `process` command boundary.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Diagnostic lines could not be written to the output stream.
    #[error("failed to write output: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for ProcessError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteOutput { source }
    }
}
