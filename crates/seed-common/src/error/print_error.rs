//! Pretty printer error types

/// Errors produced while rendering JSON for the terminal
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl PrintError {
    /// Check if the input document was rejected (as opposed to an output failure)
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidJson(_))
    }
}
