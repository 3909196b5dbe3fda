use thiserror::Error;

/// Failures the analyzer can report through its strict API. The
/// never-crash wrapper converts every variant into the mock report instead.
/// Degenerate arithmetic cases (zero duration, zero hits) are defined
/// zero-valued results, not errors.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The log file could not be opened or read.
    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),

    /// Structured input was not valid JSON.
    #[error("malformed structured log: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured input parsed but does not carry a finished report.
    #[error("unrecognized structured log: {0}")]
    Format(String),
}
