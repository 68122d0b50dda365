//! Error types for distill-core

use std::path::Path;

use thiserror::Error;

use crate::fault::Fault;

/// Core error type for distill operations
#[derive(Debug, Error)]
pub enum Error {
    /// Manifest structure or content is invalid
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// A source document or template could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// File IO failure
    #[error("IO error: {0}")]
    IoError(String),

    /// A required input file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Faults recorded during a render; nothing was written
    #[error("{} fault(s) recorded; generated files were not saved", .faults.len())]
    Faults {
        /// Every fault from the run, in the order recorded
        faults: Vec<Fault>,
    },

    /// Checked outputs differ from the rendered artifacts
    #[error("Generated files are out of date: {0}")]
    OutOfDate(String),
}

impl Error {
    /// Create an IO error carrying the offending path.
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::IoError(format!("{}: {err}", path.display()))
    }

    /// Create an out-of-date error from the stale paths.
    pub fn out_of_date(paths: &[std::path::PathBuf]) -> Self {
        let joined = paths
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::OutOfDate(joined)
    }

    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit code scheme:
    /// - 1: Validation failure (bad manifest, unparseable source, faults, stale outputs)
    /// - 2: System error (IO)
    /// - 3: Not found (missing source, manifest, or template file)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidManifest(_)
            | Self::ParseError(_)
            | Self::Faults { .. }
            | Self::OutOfDate(_) => 1,
            Self::IoError(_) => 2,
            Self::NotFound(_) => 3,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::InvalidManifest(format!("failed to parse manifest: {err}"))
    }
}

/// Result type alias for distill-core operations
pub type Result<T> = std::result::Result<T, Error>;
