//! Error types for oxicc

use std::path::PathBuf;

use thiserror::Error;

use crate::icc::IccError;

/// Result type for oxicc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers, carrying the originating file identifier
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The profile could not be parsed, validated or converted
    #[error("Error parsing .icc file ({file}).  {source}.")]
    Parse {
        file: String,
        #[source]
        source: IccError,
    },

    /// The profile file could not be opened
    #[error(
        "The specified file '{}' could not be opened. Please confirm the file exists with appropriate read permissions.",
        path.display()
    )]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Attach a file identifier to a reader error
    pub fn parse(file: impl Into<String>, source: IccError) -> Self {
        Self::Parse {
            file: file.into(),
            source,
        }
    }

    /// The underlying reader error, if this is a parse failure
    pub fn icc_error(&self) -> Option<&IccError> {
        match self {
            Self::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
