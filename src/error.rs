use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating DAW installations.
#[derive(Debug, Error)]
pub enum DawError {
    #[error("{daw} is not available on {os}")]
    UnsupportedOs { daw: String, os: String },

    #[error("the DAW {0} is not supported by this library")]
    UnsupportedDaw(String),

    #[error("more than one DAW family is named {0}")]
    AmbiguousDaw(String),

    #[error("install root for {daw} not found: {path:?}")]
    PathNotFound {
        daw: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DawError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DawError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = DawError> = std::result::Result<T, E>;
