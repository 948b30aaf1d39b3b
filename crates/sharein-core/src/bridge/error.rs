//! Errors surfaced by the on-demand bridge methods.

use std::io;

use thiserror::Error;

use crate::error::ErrorKind;
use crate::materialize::MaterializeError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("URI not provided")]
    MissingUri,
    #[error("could not resolve {uri}")]
    Resolve {
        uri: String,
        #[source]
        source: MaterializeError,
    },
    #[error("could not read {uri}")]
    Read {
        uri: String,
        #[source]
        source: io::Error,
    },
}

impl BridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BridgeError::MissingUri => ErrorKind::InvalidArgument,
            BridgeError::Resolve { .. } | BridgeError::Read { .. } => ErrorKind::ReadError,
        }
    }

    /// Wire code (`INVALID_ARGUMENT` / `READ_ERROR`).
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
