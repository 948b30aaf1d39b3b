//! Materialization failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("could not open content stream for {locator}")]
    Open {
        locator: String,
        #[source]
        source: io::Error,
    },
    #[error("could not create temp directory {}", dir.display())]
    CreateTempDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("copy into {} failed", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not move part file into {}", path.display())]
    Finalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no free file name left in {}", dir.display())]
    NamesExhausted { dir: PathBuf },
}

impl MaterializeError {
    /// Every materialization failure surfaces as a read error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ReadError
    }
}
