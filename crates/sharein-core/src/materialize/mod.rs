//! Content materialization: copy an indirect locator's bytes into a freshly
//! named file in the temp directory.
//!
//! One successful call writes exactly one new file; a failed call leaves no
//! file behind (the copy goes through a part file that is removed on drop).

mod error;
mod naming;

pub use error::MaterializeError;
pub use naming::{sanitize_prefix, DEFAULT_PREFIX};

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::extension::extension_for;
use crate::locator::ResourceLocator;
use crate::source::ContentSource;
use crate::storage::{self, PartFile};

/// Upper bound on `-N` suffixes tried when a stamp collides.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// A file created by [`Materializer::materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    /// Absolute path of the new file.
    pub path: PathBuf,
    /// Bytes copied from the source stream.
    pub size: u64,
    /// Content type that drove extension inference, if any.
    pub content_type: Option<String>,
}

impl MaterializedFile {
    pub fn path_str(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }
}

/// Writes indirect content into uniquely named files under `temp_dir`.
#[derive(Debug, Clone)]
pub struct Materializer {
    temp_dir: PathBuf,
    prefix: String,
}

impl Materializer {
    pub fn new(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Use `prefix` (sanitized) for new file names.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        let prefix = sanitize_prefix(prefix);
        self.prefix = if prefix.is_empty() {
            DEFAULT_PREFIX.to_string()
        } else {
            prefix
        };
        self
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Copy the content behind `locator` into a new temp file.
    ///
    /// The locator's declared content type wins over the one reported by
    /// `source`. The stream is opened before anything touches the temp
    /// directory, so an unopenable locator creates nothing.
    pub fn materialize<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        locator: &ResourceLocator,
    ) -> Result<MaterializedFile, MaterializeError> {
        let mut reader = source.open(locator).map_err(|e| MaterializeError::Open {
            locator: locator.to_string(),
            source: e,
        })?;

        let content_type = locator
            .declared_type()
            .map(str::to_owned)
            .or_else(|| source.content_type(locator));
        let ext = extension_for(content_type.as_deref());

        let dir = self.prepare_dir()?;
        let (path, mut part) = self.reserve(&dir, ext)?;

        let size = part
            .copy_from(&mut reader)
            .and_then(|n| part.sync().map(|()| n))
            .map_err(|e| MaterializeError::Copy {
                path: path.clone(),
                source: e,
            })?;
        drop(reader);

        part.finalize(&path)
            .map_err(|e| MaterializeError::Finalize {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!(
            locator = %locator,
            path = %path.display(),
            size,
            content_type = content_type.as_deref().unwrap_or("-"),
            "materialized shared content"
        );

        Ok(MaterializedFile {
            path,
            size,
            content_type,
        })
    }

    /// Absolute temp dir, created if missing.
    fn prepare_dir(&self) -> Result<PathBuf, MaterializeError> {
        let dir_err = |source: io::Error| MaterializeError::CreateTempDir {
            dir: self.temp_dir.clone(),
            source,
        };
        let dir = if self.temp_dir.is_absolute() {
            self.temp_dir.clone()
        } else {
            std::env::current_dir().map_err(dir_err)?.join(&self.temp_dir)
        };
        fs::create_dir_all(&dir).map_err(dir_err)?;
        Ok(dir)
    }

    /// Pick an unused final name and exclusively create its part file.
    fn reserve(&self, dir: &Path, ext: &str) -> Result<(PathBuf, PartFile), MaterializeError> {
        let stamp = naming::timestamp_millis();
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = dir.join(naming::candidate_name(&self.prefix, stamp, attempt, ext));
            if path.exists() {
                continue;
            }
            match PartFile::create_new(&storage::part_path(&path)) {
                Ok(part) => return Ok((path, part)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(MaterializeError::Create { path, source: e }),
            }
        }
        Err(MaterializeError::NamesExhausted {
            dir: dir.to_path_buf(),
        })
    }
}
