//! Sequential writer for a single part file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// An exclusively created part file. Removed on drop unless finalized.
#[derive(Debug)]
pub struct PartFile {
    file: Option<File>,
    part_path: PathBuf,
}

impl PartFile {
    /// Create `part_path`; fails with `AlreadyExists` rather than truncating.
    pub fn create_new(part_path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create_new(true)
            .open(part_path)?;
        Ok(PartFile {
            file: Some(file),
            part_path: part_path.to_path_buf(),
        })
    }

    /// Copy `reader` to the end of the file; returns bytes copied.
    pub fn copy_from(&mut self, reader: &mut dyn Read) -> io::Result<u64> {
        match self.file.as_mut() {
            Some(f) => io::copy(reader, f),
            None => Err(io::Error::new(io::ErrorKind::Other, "part file closed")),
        }
    }

    pub fn sync(&self) -> io::Result<()> {
        match &self.file {
            Some(f) => f.sync_all(),
            None => Ok(()),
        }
    }

    /// Close the file and rename it to `final_path`.
    pub fn finalize(mut self, final_path: &Path) -> io::Result<()> {
        drop(self.file.take());
        std::fs::rename(&self.part_path, final_path)?;
        self.part_path = PathBuf::new();
        Ok(())
    }
}

impl Drop for PartFile {
    fn drop(&mut self) {
        drop(self.file.take());
        if self.part_path.as_os_str().is_empty() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.part_path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.part_path.display(), "could not remove part file: {}", e);
            }
        }
    }
}
