//! Part-file storage for materialized content.
//!
//! Bytes are written to `<final>.part` and renamed into place only after a
//! complete copy, so a failed copy never leaves a file under the final name.

mod writer;

pub use writer::PartFile;

use std::path::{Path, PathBuf};

/// Suffix of in-progress files.
pub const PART_SUFFIX: &str = ".part";

/// Path of the part file for `final_path` (e.g. `a.zip` → `a.zip.part`).
pub fn part_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(PART_SUFFIX);
    PathBuf::from(o)
}
