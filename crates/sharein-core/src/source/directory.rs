//! Directory-backed content provider.
//!
//! Maps `content://<authority>/<path>` to `<root>/<authority>/<path>` and
//! `file:` locators to their local path. Content types are guessed from the
//! file extension unless an override is set.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use super::ContentSource;
use crate::locator::{ResourceLocator, CONTENT_SCHEME, FILE_SCHEME};

#[derive(Debug, Clone)]
pub struct DirectoryContentSource {
    root: PathBuf,
    content_type_override: Option<String>,
}

impl DirectoryContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            content_type_override: None,
        }
    }

    /// Reports `content_type` for every locator instead of guessing.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type_override = Some(content_type.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Local path backing `locator`.
    ///
    /// The authority and every percent-decoded path segment must be a plain
    /// file name component: not empty, `.` or `..`, and free of separators.
    /// Anything else is `PermissionDenied`. Schemes the provider does not
    /// serve are `Unsupported`.
    pub fn local_path(&self, locator: &ResourceLocator) -> io::Result<PathBuf> {
        match locator.scheme() {
            Some(CONTENT_SCHEME) => {
                let mut path = self.root.clone();
                if let Some(authority) = locator.authority() {
                    if !is_plain_component(authority) {
                        return Err(escapes_root(locator));
                    }
                    path.push(authority);
                }
                let segments = locator
                    .path()
                    .unwrap_or("")
                    .split('/')
                    .filter(|s| !s.is_empty());
                for segment in segments {
                    let decoded = percent_decode_str(segment).decode_utf8().map_err(|_| {
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("path is not valid UTF-8: {}", locator),
                        )
                    })?;
                    if !is_plain_component(&decoded) {
                        return Err(escapes_root(locator));
                    }
                    path.push(decoded.as_ref());
                }
                Ok(path)
            }
            Some(FILE_SCHEME) => Ok(PathBuf::from(locator.file_path().unwrap_or_default())),
            _ => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("unsupported locator: {}", locator),
            )),
        }
    }
}

fn is_plain_component(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

fn escapes_root(locator: &ResourceLocator) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("path escapes provider root: {}", locator),
    )
}

impl ContentSource for DirectoryContentSource {
    fn open(&self, locator: &ResourceLocator) -> io::Result<Box<dyn Read + '_>> {
        let path = self.local_path(locator)?;
        let file = File::open(&path)?;
        tracing::debug!(path = %path.display(), "provider opened content");
        Ok(Box::new(file))
    }

    fn content_type(&self, locator: &ResourceLocator) -> Option<String> {
        if let Some(ct) = &self.content_type_override {
            return Some(ct.clone());
        }
        let path = self.local_path(locator).ok()?;
        mime_guess::from_path(&path)
            .first()
            .map(|m| m.essence_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_maps_under_authority() {
        let src = DirectoryContentSource::new("/srv/share");
        let path = src
            .local_path(&ResourceLocator::parse("content://provider/docs/a.zip"))
            .unwrap();
        assert_eq!(path, Path::new("/srv/share/provider/docs/a.zip"));
    }

    #[test]
    fn dot_segments_stay_under_root() {
        let src = DirectoryContentSource::new("/srv/share");
        let path = src
            .local_path(&ResourceLocator::parse("content://provider/a/../../etc/passwd"))
            .unwrap();
        assert!(path.starts_with("/srv/share/provider"));
    }

    #[test]
    fn opaque_parent_components_rejected() {
        let src = DirectoryContentSource::new("/srv/share");
        let err = src
            .local_path(&ResourceLocator::parse("content:a/../../etc/passwd"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn dot_dot_authority_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"outside").unwrap();
        let src = DirectoryContentSource::new(&root);

        let loc = ResourceLocator::parse("content://../secret.txt");
        assert_eq!(
            src.local_path(&loc).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
        assert!(src.open(&loc).is_err());
    }

    #[test]
    fn encoded_separator_rejected() {
        let src = DirectoryContentSource::new("/srv/share");
        let err = src
            .local_path(&ResourceLocator::parse("content://provider/a%2F..%2Fb"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn encoded_segments_are_decoded() {
        let src = DirectoryContentSource::new("/srv/share");
        let path = src
            .local_path(&ResourceLocator::parse("content://provider/my%20docs/a%20b.txt"))
            .unwrap();
        assert_eq!(path, Path::new("/srv/share/provider/my docs/a b.txt"));
    }

    #[test]
    fn open_reads_file_with_encoded_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("p")).unwrap();
        std::fs::write(dir.path().join("p/a b.txt"), b"spaced").unwrap();
        let src = DirectoryContentSource::new(dir.path());

        let loc = ResourceLocator::parse("content://p/a%20b.txt");
        let mut buf = Vec::new();
        src.open(&loc).unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"spaced");
        assert_eq!(src.content_type(&loc).as_deref(), Some("text/plain"));
    }

    #[test]
    fn other_schemes_unsupported() {
        let src = DirectoryContentSource::new("/srv/share");
        let err = src
            .local_path(&ResourceLocator::parse("https://example.com/x"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn content_type_guess_and_override() {
        let src = DirectoryContentSource::new("/srv/share");
        let zip = ResourceLocator::parse("content://provider/a.zip");
        assert_eq!(src.content_type(&zip).as_deref(), Some("application/zip"));
        let bare = ResourceLocator::parse("content://provider/doc123");
        assert_eq!(src.content_type(&bare), None);

        let src = src.with_content_type("text/plain");
        assert_eq!(src.content_type(&bare).as_deref(), Some("text/plain"));
    }

    #[test]
    fn open_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("provider")).unwrap();
        std::fs::write(dir.path().join("provider/note.txt"), b"hi").unwrap();
        let src = DirectoryContentSource::new(dir.path());

        let mut buf = Vec::new();
        src.open(&ResourceLocator::parse("content://provider/note.txt"))
            .unwrap()
            .read_to_end(&mut buf)
            .unwrap();
        assert_eq!(buf, b"hi");
    }
}
