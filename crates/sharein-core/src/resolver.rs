//! URI resolution: turn a shared-content locator into a local path string.
//!
//! `file:` locators are answered from the locator itself. Locators whose
//! scheme needs indirect access are materialized into the temp directory.
//! Anything else is handed back verbatim.

use std::borrow::Cow;

use crate::config::ShareConfig;
use crate::error::ErrorKind;
use crate::locator::{ResourceLocator, CONTENT_SCHEME};
use crate::materialize::{MaterializeError, MaterializedFile, Materializer};
use crate::source::ContentSource;

/// Outcome of [`Resolver::resolve`].
#[derive(Debug)]
pub enum Resolution {
    /// Path taken straight from a `file:` locator.
    Local(String),
    /// Content copied into a new temp file.
    Materialized(MaterializedFile),
    /// Scheme not handled; the raw locator string.
    Passthrough(String),
    /// Materialization failed; the raw locator string plus the cause.
    Fallback {
        raw: String,
        error: MaterializeError,
    },
}

impl Resolution {
    /// The resolved path (or raw fallback) as a string.
    pub fn path(&self) -> Cow<'_, str> {
        match self {
            Resolution::Local(p) | Resolution::Passthrough(p) => Cow::Borrowed(p),
            Resolution::Materialized(f) => f.path_str(),
            Resolution::Fallback { raw, .. } => Cow::Borrowed(raw),
        }
    }

    pub fn into_path(self) -> String {
        match self {
            Resolution::Local(p) | Resolution::Passthrough(p) => p,
            Resolution::Materialized(f) => f.path.to_string_lossy().into_owned(),
            Resolution::Fallback { raw, .. } => raw,
        }
    }

    /// Non-fatal problem class, if resolution degraded.
    pub fn degraded(&self) -> Option<ErrorKind> {
        match self {
            Resolution::Local(_) | Resolution::Materialized(_) => None,
            Resolution::Passthrough(_) => Some(ErrorKind::UnresolvedScheme),
            Resolution::Fallback { error, .. } => Some(error.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    File,
    Indirect,
    Other,
}

/// Scheme dispatcher in front of a [`Materializer`].
#[derive(Debug, Clone)]
pub struct Resolver {
    materializer: Materializer,
    indirect_schemes: Vec<String>,
}

impl Resolver {
    /// Resolver that materializes `content:` locators.
    pub fn new(materializer: Materializer) -> Self {
        Self {
            materializer,
            indirect_schemes: vec![CONTENT_SCHEME.to_string()],
        }
    }

    /// Build from config: temp dir, file prefix and indirect schemes.
    pub fn from_config(cfg: &ShareConfig) -> anyhow::Result<Self> {
        let materializer = Materializer::new(cfg.temp_dir()?).with_prefix(&cfg.file_prefix);
        Ok(Self::new(materializer).with_indirect_schemes(&cfg.indirect_schemes))
    }

    /// Replace the set of schemes that are materialized.
    pub fn with_indirect_schemes<I, T>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.indirect_schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    pub fn materializer(&self) -> &Materializer {
        &self.materializer
    }

    pub fn indirect_schemes(&self) -> &[String] {
        &self.indirect_schemes
    }

    fn route(&self, locator: &ResourceLocator) -> Route {
        match locator.scheme() {
            _ if locator.is_file() => Route::File,
            Some(s) if self.indirect_schemes.iter().any(|i| i == s) => Route::Indirect,
            _ => Route::Other,
        }
    }

    /// Resolve `locator`. Never fails: materialization errors degrade to the
    /// raw locator string.
    pub fn resolve<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        locator: &ResourceLocator,
    ) -> Resolution {
        match self.route(locator) {
            Route::File => Resolution::Local(local_path(locator)),
            Route::Indirect => match self.materializer.materialize(source, locator) {
                Ok(file) => Resolution::Materialized(file),
                Err(error) => {
                    let cause = std::error::Error::source(&error)
                        .map(|s| s.to_string())
                        .unwrap_or_default();
                    tracing::warn!(
                        locator = %locator,
                        %cause,
                        "materialization failed, passing locator through: {}",
                        error
                    );
                    Resolution::Fallback {
                        raw: locator.as_str().to_string(),
                        error,
                    }
                }
            },
            Route::Other => {
                tracing::debug!(locator = %locator, "unhandled scheme, passing locator through");
                Resolution::Passthrough(locator.as_str().to_string())
            }
        }
    }

    /// Same dispatch as [`resolve`](Self::resolve), but materialization
    /// failures are returned instead of swallowed.
    pub fn resolve_strict<S: ContentSource + ?Sized>(
        &self,
        source: &S,
        locator: &ResourceLocator,
    ) -> Result<String, MaterializeError> {
        match self.route(locator) {
            Route::File => Ok(local_path(locator)),
            Route::Indirect => self
                .materializer
                .materialize(source, locator)
                .map(|f| f.path.to_string_lossy().into_owned()),
            Route::Other => Ok(locator.as_str().to_string()),
        }
    }
}

fn local_path(locator: &ResourceLocator) -> String {
    locator
        .file_path()
        .unwrap_or_else(|| locator.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryContentSource;

    fn resolver(dir: &std::path::Path) -> Resolver {
        Resolver::new(Materializer::new(dir))
    }

    #[test]
    fn file_scheme_returns_path_without_io() {
        let dir = tempfile::tempdir().unwrap();
        let temp = dir.path().join("never-created");
        let src = MemoryContentSource::new();

        let res = resolver(&temp).resolve(&src, &ResourceLocator::parse("file:///sdcard/Download/a.pdf"));
        assert!(matches!(res, Resolution::Local(_)));
        assert_eq!(res.path(), "/sdcard/Download/a.pdf");
        assert!(res.degraded().is_none());
        assert!(!temp.exists());
    }

    #[test]
    fn content_scheme_materializes() {
        let dir = tempfile::tempdir().unwrap();
        let mut src = MemoryContentSource::new();
        src.insert("content://p/a", b"abc".to_vec(), Some("text/plain"));

        let res = resolver(dir.path()).resolve(&src, &ResourceLocator::parse("content://p/a"));
        let path = res.into_path();
        assert!(path.ends_with(".txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    }

    #[test]
    fn failed_materialization_falls_back_to_raw() {
        let dir = tempfile::tempdir().unwrap();
        let src = MemoryContentSource::new();

        let res = resolver(dir.path()).resolve(&src, &ResourceLocator::parse("content://p/missing"));
        assert!(matches!(res, Resolution::Fallback { .. }));
        assert_eq!(res.path(), "content://p/missing");
        assert_eq!(res.degraded(), Some(ErrorKind::ReadError));
    }

    #[test]
    fn other_schemes_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let src = MemoryContentSource::new();
        let r = resolver(dir.path());

        let res = r.resolve(&src, &ResourceLocator::parse("https://example.com/a.zip"));
        assert!(matches!(res, Resolution::Passthrough(_)));
        assert_eq!(res.path(), "https://example.com/a.zip");
        assert_eq!(res.degraded(), Some(ErrorKind::UnresolvedScheme));

        let res = r.resolve(&src, &ResourceLocator::parse("not a uri"));
        assert_eq!(res.into_path(), "not a uri");
    }

    #[test]
    fn indirect_schemes_are_configurable() {
        let dir = tempfile::tempdir().unwrap();
        let mut src = MemoryContentSource::new();
        src.insert("blob://store/1", b"zz".to_vec(), None);
        src.insert("content://p/a", b"a".to_vec(), None);

        let r = resolver(dir.path()).with_indirect_schemes([" BLOB ", ""]);
        assert_eq!(r.indirect_schemes(), ["blob".to_string()]);
        assert!(matches!(
            r.resolve(&src, &ResourceLocator::parse("blob://store/1")),
            Resolution::Materialized(_)
        ));
        assert!(matches!(
            r.resolve(&src, &ResourceLocator::parse("content://p/a")),
            Resolution::Passthrough(_)
        ));
    }

    #[test]
    fn strict_surfaces_errors() {
        let dir = tempfile::tempdir().unwrap();
        let src = MemoryContentSource::new();
        let r = resolver(dir.path());

        assert!(r
            .resolve_strict(&src, &ResourceLocator::parse("content://p/missing"))
            .is_err());
        assert_eq!(
            r.resolve_strict(&src, &ResourceLocator::parse("file:///tmp/x.txt"))
                .unwrap(),
            "/tmp/x.txt"
        );
    }
}
