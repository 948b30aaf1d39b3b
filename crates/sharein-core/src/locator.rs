//! Resource locators: scheme-qualified references to shared content.
//!
//! A locator keeps the raw string it was built from so that resolution can
//! always fall back to handing the caller exactly what the host delivered.

use std::fmt;
use url::Url;

/// Scheme of locators that already name a local file.
pub const FILE_SCHEME: &str = "file";
/// Scheme of locators served through a content provider.
pub const CONTENT_SCHEME: &str = "content";

/// An immutable, possibly unparseable reference to shared content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    raw: String,
    url: Option<Url>,
    declared_type: Option<String>,
}

impl ResourceLocator {
    /// Parses `raw` as an absolute URL. Strings that do not parse are kept
    /// as-is and report no scheme.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let url = Url::parse(raw.trim()).ok();
        Self {
            raw,
            url,
            declared_type: None,
        }
    }

    /// Attaches the content type declared by the sender (e.g. the intent's MIME type).
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.declared_type = Some(content_type.into());
        self
    }

    /// The locator exactly as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercase scheme, or `None` when the raw string is not an absolute URL.
    pub fn scheme(&self) -> Option<&str> {
        self.url.as_ref().map(Url::scheme)
    }

    pub fn is_file(&self) -> bool {
        self.scheme() == Some(FILE_SCHEME)
    }

    /// Provider authority (`content://<authority>/...`).
    pub fn authority(&self) -> Option<&str> {
        self.url.as_ref().and_then(Url::host_str)
    }

    /// Path component, still percent-encoded.
    pub fn path(&self) -> Option<&str> {
        self.url.as_ref().map(Url::path)
    }

    /// Local path for `file:` locators, percent-decoded when possible.
    ///
    /// Returns `None` for any other scheme. If the URL cannot be turned into a
    /// platform path (e.g. a non-local host), the raw path component is used.
    pub fn file_path(&self) -> Option<String> {
        let url = self.url.as_ref().filter(|u| u.scheme() == FILE_SCHEME)?;
        Some(match url.to_file_path() {
            Ok(p) => p.to_string_lossy().into_owned(),
            Err(()) => url.path().to_string(),
        })
    }

    /// Content type declared alongside the locator, if any.
    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
