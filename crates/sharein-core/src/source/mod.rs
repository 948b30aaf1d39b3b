//! Content sources: the host side that turns a locator into bytes.
//!
//! The materializer only depends on the [`ContentSource`] trait; it does not
//! know whether bytes come from a provider directory, memory, or a platform
//! content resolver behind a bridge.

mod directory;
mod memory;

pub use directory::DirectoryContentSource;
pub use memory::MemoryContentSource;

use std::io::{self, Read};

use crate::locator::ResourceLocator;

/// Opens byte streams for locators and reports their content type.
pub trait ContentSource {
    /// Opens a readable stream for `locator`. An unavailable stream is an error.
    fn open(&self, locator: &ResourceLocator) -> io::Result<Box<dyn Read + '_>>;

    /// Content type the provider reports for `locator`, if it knows one.
    fn content_type(&self, locator: &ResourceLocator) -> Option<String>;
}

impl<T: ContentSource + ?Sized> ContentSource for &T {
    fn open(&self, locator: &ResourceLocator) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(locator)
    }

    fn content_type(&self, locator: &ResourceLocator) -> Option<String> {
        (**self).content_type(locator)
    }
}
