//! In-memory content source keyed by the raw locator string.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};

use super::ContentSource;
use crate::locator::ResourceLocator;

#[derive(Debug, Clone)]
enum Entry {
    Bytes(Vec<u8>),
    /// Yields `prefix`, then fails every further read.
    Broken(Vec<u8>),
}

#[derive(Debug, Clone)]
struct Item {
    entry: Entry,
    content_type: Option<String>,
}

/// Reader that always fails; appended after the prefix of a broken entry.
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "content stream interrupted",
        ))
    }
}

/// Content source backed by a map of locator → bytes.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentSource {
    items: HashMap<String, Item>,
}

impl MemoryContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `uri` with an optional reported content type.
    pub fn insert(
        &mut self,
        uri: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        content_type: Option<&str>,
    ) {
        self.items.insert(
            uri.into(),
            Item {
                entry: Entry::Bytes(bytes.into()),
                content_type: content_type.map(str::to_owned),
            },
        );
    }

    /// Registers a stream that opens fine but fails after yielding `prefix`.
    pub fn insert_broken(
        &mut self,
        uri: impl Into<String>,
        prefix: impl Into<Vec<u8>>,
        content_type: Option<&str>,
    ) {
        self.items.insert(
            uri.into(),
            Item {
                entry: Entry::Broken(prefix.into()),
                content_type: content_type.map(str::to_owned),
            },
        );
    }

    pub fn remove(&mut self, uri: &str) -> bool {
        self.items.remove(uri).is_some()
    }
}

impl ContentSource for MemoryContentSource {
    fn open(&self, locator: &ResourceLocator) -> io::Result<Box<dyn Read + '_>> {
        let item = self.items.get(locator.as_str()).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no content registered for {}", locator),
            )
        })?;
        Ok(match &item.entry {
            Entry::Bytes(bytes) => Box::new(Cursor::new(bytes.as_slice())),
            Entry::Broken(prefix) => Box::new(Cursor::new(prefix.as_slice()).chain(BrokenReader)),
        })
    }

    fn content_type(&self, locator: &ResourceLocator) -> Option<String> {
        self.items
            .get(locator.as_str())
            .and_then(|item| item.content_type.clone())
    }
}
