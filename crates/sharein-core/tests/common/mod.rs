//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use sharein_core::{Materializer, MemoryContentSource, Resolver, ShareBridge};

/// Bridge over an in-memory provider writing into `temp_dir`.
pub fn memory_bridge(temp_dir: &Path) -> ShareBridge<MemoryContentSource> {
    ShareBridge::new(
        MemoryContentSource::new(),
        Resolver::new(Materializer::new(temp_dir)),
    )
}

/// Deterministic body of `len` bytes.
pub fn body(len: usize) -> Vec<u8> {
    (0u8..251).cycle().take(len).collect()
}

/// Files currently in `dir` (empty if it does not exist).
pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(rd) => rd.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    };
    out.sort();
    out
}
