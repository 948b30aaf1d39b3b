//! CLI command handlers, one per file.

mod call;
mod completions;
mod read;
mod share;

pub use call::run_call;
pub use completions::run_completions;
pub use read::run_read;
pub use share::run_share;

use anyhow::Result;
use sharein_core::config::ShareConfig;
use sharein_core::{DirectoryContentSource, Resolver, ShareBridge};
use std::path::Path;

/// Bridge over `provider_root` (or the current directory) using `cfg`.
pub(crate) fn open_bridge(
    cfg: &ShareConfig,
    provider_root: Option<&Path>,
) -> Result<ShareBridge<DirectoryContentSource>> {
    let root = match provider_root {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let resolver = Resolver::from_config(cfg)?;
    tracing::debug!(
        root = %root.display(),
        temp_dir = %resolver.materializer().temp_dir().display(),
        "bridge ready"
    );
    Ok(ShareBridge::new(DirectoryContentSource::new(root), resolver))
}
