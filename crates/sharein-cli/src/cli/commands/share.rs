//! `sharein share <uri>` – deliver an event, then drain the slot once.

use anyhow::Result;
use sharein_core::config::ShareConfig;
use sharein_core::{IntentAction, ShareIntent};
use std::path::Path;

use super::open_bridge;

/// Delivers the event `deliveries` times (at least once) and prints what a
/// single `getSharedFile` call returns. Returns that value for callers.
pub fn run_share(
    cfg: &ShareConfig,
    uri: &str,
    action: IntentAction,
    mime: Option<&str>,
    provider_root: Option<&Path>,
    deliveries: u32,
) -> Result<Option<String>> {
    let mut bridge = open_bridge(cfg, provider_root)?;

    let mut intent = match action {
        IntentAction::Send => ShareIntent::send(uri),
        _ => ShareIntent::view(uri),
    };
    if let Some(m) = mime {
        intent = intent.with_mime_type(m);
    }

    for _ in 0..deliveries.max(1) {
        bridge.on_share_or_open_event(&intent);
    }

    let shared = bridge.get_shared_file();
    match &shared {
        Some(path) => println!("{path}"),
        None => println!("No shared file."),
    }
    Ok(shared)
}
