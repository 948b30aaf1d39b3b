//! `sharein call <json>` – dispatch a raw method call through the bridge.

use anyhow::{Context, Result};
use sharein_core::config::ShareConfig;
use sharein_core::{MethodCall, MethodResult, ShareIntent};
use std::path::Path;

use super::open_bridge;

pub fn run_call(
    cfg: &ShareConfig,
    json: &str,
    event: Option<&str>,
    provider_root: Option<&Path>,
) -> Result<MethodResult> {
    let call: MethodCall = serde_json::from_str(json).context("invalid method call JSON")?;
    let mut bridge = open_bridge(cfg, provider_root)?;

    if let Some(uri) = event {
        bridge.on_share_or_open_event(&ShareIntent::view(uri));
    }

    let result = bridge.handle(&call);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result)
}
