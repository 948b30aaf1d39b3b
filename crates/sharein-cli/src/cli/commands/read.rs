//! `sharein read <uri>` – on-demand resolution (legacy bridge methods).

use anyhow::Result;
use sharein_core::config::ShareConfig;
use std::path::Path;

use super::open_bridge;

pub fn run_read(
    cfg: &ShareConfig,
    uri: &str,
    text: bool,
    provider_root: Option<&Path>,
) -> Result<()> {
    let bridge = open_bridge(cfg, provider_root)?;
    let result = if text {
        bridge.read_content_text(Some(uri))
    } else {
        bridge.read_content_uri(Some(uri))
    };

    match result {
        Ok(out) if text => print!("{out}"),
        Ok(out) => println!("{out}"),
        Err(e) => {
            let code = e.code();
            return Err(anyhow::Error::new(e).context(code));
        }
    }
    Ok(())
}
