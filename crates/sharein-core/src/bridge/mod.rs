//! Share bridge: owns the pending-share slot and answers consumer calls.
//!
//! Events fill the slot through the never-failing resolver; `getSharedFile`
//! drains it. The `readContent*` methods resolve on demand and report
//! `INVALID_ARGUMENT` / `READ_ERROR` instead of degrading silently.

mod error;
mod method;

pub use error::BridgeError;
pub use method::{
    MethodCall, MethodResult, GET_SHARED_FILE, READ_CONTENT_TEXT, READ_CONTENT_URI, URI_ARG,
};

use std::io::Read;

use serde_json::Value;

use crate::intent::ShareIntent;
use crate::locator::ResourceLocator;
use crate::resolver::Resolver;
use crate::slot::PendingShare;
use crate::source::ContentSource;

pub struct ShareBridge<S> {
    source: S,
    resolver: Resolver,
    pending: PendingShare,
}

impl<S: ContentSource> ShareBridge<S> {
    pub fn new(source: S, resolver: Resolver) -> Self {
        Self {
            source,
            resolver,
            pending: PendingShare::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn pending(&self) -> &PendingShare {
        &self.pending
    }

    /// Handle a share/open event. Events without a locator leave the slot as
    /// is; otherwise the resolved path (possibly a raw fallback) replaces it.
    /// Every delivery resolves again, so repeated delivery of one share
    /// materializes one file per delivery.
    ///
    /// Returns whether the slot holds a path afterwards.
    pub fn on_share_or_open_event(&mut self, intent: &ShareIntent) -> bool {
        let Some(locator) = intent.locator() else {
            tracing::debug!(action = ?intent.action, "event carries no locator");
            return !self.pending.is_empty();
        };
        let resolution = self.resolver.resolve(&self.source, &locator);
        if let Some(kind) = resolution.degraded() {
            tracing::info!(locator = %locator, %kind, "share resolved in degraded form");
        }
        self.pending.offer(resolution.into_path())
    }

    /// Current slot contents; the slot is empty afterwards.
    pub fn get_shared_file(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Resolve `uri` now and return the local path.
    pub fn read_content_uri(&self, uri: Option<&str>) -> Result<String, BridgeError> {
        let locator = required_locator(uri)?;
        self.resolver
            .resolve_strict(&self.source, &locator)
            .map_err(|source| BridgeError::Resolve {
                uri: locator.to_string(),
                source,
            })
    }

    /// Read the whole content behind `uri` as text (invalid UTF-8 replaced).
    pub fn read_content_text(&self, uri: Option<&str>) -> Result<String, BridgeError> {
        let locator = required_locator(uri)?;
        let read_err = |source| BridgeError::Read {
            uri: locator.to_string(),
            source,
        };
        let mut reader = self.source.open(&locator).map_err(read_err)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(read_err)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Dispatch a consumer call.
    pub fn handle(&mut self, call: &MethodCall) -> MethodResult {
        tracing::debug!(method = %call.method, "bridge call");
        let reply = match call.method.as_str() {
            GET_SHARED_FILE => Ok(self.get_shared_file().map_or(Value::Null, Value::String)),
            READ_CONTENT_URI => self
                .read_content_uri(call.argument_str(URI_ARG))
                .map(Value::String),
            READ_CONTENT_TEXT => self
                .read_content_text(call.argument_str(URI_ARG))
                .map(Value::String),
            _ => return MethodResult::NotImplemented,
        };
        match reply {
            Ok(value) => MethodResult::success(value),
            Err(err) => {
                tracing::warn!(method = %call.method, code = err.code(), "bridge call failed: {}", err);
                err.into()
            }
        }
    }
}

fn required_locator(uri: Option<&str>) -> Result<ResourceLocator, BridgeError> {
    match uri.map(str::trim) {
        Some(u) if !u.is_empty() => Ok(ResourceLocator::parse(u)),
        _ => Err(BridgeError::MissingUri),
    }
}
