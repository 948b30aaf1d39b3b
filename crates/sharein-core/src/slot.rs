//! Pending-share slot: a single-value, set-once/consume-once handoff between
//! share events and a polling consumer.
//!
//! Not shared across threads; every method takes `&mut self`.

/// Holds at most one resolved path until the consumer takes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingShare {
    path: Option<String>,
}

impl PendingShare {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `path`, replacing anything held. An empty path empties the slot.
    /// Returns whether the slot now holds a path.
    pub fn offer(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if path.is_empty() {
            if self.path.take().is_some() {
                tracing::debug!("pending share cleared by unusable resolution");
            }
            return false;
        }
        tracing::debug!(path = %path, "pending share set");
        self.path = Some(path);
        true
    }

    /// Take the held path, leaving the slot empty.
    pub fn take(&mut self) -> Option<String> {
        let path = self.path.take();
        if let Some(p) = &path {
            tracing::debug!(path = %p, "pending share delivered");
        }
        path
    }

    pub fn peek(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    pub fn clear(&mut self) {
        self.path = None;
    }
}
