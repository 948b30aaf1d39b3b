//! Inbound share/open events.
//!
//! Only `VIEW` (open with) and `SEND` (share) actions carry a locator: `VIEW`
//! in its data field, `SEND` in its stream extra. The event's MIME type is
//! attached to the locator as its declared content type.

use serde::Deserialize;

use crate::locator::ResourceLocator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentAction {
    View,
    Send,
    Other,
}

impl IntentAction {
    /// Maps a platform action name (`android.intent.action.VIEW`, `send`, ...).
    pub fn from_name(name: &str) -> Self {
        let short = name.rsplit('.').next().unwrap_or(name);
        if short.eq_ignore_ascii_case("view") {
            IntentAction::View
        } else if short.eq_ignore_ascii_case("send") {
            IntentAction::Send
        } else {
            IntentAction::Other
        }
    }
}

/// A share/open event as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShareIntent {
    pub action: IntentAction,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl ShareIntent {
    /// "Open with": locator in the data field.
    pub fn view(uri: impl Into<String>) -> Self {
        Self {
            action: IntentAction::View,
            data: Some(uri.into()),
            stream: None,
            mime_type: None,
        }
    }

    /// "Share": locator in the stream extra.
    pub fn send(uri: impl Into<String>) -> Self {
        Self {
            action: IntentAction::Send,
            data: None,
            stream: Some(uri.into()),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Locator carried by this event, if its action carries one.
    pub fn locator(&self) -> Option<ResourceLocator> {
        let raw = match self.action {
            IntentAction::View => self.data.as_deref()?,
            IntentAction::Send => self.stream.as_deref()?,
            IntentAction::Other => return None,
        };
        let locator = ResourceLocator::parse(raw);
        Some(match &self.mime_type {
            Some(mt) => locator.with_content_type(mt.clone()),
            None => locator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names() {
        assert_eq!(IntentAction::from_name("android.intent.action.VIEW"), IntentAction::View);
        assert_eq!(IntentAction::from_name("android.intent.action.SEND"), IntentAction::Send);
        assert_eq!(IntentAction::from_name("send"), IntentAction::Send);
        assert_eq!(IntentAction::from_name("android.intent.action.MAIN"), IntentAction::Other);
        assert_eq!(IntentAction::from_name("android.intent.action.SEND_MULTIPLE"), IntentAction::Other);
    }

    #[test]
    fn view_uses_data_field() {
        let intent = ShareIntent::view("content://p/a").with_mime_type("application/zip");
        let loc = intent.locator().unwrap();
        assert_eq!(loc.as_str(), "content://p/a");
        assert_eq!(loc.declared_type(), Some("application/zip"));
    }

    #[test]
    fn send_uses_stream_extra() {
        let mut intent = ShareIntent::send("content://p/s");
        intent.data = Some("content://p/ignored".to_string());
        assert_eq!(intent.locator().unwrap().as_str(), "content://p/s");
    }

    #[test]
    fn missing_or_other_yields_none() {
        let mut intent = ShareIntent::view("content://p/a");
        intent.data = None;
        assert!(intent.locator().is_none());

        let mut intent = ShareIntent::view("content://p/a");
        intent.action = IntentAction::Other;
        assert!(intent.locator().is_none());
    }

    #[test]
    fn deserializes_from_json() {
        let intent: ShareIntent = serde_json::from_str(
            r#"{"action":"send","stream":"content://p/x","mime_type":"text/plain"}"#,
        )
        .unwrap();
        assert_eq!(intent, ShareIntent::send("content://p/x").with_mime_type("text/plain"));
    }
}
