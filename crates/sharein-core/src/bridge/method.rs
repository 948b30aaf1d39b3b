//! Method-call envelopes exchanged with the host's bridge transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::BridgeError;

pub const GET_SHARED_FILE: &str = "getSharedFile";
pub const READ_CONTENT_URI: &str = "readContentUri";
pub const READ_CONTENT_TEXT: &str = "readContentText";

/// Argument key holding the locator for the `readContent*` methods.
pub const URI_ARG: &str = "uri";

/// A call from the consumer side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Value::Null,
        }
    }

    /// Call with a single string argument.
    pub fn with_arg(mut self, key: &str, value: impl Into<String>) -> Self {
        let mut map = match self.arguments {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        map.insert(key.to_string(), Value::String(value.into()));
        self.arguments = Value::Object(map);
        self
    }

    /// String argument `key`, if present and a string.
    pub fn argument_str(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(Value::as_str)
    }
}

/// Reply to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResult {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default)]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success {
            value: value.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    /// Error code, for error results.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            MethodResult::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<BridgeError> for MethodResult {
    fn from(err: BridgeError) -> Self {
        MethodResult::Error {
            code: err.code().to_string(),
            message: format!("{:#}", anyhow::Error::from(err)),
            details: None,
        }
    }
}
