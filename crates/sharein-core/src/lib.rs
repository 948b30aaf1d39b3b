pub mod config;
pub mod logging;

pub mod bridge;
pub mod error;
pub mod extension;
pub mod intent;
pub mod locator;
pub mod materialize;
pub mod resolver;
pub mod slot;
pub mod source;
pub mod storage;

pub use bridge::{BridgeError, MethodCall, MethodResult, ShareBridge};
pub use error::ErrorKind;
pub use intent::{IntentAction, ShareIntent};
pub use locator::ResourceLocator;
pub use materialize::{MaterializeError, MaterializedFile, Materializer};
pub use resolver::{Resolution, Resolver};
pub use slot::PendingShare;
pub use source::{ContentSource, DirectoryContentSource, MemoryContentSource};
