//! Infrastructure layer for gigmatch
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP document-store client, the completion API
//! client, configuration file loading and the JSONL match logger.

pub mod completion;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use completion::OpenAiCompletionGateway;
pub use config::{CompletionConfig, ConfigLoader, FileConfig, LogConfig, StoreConfig};
pub use logging::JsonlMatchLogger;
pub use store::{HttpArtistStore, InMemoryArtistStore};
