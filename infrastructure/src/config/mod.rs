//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{CompletionConfig, FileConfig, LogConfig, StoreConfig};
pub use loader::ConfigLoader;
