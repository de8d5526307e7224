//! Ports (interfaces) for external collaborators
//!
//! The matcher touches exactly two external systems: the document store
//! holding artist profiles and the text-completion service used for
//! ranking. Both are narrow traits so the pipeline is testable with fakes.

pub mod artist_store;
pub mod completion_gateway;
pub mod match_logger;
