//! Artist store adapters

pub mod http;
pub mod memory;

pub use http::HttpArtistStore;
pub use memory::InMemoryArtistStore;
