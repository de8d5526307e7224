//! Artist records and price descriptors

pub mod entities;
pub mod price;

pub use entities::{ArtistId, ArtistRecord, AvailabilityInterval, Role};
pub use price::{PriceRange, budget_compatible, is_negotiable, parse_price_range};
