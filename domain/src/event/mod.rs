//! Event criteria and the requested time slot

pub mod entities;

pub use entities::{EventCriteria, EventSlot, SlotKind};
