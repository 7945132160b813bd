//! Blocked ranges, derived availability, and the per-listing snapshot
//! cache.

pub mod cache;
pub mod query;
pub mod snapshot;

pub use cache::AvailabilityCache;
pub use query::AvailableRun;
pub use snapshot::{AvailabilitySnapshot, BlockedRange, DayAvailability};
