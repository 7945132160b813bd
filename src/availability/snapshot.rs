//! Blocked ranges and the per-listing availability snapshot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A closed-open date interval during which a listing cannot be booked.
///
/// `end` is exclusive: the checkout day is open for a new arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Freeform annotation from the feed (e.g. "Reserved"). Not
    /// semantically parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BlockedRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        BlockedRange {
            start,
            end,
            label: None,
        }
    }

    pub fn with_label(start: NaiveDate, end: NaiveDate, label: impl Into<String>) -> Self {
        BlockedRange {
            start,
            end,
            label: Some(label.into()),
        }
    }

    /// Whether `date` falls inside `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

/// The latest parsed, timestamped availability result for one listing.
///
/// Immutable once produced; a later sync supersedes it rather than
/// mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// Opaque identifier of the listing owning this calendar.
    pub listing_id: String,
    /// Sorted ascending by `start`. Overlaps are preserved as parsed.
    pub blocked_ranges: Vec<BlockedRange>,
    /// Capture time of the fetch/parse that produced this snapshot.
    pub synced_at: DateTime<Utc>,
}

impl AvailabilitySnapshot {
    pub fn new(listing_id: impl Into<String>, blocked_ranges: Vec<BlockedRange>) -> Self {
        AvailabilitySnapshot {
            listing_id: listing_id.into(),
            blocked_ranges,
            synced_at: Utc::now(),
        }
    }

    /// Time elapsed since this snapshot was captured.
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.synced_at
    }
}

/// Per-day availability, derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available: bool,
}
