//! Availability core for short-stay rental listings.
//!
//! A listing's reservations live in a remote iCalendar feed (the export
//! every major booking platform offers). This crate fetches that feed,
//! parses it into blocked date ranges, and answers the questions a
//! booking UI asks:
//!
//! - is this date free? ([`is_available`])
//! - what do the next N days look like? ([`build_calendar`])
//! - when is the next stay of at least N nights possible?
//!   ([`next_available_run`])
//!
//! [`AvailabilityCache`] owns the per-listing "last known good"
//! snapshot, revalidating roughly hourly and keeping stale data visible
//! when a sync fails. The listing store itself sits behind
//! [`ListingRepository`]; the engine reads only the feed URL off it.

pub mod availability;
pub mod config;
pub mod constants;
pub mod error;
pub mod feed;
pub mod listing;

pub use availability::{
    AvailabilityCache, AvailabilitySnapshot, AvailableRun, BlockedRange, DayAvailability,
};
pub use availability::query::{
    build_calendar, build_calendar_from, is_available, next_available_run,
    next_available_run_from, next_available_run_within,
};
pub use config::EstadiaConfig;
pub use error::{EstadiaError, EstadiaResult};
pub use feed::{FeedFetcher, HttpFeedFetcher, parse_feed, parse_feed_from};
pub use listing::{
    Currency, Listing, ListingDraft, ListingKind, ListingRepository, MemoryListingRepository,
    PropertyKind,
};
