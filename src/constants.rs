//! Default horizons and refresh cadence.

/// Days rendered by a booking calendar when the caller has no preference.
pub const DEFAULT_CALENDAR_DAYS: i64 = 90;

/// Forward window scanned when looking for the next open stay.
pub const SEARCH_HORIZON_DAYS: i64 = 180;

/// Minimum consecutive free nights that count as a bookable stay.
pub const DEFAULT_MIN_NIGHTS: i64 = 2;

/// Upstream feeds regenerate every few hours, so refreshing more often
/// than this re-downloads identical data.
pub const DEFAULT_FEED_TTL_SECS: u64 = 3600;
