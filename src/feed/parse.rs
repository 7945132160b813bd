//! Feed parsing using the icalendar crate's parser.
//!
//! Reservation feeds are plain VCALENDAR documents whose VEVENTs mark
//! booked or blocked periods. Each event is reduced to a calendar-day
//! [`BlockedRange`]; time-of-day in the feed is informative only.

use chrono::{Local, NaiveDate};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::warn;

use crate::availability::snapshot::BlockedRange;
use crate::error::{EstadiaError, EstadiaResult};

/// Parse raw feed text into blocked ranges, dropping events that ended
/// before today and sorting the rest ascending by start.
pub fn parse_feed(content: &str) -> EstadiaResult<Vec<BlockedRange>> {
    parse_feed_from(content, Local::now().date_naive())
}

/// Like [`parse_feed`], with an explicit reference day.
///
/// Events whose `end` date is strictly before `today` are discarded;
/// in-progress events (`end >= today`) are retained so a stay that is
/// currently underway still shows as blocked.
pub fn parse_feed_from(content: &str, today: NaiveDate) -> EstadiaResult<Vec<BlockedRange>> {
    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| EstadiaError::FeedParse(e.to_string()))?;

    let mut ranges: Vec<BlockedRange> = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(event_range)
        .filter(|range| range.end >= today)
        .collect();

    ranges.sort_by_key(|range| range.start);

    Ok(ranges)
}

/// Extract a blocked range from one VEVENT.
///
/// A corrupt event must not hide availability for the whole listing, so
/// anything without a usable DTSTART/DTEND is skipped rather than
/// failing the parse.
fn event_range(vevent: &Component<'_>) -> Option<BlockedRange> {
    let start = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(day_of);
    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(day_of);

    let (Some(start), Some(end)) = (start, end) else {
        let uid = vevent.find_prop("UID").map(|p| p.val.to_string());
        warn!(
            uid = uid.as_deref().unwrap_or("<none>"),
            "skipping feed event without a usable start/end"
        );
        return None;
    };

    if start >= end {
        warn!(%start, %end, "skipping feed event with a degenerate date range");
        return None;
    }

    let label = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());

    Some(BlockedRange { start, end, label })
}

/// Reduce an event instant to the wall-clock date it states.
///
/// The query engine is calendar-day granular, so a range ending at some
/// time on day D means "open again starting day D".
fn day_of(dpt: DatePerhapsTime) -> NaiveDate {
    match dpt {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(dt) => dt.date_naive(),
            CalendarDateTime::Floating(naive) => naive.date(),
            CalendarDateTime::WithTimezone { date_time, .. } => date_time.date(),
        },
    }
}
