//! Fetching and parsing of remote availability feeds.

pub mod fetch;
pub mod parse;

pub use fetch::{FeedFetcher, HttpFeedFetcher};
pub use parse::{parse_feed, parse_feed_from};
