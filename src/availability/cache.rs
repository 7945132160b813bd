//! In-memory, per-listing availability cache.
//!
//! Latest-wins: each successful sync replaces the listing's snapshot,
//! and a failed sync leaves the previous one in place so a transient
//! network hiccup never erases availability the user could already see.
//! Single-flight gating for concurrent refreshes of the same listing is
//! the caller's responsibility; methods take `&mut self` and commit a
//! snapshot only after their own fetch has completed.

use std::collections::HashMap;

use chrono::Duration;
use tracing::debug;

use crate::availability::snapshot::AvailabilitySnapshot;
use crate::config::EstadiaConfig;
use crate::constants::DEFAULT_FEED_TTL_SECS;
use crate::error::EstadiaResult;
use crate::feed::fetch::FeedFetcher;
use crate::feed::parse::parse_feed;
use crate::listing::Listing;

/// Owns the "last known good" snapshot per listing for one session.
pub struct AvailabilityCache<F: FeedFetcher> {
    fetcher: F,
    ttl: Duration,
    snapshots: HashMap<String, AvailabilitySnapshot>,
}

impl<F: FeedFetcher> AvailabilityCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_ttl(fetcher, Duration::seconds(DEFAULT_FEED_TTL_SECS as i64))
    }

    /// Use a custom staleness window instead of the default hour.
    pub fn with_ttl(fetcher: F, ttl: Duration) -> Self {
        AvailabilityCache {
            fetcher,
            ttl,
            snapshots: HashMap::new(),
        }
    }

    pub fn from_config(fetcher: F, config: &EstadiaConfig) -> Self {
        Self::with_ttl(fetcher, config.feed_ttl())
    }

    /// The most recent successfully synced snapshot, however stale.
    pub fn last_known(&self, listing_id: &str) -> Option<&AvailabilitySnapshot> {
        self.snapshots.get(listing_id)
    }

    /// Cached snapshot if younger than the staleness window, otherwise a
    /// fresh fetch+parse.
    pub async fn get_snapshot(
        &mut self,
        listing_id: &str,
        feed_url: &str,
    ) -> EstadiaResult<AvailabilitySnapshot> {
        if let Some(snapshot) = self.snapshots.get(listing_id) {
            if snapshot.age() < self.ttl {
                return Ok(snapshot.clone());
            }
        }

        self.refresh(listing_id, feed_url).await
    }

    /// Unconditional fetch+parse. On error the previous snapshot (if
    /// any) stays cached and is reachable via [`last_known`].
    ///
    /// [`last_known`]: AvailabilityCache::last_known
    pub async fn refresh(
        &mut self,
        listing_id: &str,
        feed_url: &str,
    ) -> EstadiaResult<AvailabilitySnapshot> {
        let content = self.fetcher.fetch(feed_url).await?;
        let blocked_ranges = parse_feed(&content)?;

        let snapshot = AvailabilitySnapshot::new(listing_id, blocked_ranges);
        debug!(
            listing_id,
            ranges = snapshot.blocked_ranges.len(),
            "refreshed availability snapshot"
        );

        self.snapshots
            .insert(listing_id.to_string(), snapshot.clone());

        Ok(snapshot)
    }

    /// Snapshot for a listing record, or `Ok(None)` when the listing has
    /// no calendar feed configured. No-feed is a state, not an error: no
    /// fetch is attempted.
    pub async fn snapshot_for(
        &mut self,
        listing: &Listing,
    ) -> EstadiaResult<Option<AvailabilitySnapshot>> {
        match listing.feed_url() {
            Some(feed_url) => self.get_snapshot(&listing.id, feed_url).await.map(Some),
            None => Ok(None),
        }
    }
}
