//! HashMap-backed listing repository.
//!
//! Used by tests and as a stand-in collaborator when no document store
//! is wired up.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::repository::ListingRepository;
use super::{Listing, ListingDraft};
use crate::error::{EstadiaError, EstadiaResult};

#[derive(Default)]
pub struct MemoryListingRepository {
    listings: Mutex<HashMap<String, Listing>>,
    next_id: AtomicU64,
}

impl MemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Listing>> {
        self.listings.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Active listings, newest first.
    fn active_sorted(&self) -> Vec<Listing> {
        let mut listings: Vec<Listing> = self
            .lock()
            .values()
            .filter(|l| l.is_active)
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings
    }
}

#[async_trait]
impl ListingRepository for MemoryListingRepository {
    async fn get_by_id(&self, id: &str) -> EstadiaResult<Option<Listing>> {
        Ok(self.lock().get(id).cloned())
    }

    async fn get_active(&self) -> EstadiaResult<Vec<Listing>> {
        Ok(self.active_sorted())
    }

    async fn get_featured(&self, limit: usize) -> EstadiaResult<Vec<Listing>> {
        let mut listings = self.active_sorted();
        listings.retain(|l| l.is_featured);
        listings.truncate(limit);
        Ok(listings)
    }

    async fn create(&self, draft: ListingDraft) -> EstadiaResult<Listing> {
        let id = format!("listing-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let listing = Listing::from_draft(id.clone(), draft);
        self.lock().insert(id, listing.clone());
        Ok(listing)
    }

    async fn update(&self, id: &str, draft: ListingDraft) -> EstadiaResult<Listing> {
        let mut listings = self.lock();
        let listing = listings
            .get_mut(id)
            .ok_or_else(|| EstadiaError::ListingNotFound(id.to_string()))?;
        listing.apply_draft(draft);
        Ok(listing.clone())
    }

    async fn soft_delete(&self, id: &str) -> EstadiaResult<()> {
        let mut listings = self.lock();
        let listing = listings
            .get_mut(id)
            .ok_or_else(|| EstadiaError::ListingNotFound(id.to_string()))?;
        listing.is_active = false;
        listing.updated_at = Utc::now();
        Ok(())
    }

    async fn hard_delete(&self, id: &str) -> EstadiaResult<()> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| EstadiaError::ListingNotFound(id.to_string()))
    }
}
