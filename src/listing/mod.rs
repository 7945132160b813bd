//! Listing records and the repository seam to the hosted document store.
//!
//! The availability engine reads exactly one field off a listing: its
//! feed URL. The rest of the record exists so the repository trait is a
//! faithful model of the external store this library is embedded next
//! to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod memory;
mod repository;

pub use memory::MemoryListingRepository;
pub use repository::ListingRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Ars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Apartment,
    House,
    Ph,
    Office,
    Land,
    Local,
}

/// How a property is offered: sale, long-term rent, or short-stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Sale,
    Rent,
    Temporary,
}

/// A property listing as stored by the back-office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: u64,
    pub currency: Currency,
    pub property_kind: PropertyKind,
    pub listing_kind: ListingKind,
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_m2: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub airbnb_url: Option<String>,
    /// Calendar feed export for short-stay listings. Absent means "no
    /// calendar configured", which is a state rather than an error.
    pub ical_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// The calendar feed URL, if one is configured.
    pub fn feed_url(&self) -> Option<&str> {
        self.ical_url.as_deref()
    }

    /// Materialize a stored listing from a create payload.
    pub fn from_draft(id: String, draft: ListingDraft) -> Self {
        let now = Utc::now();
        Listing {
            id,
            title: draft.title,
            slug: draft.slug,
            description: draft.description,
            price: draft.price,
            currency: draft.currency,
            property_kind: draft.property_kind,
            listing_kind: draft.listing_kind,
            address: draft.address,
            neighborhood: draft.neighborhood,
            city: draft.city,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            area_m2: draft.area_m2,
            amenities: draft.amenities,
            images: draft.images,
            airbnb_url: draft.airbnb_url,
            ical_url: draft.ical_url,
            is_featured: draft.is_featured,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update payload, keeping id and creation time.
    pub fn apply_draft(&mut self, draft: ListingDraft) {
        let created_at = self.created_at;
        let id = std::mem::take(&mut self.id);
        *self = Listing::from_draft(id, draft);
        self.created_at = created_at;
    }
}

/// Create/update payload for a listing: everything the admin form
/// submits, minus the store-assigned id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub price: u64,
    pub currency: Currency,
    pub property_kind: PropertyKind,
    pub listing_kind: ListingKind,
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area_m2: f64,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub airbnb_url: Option<String>,
    pub ical_url: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
}
