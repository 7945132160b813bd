//! Repository interface over the external listing store.

use async_trait::async_trait;

use super::{Listing, ListingDraft};
use crate::error::EstadiaResult;

/// Access to the hosted document store holding property listings.
///
/// The store itself (schema, indexes, auth) is an external collaborator;
/// this trait is the whole surface the library relies on.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> EstadiaResult<Option<Listing>>;

    /// Active listings, newest first.
    async fn get_active(&self) -> EstadiaResult<Vec<Listing>>;

    /// Active, featured listings, newest first, at most `limit`.
    async fn get_featured(&self, limit: usize) -> EstadiaResult<Vec<Listing>>;

    async fn create(&self, draft: ListingDraft) -> EstadiaResult<Listing>;

    async fn update(&self, id: &str, draft: ListingDraft) -> EstadiaResult<Listing>;

    /// Deactivate without deleting; the record stays addressable by id.
    async fn soft_delete(&self, id: &str) -> EstadiaResult<()>;

    async fn hard_delete(&self, id: &str) -> EstadiaResult<()>;
}
