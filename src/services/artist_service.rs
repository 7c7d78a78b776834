//! Domain service for artists.

use crate::domain::search::SearchResults;
use crate::domain::{ArtistId, BookingError};
use crate::models::artist::{Artist, ArtistDetail, ArtistFields, ArtistListing, ArtistSummary};
use chrono::{DateTime, Utc};

#[async_trait::async_trait]
pub trait ArtistService: Send + Sync {
    /// Flat artist directory in id order.
    async fn list(&self) -> Result<Vec<ArtistListing>, BookingError>;

    /// Artists whose name contains `term`, ignoring case.
    async fn search(
        &self,
        term: &str,
        reference: DateTime<Utc>,
    ) -> Result<SearchResults<ArtistSummary>, BookingError>;

    async fn get_artist(&self, id: ArtistId) -> Result<Artist, BookingError>;

    async fn get_detail(
        &self,
        id: ArtistId,
        reference: DateTime<Utc>,
    ) -> Result<ArtistDetail, BookingError>;

    /// # Errors
    ///
    /// - [`BookingError::Validation`] for missing or oversized fields
    /// - [`BookingError::Duplicate`] when name, city, state and phone match an existing artist
    async fn create(&self, fields: ArtistFields) -> Result<ArtistId, BookingError>;

    async fn update(&self, id: ArtistId, fields: ArtistFields) -> Result<(), BookingError>;

    async fn delete(&self, id: ArtistId) -> Result<(), BookingError>;
}
