//! Domain service for venues: directory, search, detail pages and edits.

use crate::domain::search::SearchResults;
use crate::domain::{BookingError, VenueId};
use crate::models::venue::{Venue, VenueArea, VenueDetail, VenueFields, VenueSummary};
use chrono::{DateTime, Utc};

/// Venue operations. Every time-dependent read takes the reference instant
/// explicitly.
#[async_trait::async_trait]
pub trait VenueService: Send + Sync {
    /// Venues grouped by (state, city), with upcoming-show counts.
    /// An empty store yields an empty list.
    async fn list_grouped(&self, reference: DateTime<Utc>) -> Result<Vec<VenueArea>, BookingError>;

    /// Venues whose name contains `term`, ignoring case.
    async fn search(
        &self,
        term: &str,
        reference: DateTime<Utc>,
    ) -> Result<SearchResults<VenueSummary>, BookingError>;

    /// The editable record.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist.
    async fn get_venue(&self, id: VenueId) -> Result<Venue, BookingError>;

    /// The venue with its shows split into past and upcoming.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the venue does not exist.
    async fn get_detail(
        &self,
        id: VenueId,
        reference: DateTime<Utc>,
    ) -> Result<VenueDetail, BookingError>;

    /// # Errors
    ///
    /// - [`BookingError::Validation`] for missing or oversized fields
    /// - [`BookingError::Duplicate`] when name, city, state and address match an existing venue
    async fn create(&self, fields: VenueFields) -> Result<VenueId, BookingError>;

    /// Replaces every mutable field.
    async fn update(&self, id: VenueId, fields: VenueFields) -> Result<(), BookingError>;

    /// Deletes the venue together with its shows.
    async fn delete(&self, id: VenueId) -> Result<(), BookingError>;
}
