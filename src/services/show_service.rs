//! Domain service for shows. Shows are only ever created or listed; they
//! disappear when their venue or artist is deleted.

use crate::domain::{BookingError, ShowId};
use crate::models::show::{NewShow, ShowListing};

#[async_trait::async_trait]
pub trait ShowService: Send + Sync {
    /// Every show in creation order. An empty store yields an empty list.
    async fn list(&self) -> Result<Vec<ShowListing>, BookingError>;

    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] when the artist or venue does not exist.
    async fn create(&self, show: NewShow) -> Result<ShowId, BookingError>;
}
