//! `SeaORM` implementation of the `VenueService` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::db::{InsertOutcome, Store};
use crate::domain::geo::{LocatedVenue, group_by_location};
use crate::domain::partition::{self, Partition};
use crate::domain::search::{SearchResults, name_matches};
use crate::domain::{ArtistId, BookingError, EntityKind, VenueId};
use crate::entities::{shows, venues};
use crate::models::show::ArtistAppearance;
use crate::models::venue::{Venue, VenueArea, VenueDetail, VenueFields, VenueSummary};
use crate::services::venue_service::VenueService;

pub struct SeaOrmVenueService {
    store: Store,
}

impl SeaOrmVenueService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn summarize(
        venue: &venues::Model,
        shows: &[shows::Model],
        reference: DateTime<Utc>,
    ) -> VenueSummary {
        VenueSummary {
            id: VenueId::new(venue.id),
            name: venue.name.clone(),
            num_upcoming_shows: partition::count_upcoming(
                shows.iter().map(|s| s.start_time),
                reference,
            ),
        }
    }
}

#[async_trait]
impl VenueService for SeaOrmVenueService {
    async fn list_grouped(&self, reference: DateTime<Utc>) -> Result<Vec<VenueArea>, BookingError> {
        let rows = self.store.list_venues_with_shows().await?;

        let located = rows
            .iter()
            .map(|(venue, shows)| LocatedVenue {
                city: venue.city.clone(),
                state: venue.state.clone(),
                summary: Self::summarize(venue, shows, reference),
            })
            .collect();

        Ok(group_by_location(located))
    }

    async fn search(
        &self,
        term: &str,
        reference: DateTime<Utc>,
    ) -> Result<SearchResults<VenueSummary>, BookingError> {
        let rows = self.store.list_venues_with_shows().await?;

        let matches = rows
            .iter()
            .filter(|(venue, _)| name_matches(&venue.name, term))
            .map(|(venue, shows)| Self::summarize(venue, shows, reference))
            .collect();

        Ok(SearchResults::new(matches))
    }

    async fn get_venue(&self, id: VenueId) -> Result<Venue, BookingError> {
        self.store
            .get_venue(id.value())
            .await?
            .map(Venue::from)
            .ok_or_else(|| BookingError::not_found(EntityKind::Venue, id.value()))
    }

    async fn get_detail(
        &self,
        id: VenueId,
        reference: DateTime<Utc>,
    ) -> Result<VenueDetail, BookingError> {
        let venue = self.get_venue(id).await?;
        let shows = self.store.find_shows_by_venue(id.value()).await?;

        let booked = shows
            .into_iter()
            .filter_map(|(show, artist)| artist.map(|artist| (show, artist)));

        let partition = Partition::split(booked, reference, |(show, _)| show.start_time).map(
            |(show, artist)| ArtistAppearance {
                artist_id: ArtistId::new(artist.id),
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: partition::format_start_time(&show.start_time),
            },
        );

        Ok(VenueDetail {
            venue,
            past_shows_count: partition.past_count(),
            upcoming_shows_count: partition.upcoming_count(),
            past_shows: partition.past,
            upcoming_shows: partition.upcoming,
        })
    }

    async fn create(&self, fields: VenueFields) -> Result<VenueId, BookingError> {
        let fields = fields.normalized()?;

        match self.store.add_venue(&fields).await? {
            InsertOutcome::Inserted(id) => Ok(VenueId::new(id)),
            InsertOutcome::Duplicate(existing) => {
                warn!(
                    "Rejected duplicate venue '{}' (matches ID {})",
                    fields.name, existing
                );
                Err(BookingError::duplicate(EntityKind::Venue, fields.name))
            }
        }
    }

    async fn update(&self, id: VenueId, fields: VenueFields) -> Result<(), BookingError> {
        let fields = fields.normalized()?;

        if self.store.update_venue(id.value(), &fields).await? {
            Ok(())
        } else {
            Err(BookingError::not_found(EntityKind::Venue, id.value()))
        }
    }

    async fn delete(&self, id: VenueId) -> Result<(), BookingError> {
        match self.store.remove_venue(id.value()).await? {
            Some(shows_removed) => {
                info!("Venue {} deleted along with {} shows", id, shows_removed);
                Ok(())
            }
            None => Err(BookingError::not_found(EntityKind::Venue, id.value())),
        }
    }
}
