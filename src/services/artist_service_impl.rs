//! `SeaORM` implementation of the `ArtistService` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::db::{InsertOutcome, Store};
use crate::domain::partition::{self, Partition};
use crate::domain::search::{SearchResults, name_matches};
use crate::domain::{ArtistId, BookingError, EntityKind, VenueId};
use crate::models::artist::{Artist, ArtistDetail, ArtistFields, ArtistListing, ArtistSummary};
use crate::models::show::VenueAppearance;
use crate::services::artist_service::ArtistService;

pub struct SeaOrmArtistService {
    store: Store,
}

impl SeaOrmArtistService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ArtistService for SeaOrmArtistService {
    async fn list(&self) -> Result<Vec<ArtistListing>, BookingError> {
        let artists = self.store.list_artists().await?;

        Ok(artists
            .into_iter()
            .map(|a| ArtistListing {
                id: ArtistId::new(a.id),
                name: a.name,
            })
            .collect())
    }

    async fn search(
        &self,
        term: &str,
        reference: DateTime<Utc>,
    ) -> Result<SearchResults<ArtistSummary>, BookingError> {
        let rows = self.store.list_artists_with_shows().await?;

        let matches = rows
            .into_iter()
            .filter(|(artist, _)| name_matches(&artist.name, term))
            .map(|(artist, shows)| ArtistSummary {
                id: ArtistId::new(artist.id),
                name: artist.name,
                num_upcoming_shows: partition::count_upcoming(
                    shows.iter().map(|s| s.start_time),
                    reference,
                ),
            })
            .collect();

        Ok(SearchResults::new(matches))
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Artist, BookingError> {
        self.store
            .get_artist(id.value())
            .await?
            .map(Artist::from)
            .ok_or_else(|| BookingError::not_found(EntityKind::Artist, id.value()))
    }

    async fn get_detail(
        &self,
        id: ArtistId,
        reference: DateTime<Utc>,
    ) -> Result<ArtistDetail, BookingError> {
        let artist = self.get_artist(id).await?;
        let shows = self.store.find_shows_by_artist(id.value()).await?;

        let booked = shows
            .into_iter()
            .filter_map(|(show, venue)| venue.map(|venue| (show, venue)));

        let partition = Partition::split(booked, reference, |(show, _)| show.start_time).map(
            |(show, venue)| VenueAppearance {
                venue_id: VenueId::new(venue.id),
                venue_name: venue.name,
                venue_image_link: venue.image_link,
                start_time: partition::format_start_time(&show.start_time),
            },
        );

        Ok(ArtistDetail {
            artist,
            past_shows_count: partition.past_count(),
            upcoming_shows_count: partition.upcoming_count(),
            past_shows: partition.past,
            upcoming_shows: partition.upcoming,
        })
    }

    async fn create(&self, fields: ArtistFields) -> Result<ArtistId, BookingError> {
        let fields = fields.normalized()?;

        match self.store.add_artist(&fields).await? {
            InsertOutcome::Inserted(id) => Ok(ArtistId::new(id)),
            InsertOutcome::Duplicate(existing) => {
                warn!(
                    "Rejected duplicate artist '{}' (matches ID {})",
                    fields.name, existing
                );
                Err(BookingError::duplicate(EntityKind::Artist, fields.name))
            }
        }
    }

    async fn update(&self, id: ArtistId, fields: ArtistFields) -> Result<(), BookingError> {
        let fields = fields.normalized()?;

        if self.store.update_artist(id.value(), &fields).await? {
            Ok(())
        } else {
            Err(BookingError::not_found(EntityKind::Artist, id.value()))
        }
    }

    async fn delete(&self, id: ArtistId) -> Result<(), BookingError> {
        match self.store.remove_artist(id.value()).await? {
            Some(shows_removed) => {
                info!("Artist {} deleted along with {} shows", id, shows_removed);
                Ok(())
            }
            None => Err(BookingError::not_found(EntityKind::Artist, id.value())),
        }
    }
}
