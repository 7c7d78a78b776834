//! `SeaORM` implementation of the `ShowService` trait.

use async_trait::async_trait;

use crate::db::{ShowInsert, Store};
use crate::domain::partition::format_start_time;
use crate::domain::{ArtistId, BookingError, ShowId, VenueId};
use crate::models::show::{NewShow, ShowListing};
use crate::services::show_service::ShowService;

pub struct SeaOrmShowService {
    store: Store,
}

impl SeaOrmShowService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShowService for SeaOrmShowService {
    async fn list(&self) -> Result<Vec<ShowListing>, BookingError> {
        let rows = self.store.list_shows().await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue, artist)| {
                let (venue, artist) = (venue?, artist?);
                Some(ShowListing {
                    venue_id: VenueId::new(venue.id),
                    venue_name: venue.name,
                    artist_id: ArtistId::new(artist.id),
                    artist_name: artist.name,
                    artist_image_link: artist.image_link,
                    start_time: format_start_time(&show.start_time),
                })
            })
            .collect())
    }

    async fn create(&self, show: NewShow) -> Result<ShowId, BookingError> {
        match self.store.add_show(&show).await? {
            ShowInsert::Inserted(id) => Ok(ShowId::new(id)),
            ShowInsert::MissingArtist => Err(BookingError::validation(format!(
                "Artist {} does not exist",
                show.artist_id
            ))),
            ShowInsert::MissingVenue => Err(BookingError::validation(format!(
                "Venue {} does not exist",
                show.venue_id
            ))),
        }
    }
}
