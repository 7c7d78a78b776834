use crate::entities::{artists, prelude::*, shows, venues};
use crate::models::show::NewShow;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, LoaderTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::ShowInsert;

pub type ShowWithParties = (shows::Model, Option<venues::Model>, Option<artists::Model>);

pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Shows::find().count(&self.conn).await
    }

    /// Every show in id order with its venue and artist.
    pub async fn list_with_parties(&self) -> Result<Vec<ShowWithParties>, DbErr> {
        let rows = Shows::find()
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await?;
        let venues = rows.load_one(Venues, &self.conn).await?;
        let artists = rows.load_one(Artists, &self.conn).await?;

        Ok(rows
            .into_iter()
            .zip(venues)
            .zip(artists)
            .map(|((show, venue), artist)| (show, venue, artist))
            .collect())
    }

    /// Shows booked at a venue, with the performing artist.
    pub async fn find_by_venue(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(shows::Model, Option<artists::Model>)>, DbErr> {
        Shows::find()
            .filter(shows::Column::VenueId.eq(venue_id))
            .order_by_asc(shows::Column::Id)
            .find_also_related(Artists)
            .all(&self.conn)
            .await
    }

    /// Shows performed by an artist, with the venue.
    pub async fn find_by_artist(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(shows::Model, Option<venues::Model>)>, DbErr> {
        Shows::find()
            .filter(shows::Column::ArtistId.eq(artist_id))
            .order_by_asc(shows::Column::Id)
            .find_also_related(Venues)
            .all(&self.conn)
            .await
    }

    pub async fn insert(&self, show: &NewShow) -> Result<ShowInsert, DbErr> {
        let txn = self.conn.begin().await?;

        if Artists::find_by_id(show.artist_id.value())
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(ShowInsert::MissingArtist);
        }
        if Venues::find_by_id(show.venue_id.value())
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(ShowInsert::MissingVenue);
        }

        let result = Shows::insert(shows::ActiveModel {
            id: NotSet,
            artist_id: Set(show.artist_id.value()),
            venue_id: Set(show.venue_id.value()),
            start_time: Set(show.start_time),
        })
        .exec(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "Added show {}: artist {} at venue {}",
            result.last_insert_id, show.artist_id, show.venue_id
        );
        Ok(ShowInsert::Inserted(result.last_insert_id))
    }
}
