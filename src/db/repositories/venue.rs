use crate::entities::{prelude::*, shows, venues};
use crate::models::venue::VenueFields;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::InsertOutcome;

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn active_model(fields: &VenueFields) -> venues::ActiveModel {
        venues::ActiveModel {
            id: NotSet,
            name: Set(fields.name.clone()),
            city: Set(fields.city.clone()),
            state: Set(fields.state.clone()),
            address: Set(fields.address.clone()),
            phone: Set(fields.phone.clone()),
            genres: Set(fields.genres.to_storage()),
            seeking_talent: Set(fields.seeking_talent),
            seeking_description: Set(fields.seeking_description.clone()),
            website: Set(fields.website.clone()),
            image_link: Set(fields.image_link.clone()),
            facebook_link: Set(fields.facebook_link.clone()),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<venues::Model>, DbErr> {
        Venues::find_by_id(id).one(&self.conn).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Venues::find().count(&self.conn).await
    }

    /// All venues in id order, each with its shows in id order.
    pub async fn list_with_shows(&self) -> Result<Vec<(venues::Model, Vec<shows::Model>)>, DbErr> {
        let rows = Venues::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.conn)
            .await?;
        let shows = rows
            .load_many(
                Shows::find().order_by_asc(shows::Column::Id),
                &self.conn,
            )
            .await?;

        Ok(rows.into_iter().zip(shows).collect())
    }

    /// Looks for a venue with the same name, city, state and address.
    pub async fn find_duplicate<C: ConnectionTrait>(
        conn: &C,
        fields: &VenueFields,
    ) -> Result<Option<venues::Model>, DbErr> {
        Venues::find()
            .filter(venues::Column::Name.eq(fields.name.as_str()))
            .filter(venues::Column::City.eq(fields.city.as_str()))
            .filter(venues::Column::State.eq(fields.state.as_str()))
            .filter(venues::Column::Address.eq(fields.address.as_str()))
            .one(conn)
            .await
    }

    /// Inserts unless a duplicate exists.
    ///
    /// The check and the insert share a transaction but not a lock, so two
    /// concurrent identical submissions can both pass the check.
    pub async fn insert(&self, fields: &VenueFields) -> Result<InsertOutcome, DbErr> {
        let txn = self.conn.begin().await?;

        if let Some(existing) = Self::find_duplicate(&txn, fields).await? {
            return Ok(InsertOutcome::Duplicate(existing.id));
        }

        let result = Venues::insert(Self::active_model(fields))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!("Added venue: {} (ID: {})", fields.name, result.last_insert_id);
        Ok(InsertOutcome::Inserted(result.last_insert_id))
    }

    /// Replaces every mutable field. Returns `false` when the venue is missing.
    pub async fn update(&self, id: i32, fields: &VenueFields) -> Result<bool, DbErr> {
        let txn = self.conn.begin().await?;

        if Venues::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        let mut model = Self::active_model(fields);
        model.id = Set(id);
        model.update(&txn).await?;

        txn.commit().await?;

        info!("Updated venue {}", id);
        Ok(true)
    }

    /// Deletes the venue and its shows in one transaction.
    /// Returns the number of shows removed, or `None` when the venue is missing.
    pub async fn delete(&self, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = self.conn.begin().await?;

        if Venues::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let shows = Shows::delete_many()
            .filter(shows::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;

        Venues::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            "Removed venue with ID: {} ({} shows)",
            id, shows.rows_affected
        );
        Ok(Some(shows.rows_affected))
    }
}
