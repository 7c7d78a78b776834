use crate::entities::{artists, prelude::*, shows};
use crate::models::artist::ArtistFields;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use super::InsertOutcome;

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn active_model(fields: &ArtistFields) -> artists::ActiveModel {
        artists::ActiveModel {
            id: NotSet,
            name: Set(fields.name.clone()),
            city: Set(fields.city.clone()),
            state: Set(fields.state.clone()),
            phone: Set(fields.phone.clone()),
            genres: Set(fields.genres.to_storage()),
            seeking_venue: Set(fields.seeking_venue),
            seeking_description: Set(fields.seeking_description.clone()),
            image_link: Set(fields.image_link.clone()),
            website: Set(fields.website.clone()),
            facebook_link: Set(fields.facebook_link.clone()),
        }
    }

    pub async fn get(&self, id: i32) -> Result<Option<artists::Model>, DbErr> {
        Artists::find_by_id(id).one(&self.conn).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Artists::find().count(&self.conn).await
    }

    pub async fn list(&self) -> Result<Vec<artists::Model>, DbErr> {
        Artists::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.conn)
            .await
    }

    pub async fn list_with_shows(
        &self,
    ) -> Result<Vec<(artists::Model, Vec<shows::Model>)>, DbErr> {
        let rows = self.list().await?;
        let shows = rows
            .load_many(
                Shows::find().order_by_asc(shows::Column::Id),
                &self.conn,
            )
            .await?;

        Ok(rows.into_iter().zip(shows).collect())
    }

    /// Looks for an artist with the same name, city, state and phone.
    /// A missing phone only matches another missing phone.
    pub async fn find_duplicate<C: ConnectionTrait>(
        conn: &C,
        fields: &ArtistFields,
    ) -> Result<Option<artists::Model>, DbErr> {
        let phone = match &fields.phone {
            Some(phone) => artists::Column::Phone.eq(phone.as_str()),
            None => artists::Column::Phone.is_null(),
        };

        Artists::find()
            .filter(artists::Column::Name.eq(fields.name.as_str()))
            .filter(artists::Column::City.eq(fields.city.as_str()))
            .filter(artists::Column::State.eq(fields.state.as_str()))
            .filter(phone)
            .one(conn)
            .await
    }

    pub async fn insert(&self, fields: &ArtistFields) -> Result<InsertOutcome, DbErr> {
        let txn = self.conn.begin().await?;

        if let Some(existing) = Self::find_duplicate(&txn, fields).await? {
            return Ok(InsertOutcome::Duplicate(existing.id));
        }

        let result = Artists::insert(Self::active_model(fields))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!("Added artist: {} (ID: {})", fields.name, result.last_insert_id);
        Ok(InsertOutcome::Inserted(result.last_insert_id))
    }

    pub async fn update(&self, id: i32, fields: &ArtistFields) -> Result<bool, DbErr> {
        let txn = self.conn.begin().await?;

        if Artists::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        let mut model = Self::active_model(fields);
        model.id = Set(id);
        model.update(&txn).await?;

        txn.commit().await?;

        info!("Updated artist {}", id);
        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = self.conn.begin().await?;

        if Artists::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }

        let shows = Shows::delete_many()
            .filter(shows::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;

        Artists::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            "Removed artist with ID: {} ({} shows)",
            id, shows.rows_affected
        );
        Ok(Some(shows.rows_affected))
    }
}
