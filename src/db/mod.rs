use crate::entities::{artists, shows, venues};
use crate::models::artist::ArtistFields;
use crate::models::show::NewShow;
use crate::models::venue::VenueFields;
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::show::ShowWithParties;
pub use repositories::{InsertOutcome, ShowInsert};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    /// In-memory database on a single connection, so every query sees the
    /// same schema.
    pub async fn in_memory() -> Result<Self> {
        Self::with_pool_options("sqlite::memory:", 1, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = db_url.contains(":memory:");

        // Each pooled connection to an in-memory database sees its own empty database
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        if !in_memory {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        if !in_memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        conn.execute_unprepared("PRAGMA foreign_keys = ON").await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn get_venue(&self, id: i32) -> Result<Option<venues::Model>, DbErr> {
        self.venue_repo().get(id).await
    }

    pub async fn list_venues_with_shows(
        &self,
    ) -> Result<Vec<(venues::Model, Vec<shows::Model>)>, DbErr> {
        self.venue_repo().list_with_shows().await
    }

    pub async fn add_venue(&self, fields: &VenueFields) -> Result<InsertOutcome, DbErr> {
        self.venue_repo().insert(fields).await
    }

    pub async fn update_venue(&self, id: i32, fields: &VenueFields) -> Result<bool, DbErr> {
        self.venue_repo().update(id, fields).await
    }

    pub async fn remove_venue(&self, id: i32) -> Result<Option<u64>, DbErr> {
        self.venue_repo().delete(id).await
    }

    pub async fn venue_count(&self) -> Result<u64, DbErr> {
        self.venue_repo().count().await
    }

    // Artists

    pub async fn get_artist(&self, id: i32) -> Result<Option<artists::Model>, DbErr> {
        self.artist_repo().get(id).await
    }

    pub async fn list_artists(&self) -> Result<Vec<artists::Model>, DbErr> {
        self.artist_repo().list().await
    }

    pub async fn list_artists_with_shows(
        &self,
    ) -> Result<Vec<(artists::Model, Vec<shows::Model>)>, DbErr> {
        self.artist_repo().list_with_shows().await
    }

    pub async fn add_artist(&self, fields: &ArtistFields) -> Result<InsertOutcome, DbErr> {
        self.artist_repo().insert(fields).await
    }

    pub async fn update_artist(&self, id: i32, fields: &ArtistFields) -> Result<bool, DbErr> {
        self.artist_repo().update(id, fields).await
    }

    pub async fn remove_artist(&self, id: i32) -> Result<Option<u64>, DbErr> {
        self.artist_repo().delete(id).await
    }

    pub async fn artist_count(&self) -> Result<u64, DbErr> {
        self.artist_repo().count().await
    }

    // Shows

    pub async fn list_shows(&self) -> Result<Vec<ShowWithParties>, DbErr> {
        self.show_repo().list_with_parties().await
    }

    pub async fn find_shows_by_venue(
        &self,
        venue_id: i32,
    ) -> Result<Vec<(shows::Model, Option<artists::Model>)>, DbErr> {
        self.show_repo().find_by_venue(venue_id).await
    }

    pub async fn find_shows_by_artist(
        &self,
        artist_id: i32,
    ) -> Result<Vec<(shows::Model, Option<venues::Model>)>, DbErr> {
        self.show_repo().find_by_artist(artist_id).await
    }

    pub async fn add_show(&self, show: &NewShow) -> Result<ShowInsert, DbErr> {
        self.show_repo().insert(show).await
    }

    pub async fn show_count(&self) -> Result<u64, DbErr> {
        self.show_repo().count().await
    }
}
