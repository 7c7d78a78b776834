use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    ArtistService, SeaOrmArtistService, SeaOrmShowService, SeaOrmVenueService, ShowService,
    VenueService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub venue_service: Arc<dyn VenueService>,

    pub artist_service: Arc<dyn ArtistService>,

    pub show_service: Arc<dyn ShowService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    /// Wires the services over an already-open store.
    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let venue_service: Arc<dyn VenueService> =
            Arc::new(SeaOrmVenueService::new(store.clone()));
        let artist_service: Arc<dyn ArtistService> =
            Arc::new(SeaOrmArtistService::new(store.clone()));
        let show_service: Arc<dyn ShowService> = Arc::new(SeaOrmShowService::new(store.clone()));

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            venue_service,
            artist_service,
            show_service,
        }
    }
}
