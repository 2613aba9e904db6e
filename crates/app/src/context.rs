//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        checkins::{CheckinsService, PgCheckinsService},
        facilities::{FacilitiesService, PgFacilitiesService},
        guests::{GuestsService, PgGuestsService},
        templates::{PgTemplatesService, TemplatesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    /// The connection pool could not be created.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Every service, sharing one connection pool.
#[derive(Clone)]
pub struct AppContext {
    /// Facility service.
    pub facilities: Arc<dyn FacilitiesService>,
    /// Template service.
    pub templates: Arc<dyn TemplatesService>,
    /// Guest service.
    pub guests: Arc<dyn GuestsService>,
    /// Inventory and assignment service.
    pub checkins: Arc<dyn CheckinsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            facilities: Arc::new(PgFacilitiesService::new(db.clone())),
            templates: Arc::new(PgTemplatesService::new(db.clone())),
            guests: Arc::new(PgGuestsService::new(db.clone())),
            checkins: Arc::new(PgCheckinsService::new(db)),
        })
    }
}
