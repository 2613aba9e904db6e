//! Guests service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::guests::{
        data::NewGuest,
        errors::GuestsServiceError,
        records::{GuestRecord, GuestUuid},
        repository::PgGuestsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgGuestsService {
    db: Db,
    repository: PgGuestsRepository,
}

impl PgGuestsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgGuestsRepository::new(),
        }
    }
}

#[async_trait]
impl GuestsService for PgGuestsService {
    #[tracing::instrument(
        name = "guests.service.create_guest",
        skip(self, guest),
        fields(guest_uuid = %guest.uuid, facility_uuid = %guest.facility_uuid),
        err
    )]
    async fn create_guest(&self, guest: NewGuest) -> Result<GuestRecord, GuestsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_guest(&mut tx, guest).await?;

        tx.commit().await?;

        info!(guest_uuid = %created.uuid, "created guest");

        Ok(created)
    }

    async fn get_guest(&self, guest: GuestUuid) -> Result<GuestRecord, GuestsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .find_guest(&mut tx, guest)
            .await?
            .ok_or(GuestsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
/// Guest registry operations.
pub trait GuestsService: Send + Sync {
    /// Register a guest with a facility.
    async fn create_guest(&self, guest: NewGuest) -> Result<GuestRecord, GuestsServiceError>;

    /// Retrieve a single guest.
    async fn get_guest(&self, guest: GuestUuid) -> Result<GuestRecord, GuestsServiceError>;
}
