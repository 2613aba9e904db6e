//! Guests Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    facilities::records::FacilityUuid,
    guests::{
        data::NewGuest,
        records::{GuestRecord, GuestUuid},
    },
};

const CREATE_GUEST_SQL: &str = include_str!("sql/create_guest.sql");
const FIND_GUEST_SQL: &str = include_str!("sql/find_guest.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgGuestsRepository;

impl PgGuestsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_guest(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        guest: NewGuest,
    ) -> Result<GuestRecord, sqlx::Error> {
        query_as::<Postgres, GuestRecord>(CREATE_GUEST_SQL)
            .bind(guest.uuid.into_uuid())
            .bind(guest.facility_uuid.into_uuid())
            .bind(guest.first_name)
            .bind(guest.last_name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_guest(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        guest: GuestUuid,
    ) -> Result<Option<GuestRecord>, sqlx::Error> {
        query_as::<Postgres, GuestRecord>(FIND_GUEST_SQL)
            .bind(guest.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for GuestRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: GuestUuid::from_uuid(row.try_get("uuid")?),
            facility_uuid: FacilityUuid::from_uuid(row.try_get("facility_uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
