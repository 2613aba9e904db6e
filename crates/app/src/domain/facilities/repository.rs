//! Facilities Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::facilities::{
    data::NewFacility,
    records::{FacilityRecord, FacilityUuid},
};

const CREATE_FACILITY_SQL: &str = include_str!("sql/create_facility.sql");
const FIND_FACILITY_SQL: &str = include_str!("sql/find_facility.sql");

/// PostgreSQL-backed facilities repository.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgFacilitiesRepository;

impl PgFacilitiesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_facility(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: NewFacility,
    ) -> Result<FacilityRecord, sqlx::Error> {
        query_as::<Postgres, FacilityRecord>(CREATE_FACILITY_SQL)
            .bind(facility.uuid.into_uuid())
            .bind(facility.name)
            .bind(facility.active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_facility(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
    ) -> Result<Option<FacilityRecord>, sqlx::Error> {
        query_as::<Postgres, FacilityRecord>(FIND_FACILITY_SQL)
            .bind(facility.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for FacilityRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FacilityUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
