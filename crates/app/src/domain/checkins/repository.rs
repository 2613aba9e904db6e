//! Checkins Repository

use std::str::FromStr;

use jiff::civil::Date;
use jiff_sqlx::{Date as SqlxDate, Time as SqlxTime, Timestamp as SqlxTimestamp};
use matnight::{
    assignment::{MatSlot, OccupantDetails},
    features::MatFeatures,
    inventory::PlannedMat,
};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    checkins::records::{CheckinRecord, CheckinUuid},
    facilities::records::FacilityUuid,
    guests::records::GuestUuid,
};

const CREATE_CHECKINS_SQL: &str = include_str!("sql/create_checkins.sql");
const LOCK_NIGHT_SQL: &str = include_str!("sql/lock_night.sql");
const COUNT_NIGHT_CHECKINS_SQL: &str = include_str!("sql/count_night_checkins.sql");
const LIST_NIGHT_CHECKINS_SQL: &str = include_str!("sql/list_night_checkins.sql");
const LOCK_CHECKIN_SQL: &str = include_str!("sql/lock_checkin.sql");
const LOCK_CHECKINS_SQL: &str = include_str!("sql/lock_checkins.sql");
const FIND_GUEST_CHECKIN_SQL: &str = include_str!("sql/find_guest_checkin.sql");
const UPDATE_CHECKIN_SLOT_SQL: &str = include_str!("sql/update_checkin_slot.sql");

const COLUMN_MAT_NUMBER: &str = "mat_number";
const COLUMN_PAYMENT_AMOUNT: &str = "payment_amount";
const COLUMN_FEATURES: &str = "features";

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCheckinsRepository;

impl PgCheckinsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Serialize inventory changes for one night until the transaction ends.
    pub(crate) async fn lock_night(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        date: Date,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_NIGHT_SQL)
            .bind(facility.into_uuid())
            .bind(SqlxDate::from(date))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn count_night_checkins(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        date: Date,
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_NIGHT_CHECKINS_SQL)
            .bind(facility.into_uuid())
            .bind(SqlxDate::from(date))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }

    #[tracing::instrument(
        name = "checkins.repository.create_checkins",
        skip(self, tx, mats),
        fields(mat_count = mats.len()),
        err
    )]
    pub(crate) async fn create_checkins(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        date: Date,
        mats: &[PlannedMat],
    ) -> Result<Vec<CheckinRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = mats
            .iter()
            .map(|_| CheckinUuid::new().into_uuid())
            .collect();

        let mat_numbers: Vec<i64> = mats
            .iter()
            .map(|mat| i64::from(mat.mat_number))
            .collect();

        let features: Vec<String> = mats
            .iter()
            .map(|mat| mat.features.to_tag_string().unwrap_or_default())
            .collect();

        let created = query_as::<Postgres, CheckinRecord>(CREATE_CHECKINS_SQL)
            .bind(&uuids)
            .bind(facility.into_uuid())
            .bind(SqlxDate::from(date))
            .bind(&mat_numbers)
            .bind(&features)
            .fetch_all(&mut **tx)
            .await?;

        debug!(created_count = created.len(), "created checkins");

        Ok(created)
    }

    pub(crate) async fn list_night_checkins(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        date: Date,
    ) -> Result<Vec<CheckinRecord>, sqlx::Error> {
        query_as::<Postgres, CheckinRecord>(LIST_NIGHT_CHECKINS_SQL)
            .bind(facility.into_uuid())
            .bind(SqlxDate::from(date))
            .fetch_all(&mut **tx)
            .await
    }

    /// Fetch a checkin and hold its row lock until the transaction ends.
    pub(crate) async fn lock_checkin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkin: CheckinUuid,
    ) -> Result<Option<CheckinRecord>, sqlx::Error> {
        query_as::<Postgres, CheckinRecord>(LOCK_CHECKIN_SQL)
            .bind(checkin.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Lock several checkins in UUID order so concurrent callers cannot deadlock.
    pub(crate) async fn lock_checkins(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkins: &[CheckinUuid],
    ) -> Result<Vec<CheckinRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = checkins.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, CheckinRecord>(LOCK_CHECKINS_SQL)
            .bind(&uuids)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_guest_checkin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        date: Date,
        guest: GuestUuid,
    ) -> Result<Option<CheckinRecord>, sqlx::Error> {
        query_as::<Postgres, CheckinRecord>(FIND_GUEST_CHECKIN_SQL)
            .bind(facility.into_uuid())
            .bind(SqlxDate::from(date))
            .bind(guest.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Persist the occupancy and occupant details of a slot.
    #[tracing::instrument(
        name = "checkins.repository.update_slot",
        skip(self, tx, slot),
        fields(
            checkin_uuid = %checkin,
            assigned = slot.occupancy.is_assigned()
        ),
        err
    )]
    pub(crate) async fn update_slot(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        checkin: CheckinUuid,
        slot: &MatSlot<GuestUuid>,
    ) -> Result<CheckinRecord, sqlx::Error> {
        let OccupantDetails {
            comments,
            payment_type,
            payment_amount,
            shower_time,
            wakeup_time,
        } = &slot.details;

        let payment_amount = payment_amount
            .map(|amount| try_i64_from_u64(amount, COLUMN_PAYMENT_AMOUNT))
            .transpose()?;

        let updated = query_as::<Postgres, CheckinRecord>(UPDATE_CHECKIN_SLOT_SQL)
            .bind(checkin.into_uuid())
            .bind(slot.occupancy.guest().map(GuestUuid::into_uuid))
            .bind(comments.as_deref())
            .bind(payment_type.as_deref())
            .bind(payment_amount)
            .bind(shower_time.map(SqlxTime::from))
            .bind(wakeup_time.map(SqlxTime::from))
            .fetch_one(&mut **tx)
            .await?;

        debug!(mat_number = updated.mat_number, "updated checkin slot");

        Ok(updated)
    }
}

fn try_i64_from_u64(value: u64, column: &'static str) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn try_get_mat_number(row: &PgRow) -> Result<u32, sqlx::Error> {
    let mat_number: i64 = row.try_get(COLUMN_MAT_NUMBER)?;

    u32::try_from(mat_number).map_err(|e| sqlx::Error::ColumnDecode {
        index: COLUMN_MAT_NUMBER.to_string(),
        source: Box::new(e),
    })
}

fn try_get_payment_amount(row: &PgRow) -> Result<Option<u64>, sqlx::Error> {
    let amount: Option<i64> = row.try_get(COLUMN_PAYMENT_AMOUNT)?;

    amount
        .map(|amount| {
            u64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
                index: COLUMN_PAYMENT_AMOUNT.to_string(),
                source: Box::new(e),
            })
        })
        .transpose()
}

fn try_get_features(row: &PgRow) -> Result<MatFeatures, sqlx::Error> {
    let tags: Option<String> = row.try_get(COLUMN_FEATURES)?;

    tags.as_deref()
        .map_or(Ok(MatFeatures::empty()), MatFeatures::from_str)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: COLUMN_FEATURES.to_string(),
            source: Box::new(e),
        })
}

impl<'r> FromRow<'r, PgRow> for CheckinRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let guest_uuid: Option<Uuid> = row.try_get("guest_uuid")?;
        let shower_time: Option<SqlxTime> = row.try_get("shower_time")?;
        let wakeup_time: Option<SqlxTime> = row.try_get("wakeup_time")?;

        Ok(Self {
            uuid: CheckinUuid::from_uuid(row.try_get("uuid")?),
            facility_uuid: FacilityUuid::from_uuid(row.try_get("facility_uuid")?),
            checkin_date: row.try_get::<SqlxDate, _>("checkin_date")?.to_jiff(),
            mat_number: try_get_mat_number(row)?,
            guest_uuid: guest_uuid.map(GuestUuid::from_uuid),
            features: try_get_features(row)?,
            details: OccupantDetails {
                comments: row.try_get("comments")?,
                payment_type: row.try_get("payment_type")?,
                payment_amount: try_get_payment_amount(row)?,
                shower_time: shower_time.map(|time| time.to_jiff()),
                wakeup_time: wakeup_time.map(|time| time.to_jiff()),
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
