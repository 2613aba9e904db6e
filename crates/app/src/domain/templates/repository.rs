//! Templates Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use matnight::templates::TemplateMats;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    facilities::records::FacilityUuid,
    templates::{
        data::NewTemplate,
        records::{TemplateRecord, TemplateUuid},
    },
};

const CREATE_TEMPLATE_SQL: &str = include_str!("sql/create_template.sql");
const FIND_TEMPLATE_SQL: &str = include_str!("sql/find_template.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTemplatesRepository;

impl PgTemplatesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_template(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        template: NewTemplate,
    ) -> Result<TemplateRecord, sqlx::Error> {
        let TemplateMats {
            all_mats,
            handicap_mats,
            socket_mats,
            work_mats,
        } = template.mats;

        query_as::<Postgres, TemplateRecord>(CREATE_TEMPLATE_SQL)
            .bind(template.uuid.into_uuid())
            .bind(template.facility_uuid.into_uuid())
            .bind(template.name)
            .bind(all_mats)
            .bind(handicap_mats)
            .bind(socket_mats)
            .bind(work_mats)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_template(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        template: TemplateUuid,
    ) -> Result<Option<TemplateRecord>, sqlx::Error> {
        query_as::<Postgres, TemplateRecord>(FIND_TEMPLATE_SQL)
            .bind(template.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TemplateRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TemplateUuid::from_uuid(row.try_get("uuid")?),
            facility_uuid: FacilityUuid::from_uuid(row.try_get("facility_uuid")?),
            name: row.try_get("name")?,
            mats: TemplateMats {
                all_mats: row.try_get("all_mats")?,
                handicap_mats: row.try_get("handicap_mats")?,
                socket_mats: row.try_get("socket_mats")?,
                work_mats: row.try_get("work_mats")?,
            },
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
