//! Templates service.

use async_trait::async_trait;
use matnight::templates::validate;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::templates::{
        data::NewTemplate,
        errors::TemplatesServiceError,
        records::{TemplateRecord, TemplateUuid},
        repository::PgTemplatesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgTemplatesService {
    db: Db,
    repository: PgTemplatesRepository,
}

impl PgTemplatesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTemplatesRepository::new(),
        }
    }
}

#[async_trait]
impl TemplatesService for PgTemplatesService {
    #[tracing::instrument(
        name = "templates.service.create_template",
        skip(self, template),
        fields(
            template_uuid = %template.uuid,
            facility_uuid = %template.facility_uuid
        ),
        err
    )]
    async fn create_template(
        &self,
        template: NewTemplate,
    ) -> Result<TemplateRecord, TemplatesServiceError> {
        let validated = validate(&template.mats)?;

        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_template(&mut tx, template).await?;

        tx.commit().await?;

        info!(
            template_uuid = %created.uuid,
            name = %created.name,
            mats = validated.all_mats().len(),
            "created template"
        );

        Ok(created)
    }

    async fn get_template(
        &self,
        template: TemplateUuid,
    ) -> Result<TemplateRecord, TemplatesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .find_template(&mut tx, template)
            .await?
            .ok_or(TemplatesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
/// Template persistence operations.
pub trait TemplatesService: Send + Sync {
    /// Validate and store a new template.
    async fn create_template(
        &self,
        template: NewTemplate,
    ) -> Result<TemplateRecord, TemplatesServiceError>;

    /// Retrieve a single template.
    async fn get_template(
        &self,
        template: TemplateUuid,
    ) -> Result<TemplateRecord, TemplatesServiceError>;
}
