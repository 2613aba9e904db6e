//! Facilities service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::facilities::{
        data::NewFacility,
        errors::FacilitiesServiceError,
        records::{FacilityRecord, FacilityUuid},
        repository::PgFacilitiesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFacilitiesService {
    db: Db,
    repository: PgFacilitiesRepository,
}

impl PgFacilitiesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFacilitiesRepository::new(),
        }
    }
}

#[async_trait]
impl FacilitiesService for PgFacilitiesService {
    #[tracing::instrument(
        name = "facilities.service.create_facility",
        skip(self, facility),
        fields(facility_uuid = %facility.uuid),
        err
    )]
    async fn create_facility(
        &self,
        facility: NewFacility,
    ) -> Result<FacilityRecord, FacilitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_facility(&mut tx, facility).await?;

        tx.commit().await?;

        info!(facility_uuid = %created.uuid, name = %created.name, "created facility");

        Ok(created)
    }

    async fn get_facility(
        &self,
        facility: FacilityUuid,
    ) -> Result<FacilityRecord, FacilitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .repository
            .find_facility(&mut tx, facility)
            .await?
            .ok_or(FacilitiesServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
/// Facility persistence operations.
pub trait FacilitiesService: Send + Sync {
    /// Creates a new facility.
    async fn create_facility(
        &self,
        facility: NewFacility,
    ) -> Result<FacilityRecord, FacilitiesServiceError>;

    /// Retrieve a single facility.
    async fn get_facility(
        &self,
        facility: FacilityUuid,
    ) -> Result<FacilityRecord, FacilitiesServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_facility_returns_correct_uuid_and_name() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = FacilityUuid::new();

        let before = Timestamp::now();

        let facility = ctx
            .facilities
            .create_facility(NewFacility {
                uuid,
                name: "Eastside Annex".to_string(),
                active: true,
            })
            .await?;

        assert_eq!(facility.uuid, uuid);
        assert_eq!(facility.name, "Eastside Annex");
        assert!(facility.active);
        assert!(facility.created_at >= before);

        Ok(())
    }

    #[tokio::test]
    async fn get_facility_returns_created_facility() -> TestResult {
        let ctx = TestContext::new().await;

        let facility = ctx.facilities.get_facility(ctx.facility_uuid).await?;

        assert_eq!(facility.uuid, ctx.facility_uuid);

        Ok(())
    }

    #[tokio::test]
    async fn get_facility_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.facilities.get_facility(FacilityUuid::new()).await;

        assert!(
            matches!(result, Err(FacilitiesServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_facility_duplicate_name_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.create_facility("Harbor House").await;

        let result = ctx
            .facilities
            .create_facility(NewFacility {
                uuid: FacilityUuid::new(),
                name: "Harbor House".to_string(),
                active: false,
            })
            .await;

        assert!(
            matches!(result, Err(FacilitiesServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_facility_blank_name_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .facilities
            .create_facility(NewFacility {
                uuid: FacilityUuid::new(),
                name: "  ".to_string(),
                active: true,
            })
            .await;

        assert!(
            matches!(result, Err(FacilitiesServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }
}
