use clap::Args;
use matnight_app::domain::facilities::{
    FacilitiesService,
    data::NewFacility,
    records::{FacilityRecord, FacilityUuid},
};
use uuid::Uuid;

use crate::cli::error_chain;

#[derive(Debug, Args)]
pub(crate) struct CreateFacilityArgs {
    /// Facility display name
    #[arg(long)]
    name: String,

    /// Optional facility UUID; generated when omitted
    #[arg(long)]
    facility_uuid: Option<Uuid>,

    /// Register the facility as inactive
    #[arg(long)]
    inactive: bool,
}

pub(crate) async fn run(
    args: CreateFacilityArgs,
    service: &dyn FacilitiesService,
) -> Result<(), String> {
    let facility = create(args, service).await?;

    println!("facility_uuid: {}", facility.uuid);
    println!("facility_name: {}", facility.name);
    println!("active: {}", facility.active);

    Ok(())
}

async fn create(
    args: CreateFacilityArgs,
    service: &dyn FacilitiesService,
) -> Result<FacilityRecord, String> {
    service
        .create_facility(NewFacility {
            uuid: args
                .facility_uuid
                .map_or_else(FacilityUuid::new, FacilityUuid::from_uuid),
            name: args.name,
            active: !args.inactive,
        })
        .await
        .map_err(|error| format!("failed to create facility: {}", error_chain(&error)))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use matnight_app::domain::facilities::{FacilitiesServiceError, MockFacilitiesService};
    use testresult::TestResult;

    use super::*;

    fn args(facility_uuid: Option<Uuid>) -> CreateFacilityArgs {
        CreateFacilityArgs {
            name: "Harbor House".to_string(),
            facility_uuid,
            inactive: true,
        }
    }

    #[tokio::test]
    async fn create_passes_requested_uuid_and_inactive_flag() -> TestResult {
        let requested = Uuid::now_v7();
        let mut service = MockFacilitiesService::new();

        service
            .expect_create_facility()
            .withf(move |facility| {
                facility.uuid.into_uuid() == requested
                    && facility.name == "Harbor House"
                    && !facility.active
            })
            .times(1)
            .returning(|facility| {
                Ok(FacilityRecord {
                    uuid: facility.uuid,
                    name: facility.name,
                    active: facility.active,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let created = create(args(Some(requested)), &service).await?;

        assert_eq!(created.uuid.into_uuid(), requested);

        Ok(())
    }

    #[tokio::test]
    async fn create_reports_service_failure() {
        let mut service = MockFacilitiesService::new();

        service
            .expect_create_facility()
            .returning(|_| Err(FacilitiesServiceError::AlreadyExists));

        let result = create(args(None), &service).await;

        assert_eq!(
            result.map(|facility| facility.uuid),
            Err("failed to create facility: facility already exists".to_string())
        );
    }
}
