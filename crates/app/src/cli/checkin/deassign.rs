use clap::Args;
use matnight_app::domain::{
    checkins::{
        CheckinsService,
        data::DeassignCommand,
        records::{CheckinRecord, CheckinUuid},
    },
    facilities::records::FacilityUuid,
};
use uuid::Uuid;

use super::{checkin_failure, describe};

#[derive(Debug, Args)]
pub(crate) struct DeassignArgs {
    /// Facility the mat belongs to
    #[arg(long)]
    facility_uuid: Uuid,

    /// Mat-night checkin to release
    #[arg(long)]
    checkin_uuid: Uuid,
}

pub(crate) async fn run(args: DeassignArgs, service: &dyn CheckinsService) -> Result<(), String> {
    let record = deassign(args, service).await?;

    println!("{}", describe(&record));

    Ok(())
}

async fn deassign(
    args: DeassignArgs,
    service: &dyn CheckinsService,
) -> Result<CheckinRecord, String> {
    service
        .deassign(
            FacilityUuid::from_uuid(args.facility_uuid),
            DeassignCommand {
                checkin: CheckinUuid::from_uuid(args.checkin_uuid),
            },
        )
        .await
        .map_err(|error| checkin_failure("deassign mat", &error))
}

#[cfg(test)]
mod tests {
    use matnight_app::domain::checkins::{CheckinsServiceError, MockCheckinsService};

    use super::*;

    #[tokio::test]
    async fn open_mat_is_reported_as_bad_request() {
        let checkin = Uuid::now_v7();
        let mut service = MockCheckinsService::new();

        service
            .expect_deassign()
            .withf(move |_, command| command.checkin.into_uuid() == checkin)
            .returning(|_, command| Err(CheckinsServiceError::NotAssigned(command.checkin)));

        let result = deassign(
            DeassignArgs {
                facility_uuid: Uuid::now_v7(),
                checkin_uuid: checkin,
            },
            &service,
        )
        .await;

        assert_eq!(
            result.map(|record| record.uuid),
            Err(format!(
                "failed to deassign mat [bad_request]: checkin {checkin} is not currently assigned"
            ))
        );
    }
}
