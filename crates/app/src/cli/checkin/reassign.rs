use clap::Args;
use matnight_app::domain::{
    checkins::{
        CheckinsService,
        data::ReassignCommand,
        records::{CheckinRecord, CheckinUuid},
    },
    facilities::records::FacilityUuid,
};
use uuid::Uuid;

use super::{checkin_failure, print_checkin};

#[derive(Debug, Args)]
pub(crate) struct ReassignArgs {
    /// Facility both mats belong to
    #[arg(long)]
    facility_uuid: Uuid,

    /// Occupied checkin to move the guest from
    #[arg(long)]
    from: Uuid,

    /// Open checkin to move the guest to
    #[arg(long)]
    to: Uuid,
}

pub(crate) async fn run(args: ReassignArgs, service: &dyn CheckinsService) -> Result<(), String> {
    let record = reassign(args, service).await?;

    print_checkin(&record);

    Ok(())
}

async fn reassign(
    args: ReassignArgs,
    service: &dyn CheckinsService,
) -> Result<CheckinRecord, String> {
    service
        .reassign(
            FacilityUuid::from_uuid(args.facility_uuid),
            ReassignCommand {
                from: CheckinUuid::from_uuid(args.from),
                to: CheckinUuid::from_uuid(args.to),
            },
        )
        .await
        .map_err(|error| checkin_failure("reassign mat", &error))
}
