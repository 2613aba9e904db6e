use clap::Args;
use jiff::civil::Time;
use matnight::assignment::OccupantDetails;
use matnight_app::domain::{
    checkins::{
        CheckinsService,
        data::AssignCommand,
        records::{CheckinRecord, CheckinUuid},
    },
    facilities::records::FacilityUuid,
    guests::records::GuestUuid,
};
use uuid::Uuid;

use super::{checkin_failure, print_checkin};

#[derive(Debug, Args)]
pub(crate) struct AssignArgs {
    /// Facility the mat belongs to
    #[arg(long)]
    facility_uuid: Uuid,

    /// Mat-night checkin to assign
    #[arg(long)]
    checkin_uuid: Uuid,

    /// Guest to put on the mat
    #[arg(long)]
    guest_uuid: Uuid,

    #[arg(long)]
    comments: Option<String>,

    #[arg(long)]
    payment_type: Option<String>,

    /// Amount paid, in minor units
    #[arg(long)]
    payment_amount: Option<u64>,

    /// Requested shower slot, e.g. 21:15:00
    #[arg(long)]
    shower_time: Option<Time>,

    /// Requested wakeup call, e.g. 05:45:00
    #[arg(long)]
    wakeup_time: Option<Time>,
}

pub(crate) async fn run(args: AssignArgs, service: &dyn CheckinsService) -> Result<(), String> {
    let record = assign(args, service).await?;

    print_checkin(&record);

    Ok(())
}

async fn assign(args: AssignArgs, service: &dyn CheckinsService) -> Result<CheckinRecord, String> {
    let facility = FacilityUuid::from_uuid(args.facility_uuid);

    service
        .assign(
            facility,
            CheckinUuid::from_uuid(args.checkin_uuid),
            AssignCommand {
                facility_uuid: facility,
                guest_uuid: Some(GuestUuid::from_uuid(args.guest_uuid)),
                details: OccupantDetails {
                    comments: args.comments,
                    payment_type: args.payment_type,
                    payment_amount: args.payment_amount,
                    shower_time: args.shower_time,
                    wakeup_time: args.wakeup_time,
                },
            },
        )
        .await
        .map_err(|error| checkin_failure("assign mat", &error))
}
