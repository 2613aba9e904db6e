use clap::Args;
use matnight_app::domain::{
    facilities::records::FacilityUuid,
    guests::{
        GuestsService,
        data::NewGuest,
        records::{GuestRecord, GuestUuid},
    },
};
use uuid::Uuid;

use crate::cli::error_chain;

#[derive(Debug, Args)]
pub(crate) struct CreateGuestArgs {
    /// Facility the guest stays at
    #[arg(long)]
    facility_uuid: Uuid,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    /// Optional guest UUID; generated when omitted
    #[arg(long)]
    guest_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateGuestArgs, service: &dyn GuestsService) -> Result<(), String> {
    let guest = create(args, service).await?;

    println!("guest_uuid: {}", guest.uuid);
    println!("facility_uuid: {}", guest.facility_uuid);
    println!("guest_name: {}, {}", guest.last_name, guest.first_name);

    Ok(())
}

async fn create(args: CreateGuestArgs, service: &dyn GuestsService) -> Result<GuestRecord, String> {
    service
        .create_guest(NewGuest {
            uuid: args
                .guest_uuid
                .map_or_else(GuestUuid::new, GuestUuid::from_uuid),
            facility_uuid: FacilityUuid::from_uuid(args.facility_uuid),
            first_name: args.first_name,
            last_name: args.last_name,
        })
        .await
        .map_err(|error| format!("failed to create guest: {}", error_chain(&error)))
}
