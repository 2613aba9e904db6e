use clap::Args;
use jiff::civil::Date;
use matnight_app::domain::{
    checkins::{CheckinsService, records::CheckinRecord},
    facilities::records::FacilityUuid,
    templates::records::TemplateUuid,
};
use uuid::Uuid;

use crate::cli::checkin::{checkin_failure, describe};

#[derive(Debug, Args)]
pub(crate) struct GenerateInventoryArgs {
    /// Facility to generate mats for
    #[arg(long)]
    facility_uuid: Uuid,

    /// Template describing the mat layout
    #[arg(long)]
    template_uuid: Uuid,

    /// Night to generate, e.g. 2026-10-18
    #[arg(long)]
    date: Date,
}

pub(crate) async fn run(
    args: GenerateInventoryArgs,
    service: &dyn CheckinsService,
) -> Result<(), String> {
    let date = args.date;
    let created = generate(args, service).await?;

    println!("checkin_date: {date}");
    println!("mat_count: {}", created.len());

    for record in &created {
        println!("{}", describe(record));
    }

    Ok(())
}

async fn generate(
    args: GenerateInventoryArgs,
    service: &dyn CheckinsService,
) -> Result<Vec<CheckinRecord>, String> {
    service
        .generate_inventory(
            FacilityUuid::from_uuid(args.facility_uuid),
            args.date,
            TemplateUuid::from_uuid(args.template_uuid),
        )
        .await
        .map_err(|error| checkin_failure("generate inventory", &error))
}
