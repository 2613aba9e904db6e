use clap::Args;
use jiff::civil::Date;
use matnight_app::domain::{
    checkins::{CheckinsService, records::CheckinRecord},
    facilities::records::FacilityUuid,
};
use uuid::Uuid;

use super::{checkin_failure, describe};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[arg(long)]
    facility_uuid: Uuid,

    /// Night to show, e.g. 2026-10-18
    #[arg(long)]
    date: Date,
}

pub(crate) async fn run(args: ListArgs, service: &dyn CheckinsService) -> Result<(), String> {
    let date = args.date;
    let records = service
        .list_checkins(FacilityUuid::from_uuid(args.facility_uuid), date)
        .await
        .map_err(|error| checkin_failure("list checkins", &error))?;

    if records.is_empty() {
        println!("no mats generated for {date}");
        return Ok(());
    }

    println!("{}", summary(&records));

    for record in &records {
        println!("{}", describe(record));
    }

    Ok(())
}

fn summary(records: &[CheckinRecord]) -> String {
    let occupied = records.iter().filter(|record| record.is_assigned()).count();

    format!("occupied: {occupied}/{}", records.len())
}
