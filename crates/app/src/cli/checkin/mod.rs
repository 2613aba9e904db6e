use clap::{Args, Subcommand};
use matnight_app::domain::checkins::{
    CheckinsService, CheckinsServiceError, records::CheckinRecord,
};

use crate::cli::error_chain;

mod assign;
mod deassign;
mod list;
mod reassign;

#[derive(Debug, Args)]
pub(crate) struct CheckinCommand {
    #[command(subcommand)]
    command: CheckinSubcommand,
}

#[derive(Debug, Subcommand)]
enum CheckinSubcommand {
    /// Put a guest on a mat or update their details
    Assign(assign::AssignArgs),

    /// Release the guest on a mat
    Deassign(deassign::DeassignArgs),

    /// Move a guest to an open mat the same night
    Reassign(reassign::ReassignArgs),

    /// Show a night's mats
    List(list::ListArgs),
}

pub(crate) async fn run(
    command: CheckinCommand,
    service: &dyn CheckinsService,
) -> Result<(), String> {
    match command.command {
        CheckinSubcommand::Assign(args) => assign::run(args, service).await,
        CheckinSubcommand::Deassign(args) => deassign::run(args, service).await,
        CheckinSubcommand::Reassign(args) => reassign::run(args, service).await,
        CheckinSubcommand::List(args) => list::run(args, service).await,
    }
}

/// One line per mat: number, features, occupant, checkin UUID.
pub(crate) fn describe(record: &CheckinRecord) -> String {
    let features = record
        .features
        .to_tag_string()
        .unwrap_or_else(|| "-".to_string());

    let occupant = record
        .guest_uuid
        .map_or_else(|| "open".to_string(), |guest| format!("guest {guest}"));

    format!(
        "mat {} [{features}] {occupant} (checkin {})",
        record.mat_number, record.uuid
    )
}

pub(crate) fn checkin_failure(action: &str, error: &CheckinsServiceError) -> String {
    format!(
        "failed to {action} [{}]: {}",
        error.kind().as_str(),
        error_chain(error)
    )
}

fn print_checkin(record: &CheckinRecord) {
    println!("{}", describe(record));

    let details = &record.details;

    if let Some(comments) = &details.comments {
        println!("comments: {comments}");
    }

    if let Some(payment_type) = &details.payment_type {
        println!("payment_type: {payment_type}");
    }

    if let Some(payment_amount) = details.payment_amount {
        println!("payment_amount: {payment_amount}");
    }

    if let Some(shower_time) = details.shower_time {
        println!("shower_time: {shower_time}");
    }

    if let Some(wakeup_time) = details.wakeup_time {
        println!("wakeup_time: {wakeup_time}");
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use jiff::{Timestamp, civil::date};
    use matnight::{assignment::OccupantDetails, features::MatFeatures};
    use matnight_app::domain::{
        checkins::records::{CheckinRecord, CheckinUuid},
        facilities::records::FacilityUuid,
        guests::records::GuestUuid,
    };

    pub(crate) fn checkin(mat_number: u32, guest_uuid: Option<GuestUuid>) -> CheckinRecord {
        CheckinRecord {
            uuid: CheckinUuid::new(),
            facility_uuid: FacilityUuid::new(),
            checkin_date: date(2026, 10, 18),
            mat_number,
            guest_uuid,
            features: MatFeatures::empty(),
            details: OccupantDetails::default(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use matnight::features::{MatFeature, MatFeatures};
    use matnight_app::domain::guests::records::GuestUuid;

    use super::*;

    #[test]
    fn describe_shows_features_and_occupant() {
        let guest = GuestUuid::new();
        let mut record = fixtures::checkin(7, Some(guest));

        record.features = MatFeatures::empty()
            .with(MatFeature::Handicap)
            .with(MatFeature::Work);

        assert_eq!(
            describe(&record),
            format!("mat 7 [HW] guest {guest} (checkin {})", record.uuid)
        );
    }

    #[test]
    fn describe_marks_open_featureless_mats() {
        let record = fixtures::checkin(2, None);

        assert_eq!(
            describe(&record),
            format!("mat 2 [-] open (checkin {})", record.uuid)
        );
    }
}
