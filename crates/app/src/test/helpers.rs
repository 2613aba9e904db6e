//! Test Helpers

use jiff::civil::{Date, time};
use matnight::{assignment::OccupantDetails, templates::TemplateMats};
use testresult::TestResult;

use crate::{
    domain::{
        checkins::{
            CheckinsService,
            data::AssignCommand,
            records::CheckinRecord,
        },
        facilities::records::FacilityUuid,
        guests::{GuestsService, data::NewGuest, records::GuestUuid},
        templates::{TemplatesService, data::NewTemplate, records::TemplateUuid},
    },
    test::TestContext,
};

pub(crate) fn layout(
    all: &str,
    handicap: Option<&str>,
    socket: Option<&str>,
    work: Option<&str>,
) -> TemplateMats {
    TemplateMats {
        all_mats: all.to_string(),
        handicap_mats: handicap.map(ToString::to_string),
        socket_mats: socket.map(ToString::to_string),
        work_mats: work.map(ToString::to_string),
    }
}

pub(crate) async fn create_template(
    ctx: &TestContext,
    facility: FacilityUuid,
    mats: TemplateMats,
) -> TestResult<TemplateUuid> {
    let template = ctx
        .templates
        .create_template(NewTemplate {
            uuid: TemplateUuid::new(),
            facility_uuid: facility,
            name: format!("Layout {}", TemplateUuid::new()),
            mats,
        })
        .await?;

    Ok(template.uuid)
}

pub(crate) async fn create_guest(
    ctx: &TestContext,
    facility: FacilityUuid,
    first_name: &str,
    last_name: &str,
) -> TestResult<GuestUuid> {
    let guest = ctx
        .guests
        .create_guest(NewGuest {
            uuid: GuestUuid::new(),
            facility_uuid: facility,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
        .await?;

    Ok(guest.uuid)
}

/// Generate a featureless night from `all_mats`.
pub(crate) async fn generate_night(
    ctx: &TestContext,
    facility: FacilityUuid,
    date: Date,
    all_mats: &str,
) -> TestResult<Vec<CheckinRecord>> {
    let template = create_template(ctx, facility, layout(all_mats, None, None, None)).await?;

    Ok(ctx
        .checkins
        .generate_inventory(facility, date, template)
        .await?)
}

pub(crate) async fn night(
    ctx: &TestContext,
    facility: FacilityUuid,
    date: Date,
) -> TestResult<Vec<CheckinRecord>> {
    Ok(ctx.checkins.list_checkins(facility, date).await?)
}

pub(crate) fn night_mat(records: &[CheckinRecord], mat_number: u32) -> TestResult<CheckinRecord> {
    let record = records
        .iter()
        .find(|record| record.mat_number == mat_number)
        .cloned()
        .ok_or("mat missing from night")?;

    Ok(record)
}

pub(crate) fn details(comments: &str) -> OccupantDetails {
    OccupantDetails {
        comments: Some(comments.to_string()),
        payment_type: Some("cash".to_string()),
        payment_amount: Some(500),
        shower_time: Some(time(21, 15, 0, 0)),
        wakeup_time: Some(time(6, 0, 0, 0)),
    }
}

pub(crate) fn assign_command(
    facility: FacilityUuid,
    guest: Option<GuestUuid>,
    details: OccupantDetails,
) -> AssignCommand {
    AssignCommand {
        facility_uuid: facility,
        guest_uuid: guest,
        details,
    }
}
