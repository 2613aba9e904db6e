//! Checkins service.

use async_trait::async_trait;
use jiff::civil::Date;
use matnight::{
    assignment::{AssignPlan, OccupantDetails, ReassignError, TransitionError, reassign},
    inventory::plan_inventory,
    templates::validate,
};
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        checkins::{
            data::{AssignCommand, DeassignCommand, ReassignCommand},
            errors::CheckinsServiceError,
            records::{CheckinRecord, CheckinUuid},
            repository::PgCheckinsRepository,
        },
        facilities::{records::FacilityUuid, repository::PgFacilitiesRepository},
        guests::{records::GuestUuid, repository::PgGuestsRepository},
        templates::{records::TemplateUuid, repository::PgTemplatesRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCheckinsService {
    db: Db,
    repository: PgCheckinsRepository,
    facilities: PgFacilitiesRepository,
    templates: PgTemplatesRepository,
    guests: PgGuestsRepository,
}

impl PgCheckinsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCheckinsRepository::new(),
            facilities: PgFacilitiesRepository::new(),
            templates: PgTemplatesRepository::new(),
            guests: PgGuestsRepository::new(),
        }
    }

    async fn require_facility(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
    ) -> Result<(), CheckinsServiceError> {
        self.facilities
            .find_facility(tx, facility)
            .await?
            .ok_or(CheckinsServiceError::FacilityNotFound(facility))?;

        Ok(())
    }

    async fn require_guest(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        guest: GuestUuid,
    ) -> Result<(), CheckinsServiceError> {
        let record = self
            .guests
            .find_guest(tx, guest)
            .await?
            .ok_or(CheckinsServiceError::GuestNotFound(guest))?;

        if record.facility_uuid != facility {
            return Err(CheckinsServiceError::GuestFacilityMismatch { guest, facility });
        }

        Ok(())
    }

    async fn lock_owned_checkin(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        facility: FacilityUuid,
        checkin: CheckinUuid,
    ) -> Result<CheckinRecord, CheckinsServiceError> {
        let record = self
            .repository
            .lock_checkin(tx, checkin)
            .await?
            .ok_or(CheckinsServiceError::CheckinNotFound(checkin))?;

        ensure_owned(&record, facility)?;

        Ok(record)
    }
}

fn ensure_owned(record: &CheckinRecord, facility: FacilityUuid) -> Result<(), CheckinsServiceError> {
    if record.facility_uuid != facility {
        return Err(CheckinsServiceError::CheckinFacilityMismatch {
            checkin: record.uuid,
            facility,
        });
    }

    Ok(())
}

fn refused(checkin: CheckinUuid, error: TransitionError<GuestUuid>) -> CheckinsServiceError {
    match error {
        TransitionError::Occupied { current } => CheckinsServiceError::MatOccupied {
            checkin,
            guest: current,
        },
        TransitionError::NotAssigned => CheckinsServiceError::NotAssigned(checkin),
    }
}

fn ensure_storable_payment(
    checkin: CheckinUuid,
    details: &OccupantDetails,
) -> Result<(), CheckinsServiceError> {
    match details.payment_amount {
        Some(amount) if i64::try_from(amount).is_err() => {
            Err(CheckinsServiceError::InvalidPaymentAmount { checkin, amount })
        }
        _ => Ok(()),
    }
}

fn take_locked(
    records: &mut Vec<CheckinRecord>,
    checkin: CheckinUuid,
) -> Result<CheckinRecord, CheckinsServiceError> {
    let index = records
        .iter()
        .position(|record| record.uuid == checkin)
        .ok_or(CheckinsServiceError::CheckinNotFound(checkin))?;

    Ok(records.swap_remove(index))
}

#[async_trait]
impl CheckinsService for PgCheckinsService {
    #[tracing::instrument(
        name = "checkins.service.generate_inventory",
        skip(self),
        fields(facility_uuid = %facility, checkin_date = %date, template_uuid = %template),
        err
    )]
    async fn generate_inventory(
        &self,
        facility: FacilityUuid,
        date: Date,
        template: TemplateUuid,
    ) -> Result<Vec<CheckinRecord>, CheckinsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.require_facility(&mut tx, facility).await?;

        let record = self
            .templates
            .find_template(&mut tx, template)
            .await?
            .ok_or(CheckinsServiceError::TemplateNotFound(template))?;

        if record.facility_uuid != facility {
            return Err(CheckinsServiceError::TemplateFacilityMismatch { template, facility });
        }

        let validated = validate(&record.mats)
            .map_err(|source| CheckinsServiceError::InvalidTemplate { template, source })?;

        self.repository.lock_night(&mut tx, facility, date).await?;

        let existing = self
            .repository
            .count_night_checkins(&mut tx, facility, date)
            .await?;

        if existing > 0 {
            return Err(CheckinsServiceError::InventoryExists {
                facility,
                date,
                existing,
            });
        }

        let created = self
            .repository
            .create_checkins(&mut tx, facility, date, &plan_inventory(&validated))
            .await
            .map_err(|error| CheckinsServiceError::from_inventory_write(error, facility, date))?;

        tx.commit().await?;

        info!(
            facility_uuid = %facility,
            checkin_date = %date,
            mat_count = created.len(),
            "generated inventory"
        );

        Ok(created)
    }

    async fn list_checkins(
        &self,
        facility: FacilityUuid,
        date: Date,
    ) -> Result<Vec<CheckinRecord>, CheckinsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.require_facility(&mut tx, facility).await?;

        let records = self
            .repository
            .list_night_checkins(&mut tx, facility, date)
            .await?;

        tx.commit().await?;

        Ok(records)
    }

    #[tracing::instrument(
        name = "checkins.service.assign",
        skip(self, command),
        fields(
            facility_uuid = %facility,
            checkin_uuid = %checkin,
            guest_uuid = ?command.guest_uuid
        ),
        err
    )]
    async fn assign(
        &self,
        facility: FacilityUuid,
        checkin: CheckinUuid,
        command: AssignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError> {
        if command.facility_uuid != facility {
            return Err(CheckinsServiceError::PayloadFacilityMismatch {
                facility,
                payload: command.facility_uuid,
            });
        }

        let mut tx = self.db.begin_transaction().await?;

        self.require_facility(&mut tx, facility).await?;

        let guest = command
            .guest_uuid
            .ok_or(CheckinsServiceError::MissingGuest(checkin))?;

        self.require_guest(&mut tx, facility, guest).await?;

        let current = self.lock_owned_checkin(&mut tx, facility, checkin).await?;

        ensure_storable_payment(checkin, &command.details)?;

        let (plan, slot) = current
            .slot()
            .assigned(guest, command.details)
            .map_err(|error| refused(checkin, error))?;

        let date = current.checkin_date;

        if plan == AssignPlan::Occupy
            && self
                .repository
                .find_guest_checkin(&mut tx, facility, date, guest)
                .await?
                .is_some()
        {
            return Err(CheckinsServiceError::GuestAlreadyCheckedIn { guest, date });
        }

        let updated = self
            .repository
            .update_slot(&mut tx, checkin, &slot)
            .await
            .map_err(|error| CheckinsServiceError::from_guest_write(error, guest, date))?;

        tx.commit().await?;

        info!(
            checkin_uuid = %checkin,
            guest_uuid = %guest,
            mat_number = updated.mat_number,
            details_only = plan == AssignPlan::UpdateDetails,
            "assigned mat"
        );

        Ok(updated)
    }

    #[tracing::instrument(
        name = "checkins.service.deassign",
        skip(self, command),
        fields(facility_uuid = %facility, checkin_uuid = %command.checkin),
        err
    )]
    async fn deassign(
        &self,
        facility: FacilityUuid,
        command: DeassignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError> {
        let checkin = command.checkin;

        let mut tx = self.db.begin_transaction().await?;

        self.require_facility(&mut tx, facility).await?;

        let current = self.lock_owned_checkin(&mut tx, facility, checkin).await?;

        let slot = current
            .slot()
            .deassigned()
            .map_err(|error| refused(checkin, error))?;

        let updated = self.repository.update_slot(&mut tx, checkin, &slot).await?;

        tx.commit().await?;

        info!(
            checkin_uuid = %checkin,
            mat_number = updated.mat_number,
            "deassigned mat"
        );

        Ok(updated)
    }

    #[tracing::instrument(
        name = "checkins.service.reassign",
        skip(self, command),
        fields(
            facility_uuid = %facility,
            from_checkin_uuid = %command.from,
            to_checkin_uuid = %command.to
        ),
        err
    )]
    async fn reassign(
        &self,
        facility: FacilityUuid,
        command: ReassignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError> {
        let ReassignCommand { from, to } = command;

        if from == to {
            return Err(CheckinsServiceError::SameCheckin(from));
        }

        let mut tx = self.db.begin_transaction().await?;

        self.require_facility(&mut tx, facility).await?;

        let mut locked = self.repository.lock_checkins(&mut tx, &[from, to]).await?;

        let old = take_locked(&mut locked, from)?;
        ensure_owned(&old, facility)?;

        if !old.is_assigned() {
            return Err(CheckinsServiceError::NotAssigned(from));
        }

        let new = take_locked(&mut locked, to)?;
        ensure_owned(&new, facility)?;

        if old.checkin_date != new.checkin_date {
            return Err(CheckinsServiceError::DifferentNights { from, to });
        }

        let moved = reassign(&old.slot(), &new.slot()).map_err(|error| match error {
            ReassignError::SourceUnassigned => CheckinsServiceError::NotAssigned(from),
            ReassignError::TargetOccupied { current } => CheckinsServiceError::MatOccupied {
                checkin: to,
                guest: current,
            },
        })?;

        let date = old.checkin_date;

        // The guest index is not deferrable, so the old slot is cleared first.
        self.repository
            .update_slot(&mut tx, from, &moved.vacated)
            .await?;

        let updated = self
            .repository
            .update_slot(&mut tx, to, &moved.occupied)
            .await
            .map_err(|error| match moved.occupied.occupancy.guest() {
                Some(guest) => CheckinsServiceError::from_guest_write(error, guest, date),
                None => error.into(),
            })?;

        tx.commit().await?;

        info!(
            from_checkin_uuid = %from,
            to_checkin_uuid = %to,
            mat_number = updated.mat_number,
            "reassigned mat"
        );

        Ok(updated)
    }
}

#[automock]
#[async_trait]
/// Nightly mat inventory and occupancy operations.
pub trait CheckinsService: Send + Sync {
    /// Create one open checkin per template mat for a facility night.
    ///
    /// All records are created or none are. Fails with a conflict when the
    /// night already has any records.
    async fn generate_inventory(
        &self,
        facility: FacilityUuid,
        date: Date,
        template: TemplateUuid,
    ) -> Result<Vec<CheckinRecord>, CheckinsServiceError>;

    /// A night's checkins, ordered by mat number.
    async fn list_checkins(
        &self,
        facility: FacilityUuid,
        date: Date,
    ) -> Result<Vec<CheckinRecord>, CheckinsServiceError>;

    /// Assign a guest to a mat, or update the details of the guest already on it.
    async fn assign(
        &self,
        facility: FacilityUuid,
        checkin: CheckinUuid,
        command: AssignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError>;

    /// Release the guest on a mat and clear the occupant details.
    async fn deassign(
        &self,
        facility: FacilityUuid,
        command: DeassignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError>;

    /// Move a guest and their details to an open mat on the same night.
    ///
    /// Returns the newly occupied checkin.
    async fn reassign(
        &self,
        facility: FacilityUuid,
        command: ReassignCommand,
    ) -> Result<CheckinRecord, CheckinsServiceError>;
}
