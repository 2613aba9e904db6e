//! Checkin Records

use jiff::{Timestamp, civil::Date};
use matnight::{
    assignment::{MatSlot, Occupancy, OccupantDetails},
    features::MatFeatures,
};

use crate::{
    domain::{facilities::records::FacilityUuid, guests::records::GuestUuid},
    uuids::TypedUuid,
};

/// Checkin UUID
pub type CheckinUuid = TypedUuid<CheckinRecord>;

/// One mat on one night at one facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinRecord {
    pub uuid: CheckinUuid,
    pub facility_uuid: FacilityUuid,
    pub checkin_date: Date,
    pub mat_number: u32,
    pub guest_uuid: Option<GuestUuid>,
    pub features: MatFeatures,
    pub details: OccupantDetails,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CheckinRecord {
    /// Occupancy and occupant details as a state machine value.
    pub fn slot(&self) -> MatSlot<GuestUuid> {
        MatSlot {
            occupancy: Occupancy::from_guest(self.guest_uuid),
            details: self.details.clone(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.guest_uuid.is_some()
    }
}
