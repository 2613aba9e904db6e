//! Checkin Commands

use matnight::assignment::OccupantDetails;

use crate::domain::{
    checkins::records::CheckinUuid, facilities::records::FacilityUuid, guests::records::GuestUuid,
};

/// Put a guest on a mat, or update the details of the guest already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignCommand {
    /// Facility the caller believes the checkin belongs to.
    pub facility_uuid: FacilityUuid,

    /// Guest to assign. Required; absent is rejected.
    pub guest_uuid: Option<GuestUuid>,

    /// Details replacing whatever the slot recorded before.
    pub details: OccupantDetails,
}

/// Release the guest on a mat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeassignCommand {
    pub checkin: CheckinUuid,
}

/// Move the guest on one mat to another mat the same night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReassignCommand {
    /// Currently occupied mat.
    pub from: CheckinUuid,

    /// Open mat receiving the guest.
    pub to: CheckinUuid,
}
