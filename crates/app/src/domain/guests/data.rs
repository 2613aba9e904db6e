//! Guest Data

use crate::domain::{facilities::records::FacilityUuid, guests::records::GuestUuid};

/// New Guest Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub uuid: GuestUuid,
    pub facility_uuid: FacilityUuid,
    pub first_name: String,
    pub last_name: String,
}
