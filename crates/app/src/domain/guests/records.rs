//! Guest Records

use jiff::Timestamp;

use crate::{domain::facilities::records::FacilityUuid, uuids::TypedUuid};

/// Guest UUID
pub type GuestUuid = TypedUuid<GuestRecord>;

/// Guest Record
#[derive(Debug, Clone)]
pub struct GuestRecord {
    pub uuid: GuestUuid,
    pub facility_uuid: FacilityUuid,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
