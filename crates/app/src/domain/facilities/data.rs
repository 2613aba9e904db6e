//! Facility Data

use crate::domain::facilities::records::FacilityUuid;

/// New Facility Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewFacility {
    /// UUID to assign to the facility row.
    pub uuid: FacilityUuid,

    /// Facility name; unique across facilities.
    pub name: String,

    /// Whether the facility currently takes guests.
    pub active: bool,
}
