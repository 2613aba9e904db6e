//! Facility Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Facility UUID
pub type FacilityUuid = TypedUuid<FacilityRecord>;

/// Facility Record
#[derive(Debug, Clone)]
pub struct FacilityRecord {
    /// Unique facility identifier.
    pub uuid: FacilityUuid,

    /// Human-readable facility name.
    pub name: String,

    /// Whether the facility currently takes guests.
    pub active: bool,

    /// Facility creation timestamp.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
