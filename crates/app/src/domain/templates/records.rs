//! Template Records

use jiff::Timestamp;
use matnight::templates::TemplateMats;

use crate::{domain::facilities::records::FacilityUuid, uuids::TypedUuid};

/// Template UUID
pub type TemplateUuid = TypedUuid<TemplateRecord>;

/// Template Record
#[derive(Debug, Clone)]
pub struct TemplateRecord {
    pub uuid: TemplateUuid,
    pub facility_uuid: FacilityUuid,
    pub name: String,
    pub mats: TemplateMats,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
